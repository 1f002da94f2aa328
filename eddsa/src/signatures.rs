//! Signature encoding and challenge hashing.

use curve::ScalarBits;
use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use crate::constants::{PK_SIZE, RESERVED_S_BITS, SIG_SIZE};
use crate::errors::VerifyError;

/// An Ed25519 signature `(R, S)` in its wire encoding.
///
/// Neither half is validated on construction: `R` is decoded and `S` checked
/// for reserved bits only when the signature is verified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// The compressed commitment point `R`.
    pub r: [u8; 32],
    /// The little-endian response scalar `S`.
    pub s: [u8; 32],
}

impl Signature {
    pub fn from_bytes(bytes: &[u8; SIG_SIZE]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Self { r, s }
    }

    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut bytes = [0u8; SIG_SIZE];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..].copy_from_slice(&self.s);
        bytes
    }

    /// `S` reduced modulo `ell`, or an error if its reserved bits are set.
    pub(crate) fn response(&self) -> Result<Scalar, VerifyError> {
        if self.s[31] & RESERVED_S_BITS != 0 {
            return Err(VerifyError::MalformedSignature);
        }
        Ok(Scalar::from_bytes_mod_order(self.s))
    }
}

impl From<[u8; SIG_SIZE]> for Signature {
    fn from(bytes: [u8; SIG_SIZE]) -> Self {
        Self::from_bytes(&bytes)
    }
}

/// Computes the challenge `h = SHA-512(R || A || M) mod ell`.
pub fn hash_challenge(r: &[u8; 32], public_key: &[u8; PK_SIZE], message: &[u8]) -> Scalar {
    let digest = Sha512::new()
        .chain_update(r)
        .chain_update(public_key)
        .chain_update(message)
        .finalize();
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&digest);
    Scalar::from_bytes_mod_order_wide(&wide)
}

/// [`hash_challenge`] as little-endian limbs, ready for a reducer.
pub(crate) fn challenge_limbs(r: &[u8; 32], public_key: &[u8; PK_SIZE], message: &[u8]) -> [u64; 4] {
    hash_challenge(r, public_key, message).to_u64_limbs()
}
