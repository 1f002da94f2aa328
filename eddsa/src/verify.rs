//! Single-signature verification with half-size scalars.
//!
//! The Ed25519 equation `[S]B = R + [h]A` is multiplied through by the
//! cofactor `r` of a reduction `r * h ≡ t (mod ell)`, giving
//!
//! ```text
//! [r * S]B + [|r|](-R) + [|t|](∓A) = 0
//! ```
//!
//! where `A` is negated exactly when `r` and `t` carry the same sign. The two
//! point scalars are now half size, and `r * S` is split at bit 126 so the
//! whole check is one four-term multiplication.

use curve::{Branch, Group, ScalarBits, decode_point, quadruple_scalar_mul_vartime, split_scalar};
use curve25519_dalek::scalar::Scalar;
use halfsize::{ED25519_ORDER, Reducer};

use crate::constants::PK_SIZE;
use crate::errors::VerifyError;
use crate::signatures::{Signature, challenge_limbs};

/// Verifies one signature using the default reducer.
pub fn verify(message: &[u8], public_key: &[u8; PK_SIZE], signature: &Signature) -> Result<(), VerifyError> {
    verify_with(Reducer::default(), message, public_key, signature)
}

/// [`verify`], reporting only whether the signature is valid.
pub fn verify_single(message: &[u8], public_key: &[u8; PK_SIZE], signature: &Signature) -> bool {
    verify(message, public_key, signature).is_ok()
}

/// Verifies one signature with the given scalar decomposition.
pub fn verify_with(
    reducer: Reducer,
    message: &[u8],
    public_key: &[u8; PK_SIZE],
    signature: &Signature,
) -> Result<(), VerifyError> {
    let s = signature.response()?;
    let h = challenge_limbs(&signature.r, public_key, message);
    let pair = reducer.reduce(&ED25519_ORDER, &h);

    let minus_r = decode_point(&signature.r, Branch::Negative)?;
    let a_branch = if pair.signs_differ() {
        Branch::Positive
    } else {
        Branch::Negative
    };
    let a = decode_point(public_key, a_branch)?;

    let rs = (Scalar::from_u64_limbs(&pair.r) * s).to_u64_limbs();
    let (rs_lo, rs_hi) = split_scalar(&rs);
    let check = quadruple_scalar_mul_vartime(&minus_r, &pair.r, &a, &pair.t, &rs_lo, &rs_hi);
    if check.is_identity() {
        Ok(())
    } else {
        Err(VerifyError::EquationFailed)
    }
}
