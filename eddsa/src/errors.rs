//! Error types for signature verification.

use curve::CurveError;
use thiserror::Error;

/// Reasons a signature, or a batch of them, fails to verify.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The response scalar has reserved high bits set.
    #[error("signature response scalar has reserved bits set")]
    MalformedSignature,

    /// `R` or the public key does not decode to a curve point.
    #[error("invalid point encoding: {0}")]
    InvalidPoint(#[from] CurveError),

    /// The verification equation does not hold.
    ///
    /// For a batch round this only says that at least one signature in the
    /// round is invalid.
    #[error("verification equation does not hold")]
    EquationFailed,

    /// Messages, public keys and signatures were given in different numbers.
    #[error("got {messages} messages, {public_keys} public keys and {signatures} signatures")]
    LengthMismatch {
        messages: usize,
        public_keys: usize,
        signatures: usize,
    },
}
