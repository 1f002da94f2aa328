//! Error types for point handling.

use thiserror::Error;

/// Errors raised while turning bytes into group elements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The 32 bytes do not decompress to a point on edwards25519.
    #[error("bytes do not encode a point on the curve")]
    InvalidEncoding,
}
