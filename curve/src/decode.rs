//! Point decompression with an explicit choice of square-root branch.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};

use crate::errors::CurveError;

/// Which of `P` and `-P` a decoding returns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Branch {
    /// The point exactly as encoded.
    Positive,
    /// The negation of the encoded point.
    Negative,
}

impl Branch {
    /// Branch that yields `-P` weighted by a cofactor of the given sign.
    ///
    /// `[c](-P) = [|c|](-P)` when `c >= 0` and `[|c|]P` when `c < 0`, so a
    /// negative cofactor flips the decoding to the positive branch.
    #[inline]
    pub fn of_negated(cofactor_negative: bool) -> Self {
        if cofactor_negative {
            Branch::Positive
        } else {
            Branch::Negative
        }
    }
}

/// Decompresses 32 bytes and returns the requested branch.
pub fn decode_point(bytes: &[u8; 32], branch: Branch) -> Result<EdwardsPoint, CurveError> {
    let point = CompressedEdwardsY(*bytes)
        .decompress()
        .ok_or(CurveError::InvalidEncoding)?;
    Ok(match branch {
        Branch::Positive => point,
        Branch::Negative => -point,
    })
}
