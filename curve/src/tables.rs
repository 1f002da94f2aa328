use std::sync::OnceLock;

use curve25519_dalek::edwards::EdwardsPoint;

use crate::constants::{BASE_WINDOW, SPLIT_BITS};
use crate::group::Group;
use crate::msm::OddMultiples;

static BASEPOINT_TABLE: OnceLock<OddMultiples<EdwardsPoint>> = OnceLock::new();
static SPLIT_BASEPOINT_TABLE: OnceLock<OddMultiples<EdwardsPoint>> = OnceLock::new();

/// `[2^126]B`.
pub fn split_basepoint() -> EdwardsPoint {
    <EdwardsPoint as Group>::generator().mul_pow2(SPLIT_BITS)
}

/// Odd multiples of the base point, built on first use.
pub fn basepoint_table() -> &'static OddMultiples<EdwardsPoint> {
    BASEPOINT_TABLE.get_or_init(|| OddMultiples::new(&<EdwardsPoint as Group>::generator(), BASE_WINDOW))
}

/// Odd multiples of `[2^126]B`, built on first use.
pub fn split_basepoint_table() -> &'static OddMultiples<EdwardsPoint> {
    SPLIT_BASEPOINT_TABLE.get_or_init(|| OddMultiples::new(&split_basepoint(), BASE_WINDOW))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::scalar::Scalar;

    #[test]
    fn test_split_basepoint() {
        let two_126 = Scalar::from(1u128 << 126);
        assert_eq!(split_basepoint(), <EdwardsPoint as Group>::generator() * two_126);
    }

    #[test]
    fn test_tables_are_shared() {
        assert!(core::ptr::eq(basepoint_table(), basepoint_table()));
        assert_eq!(split_basepoint_table().window(), BASE_WINDOW);
    }
}
