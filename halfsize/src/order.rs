//! Group orders of the supported EdDSA families.

use core::cmp::Ordering;

use num_bigint::BigUint;

use crate::limbs;

/// The prime order `ell` of an EdDSA group, as `N` little-endian limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order<const N: usize> {
    limbs: [u64; N],
    bits: u32,
}

/// ell = 2^252 + 27742317777372353535851937790883648493
pub const ED25519_ORDER: Order<4> = Order::new(
    [
        0x5812631a5cf5d3ed,
        0x14def9dea2f79cd6,
        0x0000000000000000,
        0x1000000000000000,
    ],
    253,
);

/// ell = 2^446 - 13818066809895115352007386748515426880336692474882178609894547503885
pub const ED448_ORDER: Order<7> = Order::new(
    [
        0x2378c292ab5844f3,
        0x216cc2728dc58f55,
        0xc44edb49aed63690,
        0xffffffff7cca23e9,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x3fffffffffffffff,
    ],
    446,
);

impl<const N: usize> Order<N> {
    pub const fn new(limbs: [u64; N], bits: u32) -> Self {
        Self { limbs, bits }
    }

    #[inline]
    pub const fn limbs(&self) -> &[u64; N] {
        &self.limbs
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Reduction target: `⌈bits / 2⌉`.
    #[inline]
    pub const fn half_bits(&self) -> u32 {
        self.bits.div_ceil(2)
    }

    /// Stop size of the half-GCD jump used before the Euclidean tail.
    #[inline]
    pub const fn hgcd_bits(&self) -> u32 {
        64 * (N as u32 / 2 + 1)
    }

    /// Stop size of the enhanced half-GCD reducer, which is also the largest
    /// cofactor any reducer returns.
    #[inline]
    pub const fn enhanced_bits(&self) -> u32 {
        self.half_bits() + 1
    }

    /// Returns true if `v < ell`.
    pub fn is_canonical(&self, v: &[u64; N]) -> bool {
        limbs::compare(v, &self.limbs) == Ordering::Less
    }

    pub fn to_biguint(&self) -> BigUint {
        limbs::to_biguint(&self.limbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_match_decimal_values() {
        let ell25519 = (BigUint::from(1u32) << 252u32)
            + "27742317777372353535851937790883648493"
                .parse::<BigUint>()
                .unwrap();
        assert_eq!(ED25519_ORDER.to_biguint(), ell25519);
        assert_eq!(ell25519.bits(), ED25519_ORDER.bits() as u64);

        let ell448 = (BigUint::from(1u32) << 446u32)
            - "13818066809895115352007386748515426880336692474882178609894547503885"
                .parse::<BigUint>()
                .unwrap();
        assert_eq!(ED448_ORDER.to_biguint(), ell448);
        assert_eq!(ell448.bits(), ED448_ORDER.bits() as u64);
    }

    #[test]
    fn test_targets() {
        assert_eq!(ED25519_ORDER.half_bits(), 127);
        assert_eq!(ED25519_ORDER.enhanced_bits(), 128);
        assert_eq!(ED25519_ORDER.hgcd_bits(), 192);
        assert_eq!(ED448_ORDER.half_bits(), 223);
        assert_eq!(ED448_ORDER.enhanced_bits(), 224);
        assert_eq!(ED448_ORDER.hgcd_bits(), 256);
    }

    #[test]
    fn test_is_canonical() {
        let ell = *ED25519_ORDER.limbs();
        assert!(!ED25519_ORDER.is_canonical(&ell));
        let mut below = ell;
        below[0] -= 1;
        assert!(ED25519_ORDER.is_canonical(&below));
    }
}
