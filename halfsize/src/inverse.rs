//! Variable-time inversion modulo a group order.

use crate::limbs::{add_lshift, is_negative, is_zero, magnitude_bits, negate, sub_lshift};
use crate::order::Order;

/// Returns `x^-1 mod ell`, or `None` for `x = 0` and non-canonical `x`.
///
/// Runs the signed shift-and-subtract Euclidean loop of
/// [`reduce_subtractive`](crate::reduce_subtractive) until the remainder
/// vanishes. Bit lengths here are exact, and the final `r2` is `±1`, so the
/// inverse is `sign(r2) * t2`.
pub fn invert_vartime<const N: usize>(order: &Order<N>, x: &[u64; N]) -> Option<[u64; N]> {
    if is_zero(x) || !order.is_canonical(x) {
        return None;
    }

    let mut r2 = *order.limbs();
    let mut r1 = *x;
    let mut t2 = [0u64; N];
    let mut t1 = [0u64; N];
    t1[0] = 1;

    let mut bl_r2 = order.bits();
    let mut bl_r1 = magnitude_bits(&r1);

    while !is_zero(&r1) {
        let s = bl_r2 - bl_r1;
        let mut r = r2;
        let mut t = t2;
        if is_negative(&r2) == is_negative(&r1) {
            sub_lshift(&mut r, &r1, s);
            sub_lshift(&mut t, &t1, s);
        } else {
            add_lshift(&mut r, &r1, s);
            add_lshift(&mut t, &t1, s);
        }

        let bl_r = magnitude_bits(&r);
        if bl_r > bl_r1 {
            r2 = r;
            t2 = t;
            bl_r2 = bl_r;
        } else {
            r2 = r1;
            r1 = r;
            t2 = t1;
            t1 = t;
            bl_r2 = bl_r1;
            bl_r1 = bl_r;
        }
    }

    if magnitude_bits(&r2) != 1 {
        return None;
    }
    if is_negative(&r2) {
        negate(&mut t2);
    }
    if is_negative(&t2) {
        add_lshift(&mut t2, order.limbs(), 0);
    }
    Some(t2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limbs::to_biguint;
    use crate::order::{ED25519_ORDER, ED448_ORDER};
    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn check<const N: usize>(order: &Order<N>, x: &[u64; N]) {
        let inv = invert_vartime(order, x).unwrap();
        assert!(order.is_canonical(&inv));
        let product = to_biguint(x) * to_biguint(&inv) % order.to_biguint();
        assert_eq!(product, BigUint::from(1u32));
    }

    #[test]
    fn test_inverse_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut x: [u64; 4] = [rng.random(), rng.random(), rng.random(), rng.random()];
            x[3] &= 0x0fff_ffff_ffff_ffff;
            if is_zero(&x) {
                continue;
            }
            check(&ED25519_ORDER, &x);

            let mut y = [0u64; 7];
            for limb in y.iter_mut() {
                *limb = rng.random();
            }
            y[6] &= 0x0fff_ffff_ffff_ffff;
            check(&ED448_ORDER, &y);
        }
    }

    #[test]
    fn test_inverse_edges() {
        check(&ED25519_ORDER, &[1, 0, 0, 0]);
        check(&ED25519_ORDER, &[2, 0, 0, 0]);
        let mut minus_one = *ED25519_ORDER.limbs();
        minus_one[0] -= 1;
        assert_eq!(invert_vartime(&ED25519_ORDER, &minus_one), Some(minus_one));
        assert_eq!(invert_vartime(&ED25519_ORDER, &[1, 0, 0, 0]), Some([1, 0, 0, 0]));
    }

    #[test]
    fn test_inverse_rejects_zero_and_non_canonical() {
        assert_eq!(invert_vartime(&ED25519_ORDER, &[0; 4]), None);
        assert_eq!(invert_vartime(&ED25519_ORDER, ED25519_ORDER.limbs()), None);
    }
}
