//! Half-size extended Euclid with signed shift-and-subtract steps.
//!
//! Each step replaces `r2` by `r2 ∓ (r1 << s)`, where `s` aligns the top bits
//! of the two remainders. Subtracting when the signs agree and adding when they
//! differ removes the leading bit of `r2` regardless of sign, so remainders are
//! allowed to go negative and no division is ever performed.

use crate::cofactor::CofactorPair;
use crate::limbs::{add_lshift, bit_length, is_negative, sign_extend, sub_lshift};
use crate::order::Order;

/// Reduces `v` (with `0 <= v < ell`) to a cofactor pair whose remainder `t`
/// has at most `order.half_bits()` bits.
///
/// The remainders are kept in a working width that narrows as their bit
/// length drops; the cofactors always use the full `N` limbs.
pub fn reduce_subtractive<const N: usize>(order: &Order<N>, v: &[u64; N]) -> CofactorPair<N> {
    debug_assert!(order.is_canonical(v));
    let target = order.half_bits();

    let mut r2 = *order.limbs();
    let mut r1 = *v;
    let mut t2 = [0u64; N];
    let mut t1 = [0u64; N];
    t1[0] = 1;

    let mut width = N;
    let mut bl_r2 = order.bits();
    let mut bl_r1 = bit_length(&r1);

    while bl_r1 > target {
        while width > 1 && bl_r2 < 64 * (width as u32 - 1) {
            width -= 1;
        }

        let s = bl_r2 - bl_r1;
        let mut r = r2;
        let mut t = t2;
        if is_negative(&r2[..width]) == is_negative(&r1[..width]) {
            sub_lshift(&mut r[..width], &r1[..width], s);
            sub_lshift(&mut t, &t1, s);
        } else {
            add_lshift(&mut r[..width], &r1[..width], s);
            add_lshift(&mut t, &t1, s);
        }

        let bl_r = bit_length(&r[..width]);
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

    sign_extend(&mut r1, width);
    CofactorPair::from_twos_complement(t1, r1)
}
