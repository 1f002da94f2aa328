//! Fixed-width two's-complement integers stored as little-endian `u64` limbs.
//!
//! The sign of a value is the top bit of the last limb of the slice it is read
//! through, so a buffer can be viewed at a narrower width once its magnitude
//! fits. Every operation truncates to the width of its output slice and never
//! allocates.

use core::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};

/// Helper: Carrying addition
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Computes `a += b << shift`, truncated to `a.len()` limbs.
///
/// `a` and `b` must have the same width. Shifts of a whole width or more leave
/// `a` untouched.
#[inline]
pub fn add_lshift(a: &mut [u64], b: &[u64], shift: u32) {
    shift_and_apply(a, b, shift, carrying_add);
}

/// Computes `a -= b << shift`, truncated to `a.len()` limbs.
#[inline]
pub fn sub_lshift(a: &mut [u64], b: &[u64], shift: u32) {
    shift_and_apply(a, b, shift, borrowing_sub);
}

fn shift_and_apply(a: &mut [u64], b: &[u64], shift: u32, op: fn(u64, u64, bool) -> (u64, bool)) {
    debug_assert_eq!(a.len(), b.len());
    let size = a.len();
    let skip = (shift / 64) as usize;
    let s = shift % 64;
    if skip >= size {
        return;
    }

    let mut carry = false;
    let mut spill = 0u64;
    for i in skip..size {
        let w = b[i - skip];
        let shifted = if s == 0 { w } else { (w << s) | spill };
        spill = if s == 0 { 0 } else { w >> (64 - s) };
        let (out, c) = op(a[i], shifted, carry);
        a[i] = out;
        carry = c;
    }
}

/// Returns true if the top bit of the last limb is set.
#[inline]
pub fn is_negative(a: &[u64]) -> bool {
    a.last().is_some_and(|&top| top >> 63 == 1)
}

/// Bit length of a signed value, read through its one's complement.
///
/// For non-negative `v` this is the usual bit length. For negative `v` it is the
/// bit length of `|v| - 1`, which matches `|v|` except at `v = -2^n`, where the
/// result is `n` instead of `n + 1`. The reducers rely on exactly this count.
pub fn bit_length(a: &[u64]) -> u32 {
    let mask = if is_negative(a) { u64::MAX } else { 0 };
    for (i, &limb) in a.iter().enumerate().rev() {
        let word = limb ^ mask;
        if word != 0 {
            return 64 * i as u32 + (64 - word.leading_zeros());
        }
    }
    0
}

/// Exact bit length of `|v|`.
pub fn magnitude_bits(a: &[u64]) -> u32 {
    let bits = bit_length(a);
    if is_negative(a) && trailing_zeros(a) == bits {
        bits + 1
    } else {
        bits
    }
}

fn trailing_zeros(a: &[u64]) -> u32 {
    let mut count = 0;
    for &limb in a {
        if limb != 0 {
            return count + limb.trailing_zeros();
        }
        count += 64;
    }
    count
}

#[inline]
pub fn is_zero(a: &[u64]) -> bool {
    a.iter().all(|&limb| limb == 0)
}

/// Two's-complement negation in place.
pub fn negate(a: &mut [u64]) {
    let mut carry = true;
    for limb in a.iter_mut() {
        let (out, c) = carrying_add(!*limb, 0, carry);
        *limb = out;
        carry = c;
    }
}

/// Copies the sign bit of limb `width - 1` into every limb above it.
pub fn sign_extend(a: &mut [u64], width: usize) {
    if width == 0 || width >= a.len() {
        return;
    }
    let fill = if a[width - 1] >> 63 == 1 { u64::MAX } else { 0 };
    for limb in &mut a[width..] {
        *limb = fill;
    }
}

/// Splits a two's-complement value into `(|v|, v < 0)`.
pub fn split_sign<const N: usize>(mut a: [u64; N]) -> ([u64; N], bool) {
    let negative = is_negative(&a);
    if negative {
        negate(&mut a);
    }
    (a, negative)
}

/// Unsigned comparison of equal-width values.
pub fn compare(a: &[u64], b: &[u64]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

pub fn to_biguint(a: &[u64]) -> BigUint {
    let bytes: Vec<u8> = a.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

/// Low `N` limbs of `|x|`; higher digits are dropped.
pub fn from_biguint<const N: usize>(x: &BigUint) -> [u64; N] {
    let mut out = [0u64; N];
    for (limb, digit) in out.iter_mut().zip(x.to_u64_digits()) {
        *limb = digit;
    }
    out
}

/// Splits a signed big integer into its low `N` magnitude limbs and sign.
pub(crate) fn from_bigint<const N: usize>(x: &BigInt) -> ([u64; N], bool) {
    (from_biguint(x.magnitude()), x.sign() == Sign::Minus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn signed(a: &[u64]) -> BigInt {
        let unsigned = BigInt::from(to_biguint(a));
        if is_negative(a) {
            unsigned - (BigInt::from(1u32) << (64 * a.len()))
        } else {
            unsigned
        }
    }

    fn wrap(x: &BigInt, width: usize) -> BigInt {
        let modulus = BigInt::from(1u32) << (64 * width);
        ((x % &modulus) + &modulus) % &modulus
    }

    #[test]
    fn test_add_sub_lshift_match_bigint() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let a: [u64; 4] = [rng.random(), rng.random(), rng.random(), rng.random()];
            let b: [u64; 4] = [rng.random(), rng.random(), rng.random(), rng.random()];
            let shift = rng.random_range(0..300u32);

            let mut sum = a;
            add_lshift(&mut sum, &b, shift);
            let expected = wrap(&(signed(&a) + (signed(&b) << shift)), 4);
            assert_eq!(BigInt::from(to_biguint(&sum)), expected);

            let mut diff = a;
            sub_lshift(&mut diff, &b, shift);
            let expected = wrap(&(signed(&a) - (signed(&b) << shift)), 4);
            assert_eq!(BigInt::from(to_biguint(&diff)), expected);
        }
    }

    #[test]
    fn test_shift_past_width_is_noop() {
        let mut a = [7u64, 0, 0];
        add_lshift(&mut a, &[1, 2, 3], 192);
        assert_eq!(a, [7, 0, 0]);
        sub_lshift(&mut a, &[1, 2, 3], 500);
        assert_eq!(a, [7, 0, 0]);
    }

    #[test]
    fn test_carry_crosses_limbs() {
        let mut a = [u64::MAX, u64::MAX, 0];
        add_lshift(&mut a, &[1, 0, 0], 0);
        assert_eq!(a, [0, 0, 1]);
        sub_lshift(&mut a, &[1, 0, 0], 0);
        assert_eq!(a, [u64::MAX, u64::MAX, 0]);
        add_lshift(&mut a, &[1, 0, 0], 64);
        assert_eq!(a, [u64::MAX, 0, 1]);
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(&[0, 0]), 0);
        assert_eq!(bit_length(&[1, 0]), 1);
        assert_eq!(bit_length(&[0, 1]), 65);
        assert_eq!(bit_length(&[u64::MAX, u64::MAX >> 1]), 127);

        let mut minus_five = [5u64, 0];
        negate(&mut minus_five);
        assert_eq!(bit_length(&minus_five), 3);
        assert_eq!(magnitude_bits(&minus_five), 3);
    }

    #[test]
    fn test_bit_length_of_negative_power_of_two() {
        for n in [0u32, 1, 5, 63, 64, 100] {
            let mut v = [0u64; 2];
            v[(n / 64) as usize] = 1 << (n % 64);
            negate(&mut v);
            assert_eq!(bit_length(&v), n);
            assert_eq!(magnitude_bits(&v), n + 1);
        }
    }

    #[test]
    fn test_sign_helpers() {
        let mut v = [3u64, 0, 0, 0];
        negate(&mut v);
        assert!(is_negative(&v));
        assert_eq!(split_sign(v), ([3, 0, 0, 0], true));

        let mut narrow = [u64::MAX - 2, u64::MAX, 0, 0];
        sign_extend(&mut narrow, 2);
        assert_eq!(narrow, v);

        assert_eq!(compare(&[1, 2], &[2, 1]), Ordering::Greater);
        assert_eq!(compare(&[1, 2], &[1, 2]), Ordering::Equal);
        assert!(is_zero(&[0, 0, 0]));
    }

    #[test]
    fn test_biguint_conversion() {
        let limbs = [0x5812631a5cf5d3ed, 0x14def9dea2f79cd6, 0, 0x1000000000000000];
        let big = to_biguint(&limbs);
        assert_eq!(big.bits(), 253);
        assert_eq!(from_biguint::<4>(&big), limbs);
    }
}
