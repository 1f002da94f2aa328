//! Half-GCD: jump along the subtractive Euclidean path of `(a, b)`.
//!
//! The subtractive path repeatedly replaces the larger of `(c, d)` by the
//! difference. [`hgcd`] returns the first state on that path whose difference
//! has at most `s` bits, together with the unimodular matrix leading to it.
//! Large inputs are handled by reducing their high halves recursively; a
//! recursive matrix is applied only after checking that the state it leads to
//! is still before the stop point, and the remaining distance is covered by
//! exact quotient steps.

use num_bigint::BigUint;

use crate::cofactor::CofactorPair;
use crate::euclid::EuclidState;
use crate::limbs;
use crate::order::Order;

/// Inputs this close to the stop size are finished with quotient steps only.
const RECURSION_THRESHOLD: u64 = 64;

/// A 2x2 matrix with non-negative entries and determinant 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HgcdMatrix {
    pub u00: BigUint,
    pub u01: BigUint,
    pub u10: BigUint,
    pub u11: BigUint,
}

impl HgcdMatrix {
    pub fn identity() -> Self {
        Self {
            u00: BigUint::from(1u32),
            u01: BigUint::default(),
            u10: BigUint::default(),
            u11: BigUint::from(1u32),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    fn mul(&self, other: &Self) -> Self {
        Self {
            u00: &self.u00 * &other.u00 + &self.u01 * &other.u10,
            u01: &self.u00 * &other.u01 + &self.u01 * &other.u11,
            u10: &self.u10 * &other.u00 + &self.u11 * &other.u10,
            u11: &self.u10 * &other.u01 + &self.u11 * &other.u11,
        }
    }

    /// `(c; d) = M^-1 (a; b)`, or `None` unless both are positive.
    fn apply_inverse(&self, a: &BigUint, b: &BigUint) -> Option<(BigUint, BigUint)> {
        let c_plus = &self.u11 * a;
        let c_minus = &self.u01 * b;
        let d_plus = &self.u00 * b;
        let d_minus = &self.u10 * a;
        if c_plus <= c_minus || d_plus <= d_minus {
            return None;
        }
        Some((c_plus - c_minus, d_plus - d_minus))
    }
}

/// Output of [`hgcd`]: `(a; b) = matrix * (c; d)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HgcdReduction {
    pub matrix: HgcdMatrix,
    pub c: BigUint,
    pub d: BigUint,
}

/// Reduces `(a, b)` until `|c - d|` fits in `s` bits, keeping `c` and `d`
/// above `s` bits.
///
/// Returns `None` when `a` or `b` already has at most `s` bits.
pub fn hgcd(a: &BigUint, b: &BigUint, s: u32) -> Option<HgcdReduction> {
    let s64 = u64::from(s);
    if a.bits() <= s64 || b.bits() <= s64 {
        return None;
    }

    let mut matrix = HgcdMatrix::identity();
    let mut c = a.clone();
    let mut d = b.clone();

    loop {
        let n = c.bits().max(d.bits());
        if n <= s64 + RECURSION_THRESHOLD {
            break;
        }
        let half = ((n - s64) / 2) as u32;
        let Some(high) = hgcd(&(&c >> s), &(&d >> s), half) else {
            break;
        };
        if high.matrix.is_identity() {
            break;
        }
        match high.matrix.apply_inverse(&c, &d) {
            Some((next_c, next_d)) if next_c.bits() > s64 && next_d.bits() > s64 => {
                matrix = matrix.mul(&high.matrix);
                c = next_c;
                d = next_d;
            }
            _ => break,
        }
    }

    Some(exact_steps(matrix, c, d, s))
}

/// Walks the subtractive path one quotient run at a time.
///
/// A run of `q` subtractions stops one short when its final remainder would
/// drop to `s` bits, since the state before it is the stop point.
pub(crate) fn exact_steps(mut matrix: HgcdMatrix, mut c: BigUint, mut d: BigUint, s: u32) -> HgcdReduction {
    let s64 = u64::from(s);
    loop {
        let c_is_larger = c >= d;
        let (big, small) = if c_is_larger { (&c, &d) } else { (&d, &c) };
        if (big - small).bits() <= s64 {
            return HgcdReduction { matrix, c, d };
        }

        let mut q = big / small;
        let mut r = big % small;
        if r.bits() <= s64 {
            q -= 1u32;
            r += small;
        }

        if c_is_larger {
            c = r;
            matrix.u01 += &q * &matrix.u00;
            matrix.u11 += &q * &matrix.u10;
        } else {
            d = r;
            matrix.u00 += &q * &matrix.u01;
            matrix.u10 += &q * &matrix.u11;
        }
    }
}

/// Half-GCD jump to `order.hgcd_bits()`, then the division tail down to
/// `order.half_bits()`.
///
/// Produces exactly the pair [`reduce_division`](crate::reduce_division) does.
pub fn reduce_hgcd<const N: usize>(order: &Order<N>, v: &[u64; N]) -> CofactorPair<N> {
    let ell = order.to_biguint();
    let v = limbs::to_biguint(v);
    let state = match hgcd(&ell, &v, order.hgcd_bits()) {
        Some(reduction) => EuclidState::from_reduction(reduction),
        None => EuclidState::new(ell, v),
    };
    state.finish(order.half_bits())
}

/// Half-GCD jump straight to `order.enhanced_bits()`, reading the result off
/// the matrix.
///
/// With `c = u11 * ell - u01 * v` and `d = u00 * v - u10 * ell`,
/// `c - d ≡ -(u00 + u01) * v (mod ell)`, so `|c - d|` is the short remainder
/// and `∓(u00 + u01)` its cofactor.
pub fn reduce_hgcd_enhanced<const N: usize>(order: &Order<N>, v: &[u64; N]) -> CofactorPair<N> {
    let ell = order.to_biguint();
    let Some(HgcdReduction { matrix, c, d }) = hgcd(&ell, &limbs::to_biguint(v), order.enhanced_bits())
    else {
        return CofactorPair::trivial(v);
    };

    let cofactor = limbs::from_biguint(&(matrix.u00 + matrix.u01));
    let c_is_larger = c >= d;
    let remainder = if c_is_larger { c - d } else { d - c };
    CofactorPair {
        r: cofactor,
        t: limbs::from_biguint(&remainder),
        r_negative: c_is_larger,
        t_negative: false,
    }
}
