//! Extended Euclid with full quotient division, on arbitrary-precision integers.

use core::mem;

use num_bigint::{BigInt, BigUint};

use crate::cofactor::CofactorPair;
use crate::hgcd::HgcdReduction;
use crate::limbs;
use crate::order::Order;

/// Reduces `v` by dividing until the remainder has at most `order.half_bits()` bits.
///
/// This is the classical remainder sequence, so its output is the reference
/// the half-GCD reducer is checked against.
pub fn reduce_division<const N: usize>(order: &Order<N>, v: &[u64; N]) -> CofactorPair<N> {
    EuclidState::new(order.to_biguint(), limbs::to_biguint(v)).finish(order.half_bits())
}

/// Two consecutive rows `r_i ≡ t_i * v (mod ell)` of the remainder sequence,
/// with `r2 > r1`.
pub(crate) struct EuclidState {
    r2: BigUint,
    r1: BigUint,
    t2: BigInt,
    t1: BigInt,
}

impl EuclidState {
    pub(crate) fn new(ell: BigUint, v: BigUint) -> Self {
        Self {
            r2: ell,
            r1: v,
            t2: BigInt::from(0u32),
            t1: BigInt::from(1u32),
        }
    }

    /// Resumes from a half-GCD jump, `(ell; v) = M (c; d)`.
    ///
    /// From `c = u11 * ell - u01 * v` and `d = u00 * v - u10 * ell`, the
    /// cofactors of `c` and `d` are `-u01` and `u00`.
    pub(crate) fn from_reduction(reduction: HgcdReduction) -> Self {
        let HgcdReduction { matrix, c, d } = reduction;
        let c_cofactor = -BigInt::from(matrix.u01);
        let d_cofactor = BigInt::from(matrix.u00);
        if c > d {
            Self {
                r2: c,
                r1: d,
                t2: c_cofactor,
                t1: d_cofactor,
            }
        } else {
            Self {
                r2: d,
                r1: c,
                t2: d_cofactor,
                t1: c_cofactor,
            }
        }
    }

    pub(crate) fn finish<const N: usize>(mut self, target: u32) -> CofactorPair<N> {
        while self.r1.bits() > u64::from(target) {
            let q = &self.r2 / &self.r1;
            let r = &self.r2 % &self.r1;
            let t = &self.t2 - BigInt::from(q) * &self.t1;
            self.r2 = mem::replace(&mut self.r1, r);
            self.t2 = mem::replace(&mut self.t1, t);
        }
        CofactorPair::from_bigints(&self.t1, &BigInt::from(self.r1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ED25519_ORDER;

    #[test]
    fn test_power_of_two() {
        // ell = 2^52 * 2^200 + c, so one division by v = 2^200 leaves c
        // with cofactor -2^52.
        let v = [0, 0, 0, 1 << 8];
        let pair = reduce_division(&ED25519_ORDER, &v);
        let (r, t) = pair.to_bigints();
        assert_eq!(t, "27742317777372353535851937790883648493".parse::<BigInt>().unwrap());
        assert_eq!(r, -(BigInt::from(1u32) << 52u32));
    }
}
