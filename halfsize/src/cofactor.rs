use num_bigint::BigInt;

use crate::limbs;

/// A half-size decomposition of a scalar `v` modulo `ell`.
///
/// Magnitudes are stored unsigned with the signs kept separately, so that
/// `(-1)^r_negative * r * v ≡ (-1)^t_negative * t (mod ell)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CofactorPair<const N: usize> {
    pub r: [u64; N],
    pub t: [u64; N],
    pub r_negative: bool,
    pub t_negative: bool,
}

impl<const N: usize> CofactorPair<N> {
    /// Builds a pair from two's-complement cofactor `r` and remainder `t`.
    pub(crate) fn from_twos_complement(r: [u64; N], t: [u64; N]) -> Self {
        let (r, r_negative) = limbs::split_sign(r);
        let (t, t_negative) = limbs::split_sign(t);
        Self {
            r,
            t,
            r_negative,
            t_negative,
        }
    }

    pub(crate) fn from_bigints(r: &BigInt, t: &BigInt) -> Self {
        let (r, r_negative) = limbs::from_bigint(r);
        let (t, t_negative) = limbs::from_bigint(t);
        Self {
            r,
            t,
            r_negative,
            t_negative,
        }
    }

    /// The trivial pair `r = 1, t = v` for a scalar that is already short.
    pub(crate) fn trivial(v: &[u64; N]) -> Self {
        let mut r = [0u64; N];
        r[0] = 1;
        Self {
            r,
            t: *v,
            r_negative: false,
            t_negative: false,
        }
    }

    /// Whether the point weighted by `t` has to be negated to absorb the sign of `r`.
    #[inline]
    pub fn signs_differ(&self) -> bool {
        self.r_negative != self.t_negative
    }

    /// `(±r, ±t)` as signed big integers.
    pub fn to_bigints(&self) -> (BigInt, BigInt) {
        let signed = |magnitude: &[u64; N], negative: bool| {
            let value = BigInt::from(limbs::to_biguint(magnitude));
            if negative {
                -value
            } else {
                value
            }
        };
        (signed(&self.r, self.r_negative), signed(&self.t, self.t_negative))
    }
}
