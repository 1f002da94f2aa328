use serde::{Deserialize, Serialize};

use crate::cofactor::CofactorPair;
use crate::euclid::reduce_division;
use crate::heea::reduce_subtractive;
use crate::hgcd::{reduce_hgcd, reduce_hgcd_enhanced};
use crate::order::Order;

/// Selects the algorithm used to split a scalar into a cofactor pair.
///
/// All variants satisfy the same congruence and size bound; they differ in
/// speed and, for `Subtractive` and `HgcdEnhanced`, in which of the short
/// pairs near the stop point is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    /// Signed shift-and-subtract Euclid on fixed-width limbs.
    #[default]
    Subtractive,
    /// Classical remainder sequence with full division.
    Division,
    /// Half-GCD jump followed by the division tail.
    Hgcd,
    /// Half-GCD jump with the final pair read off the matrix.
    HgcdEnhanced,
}

impl Reducer {
    pub const ALL: [Reducer; 4] = [
        Reducer::Subtractive,
        Reducer::Division,
        Reducer::Hgcd,
        Reducer::HgcdEnhanced,
    ];

    /// Reduces `v`, which must satisfy `0 <= v < ell`.
    pub fn reduce<const N: usize>(self, order: &Order<N>, v: &[u64; N]) -> CofactorPair<N> {
        match self {
            Reducer::Subtractive => reduce_subtractive(order, v),
            Reducer::Division => reduce_division(order, v),
            Reducer::Hgcd => reduce_hgcd(order, v),
            Reducer::HgcdEnhanced => reduce_hgcd_enhanced(order, v),
        }
    }
}
