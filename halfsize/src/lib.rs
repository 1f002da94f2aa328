//! Half-size scalar decomposition modulo an EdDSA group order.
//!
//! Given `v` modulo the prime order `ell`, the reducers in this crate find a
//! pair `(r, t)` with `r * v ≡ t (mod ell)` where both `r` and `t` have about
//! half the bit length of `ell`. Verification equations multiplied through by
//! `r` then only involve half-size scalars.
//!
//! Four reducers are provided (see [`Reducer`]):
//! - a signed shift-and-subtract Euclid on fixed-width limbs,
//! - the classical division-based Euclid,
//! - a half-GCD jump followed by the division tail,
//! - a half-GCD jump whose last step is derived from the matrix.
//!
//! The crate also exposes the limb primitives they are built on and a
//! variable-time modular inverse. Nothing here runs in constant time.
//!
//! # Example
//!
//! ```
//! use halfsize::{Reducer, ED25519_ORDER};
//!
//! let v = [0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210, 0x1111, 0x0222];
//! let pair = Reducer::Subtractive.reduce(&ED25519_ORDER, &v);
//! assert!(pair.t[2] == 0 && pair.t[3] == 0);
//! ```

mod cofactor;
mod euclid;
mod heea;
mod hgcd;
mod inverse;
pub mod limbs;
mod order;
mod reducer;

#[cfg(test)]
mod tests;

pub use cofactor::CofactorPair;
pub use euclid::reduce_division;
pub use heea::reduce_subtractive;
pub use hgcd::{hgcd, reduce_hgcd, reduce_hgcd_enhanced, HgcdMatrix, HgcdReduction};
pub use inverse::invert_vartime;
pub use limbs::{add_lshift, bit_length, is_negative, magnitude_bits, sub_lshift};
pub use order::{Order, ED25519_ORDER, ED448_ORDER};
pub use reducer::Reducer;
