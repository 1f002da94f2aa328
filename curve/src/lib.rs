//! Variable-time edwards25519 arithmetic for batch signature verification.
//!
//! Points are `curve25519_dalek` Edwards points; scalars are passed around as
//! little-endian `u64` limbs so that half-size cofactors and full-size scalars
//! share one code path. The crate provides:
//!
//! - [`combine`], a Bos–Coster heap that folds many `(scalar, point)` pairs
//!   into a single scalar multiplication,
//! - [`quadruple_scalar_mul_vartime`], a four-term sliding-window
//!   multiplication with two of its points fixed to `B` and `[2^126]B`,
//! - [`decode_point`], point decompression that can return either sign.

pub mod constants;
mod decode;
mod errors;
mod group;
mod heap;
mod msm;
mod tables;

pub use decode::{decode_point, Branch};
pub use errors::CurveError;
pub use group::{Group, ScalarBits};
pub use heap::{combine, ScalarHeap};
pub use msm::{quadruple_scalar_mul_vartime, slide, sliding_window_mul, split_scalar, OddMultiples};
pub use tables::{basepoint_table, split_basepoint, split_basepoint_table};
