use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::{Identity, IsIdentity};

pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
    fn from_u64_limbs(limbs: &[u64; 4]) -> Self;
}

impl ScalarBits for Scalar {
    fn to_u64_limbs(&self) -> [u64; 4] {
        let bytes = self.to_bytes();
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        limbs
    }

    /// Reduces the 256-bit value modulo `ell`.
    fn from_u64_limbs(limbs: &[u64; 4]) -> Self {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        Scalar::from_bytes_mod_order(bytes)
    }
}

/// A prime-order group written additively, with variable-time helpers.
///
/// Scalars are plain little-endian `u64` limb slices so that half-size and
/// full-size scalars go through the same code.
pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;

    #[inline]
    fn negate(&self) -> Self {
        -*self
    }

    /// `[2^k]P` by `k` doublings.
    fn mul_pow2(&self, k: u32) -> Self {
        let mut result = *self;
        for _ in 0..k {
            result = result.double();
        }
        result
    }

    /// Left-to-right double-and-add.
    ///
    /// Scalars 0 and 1 are answered directly; otherwise the accumulator starts
    /// at the point itself and the leading bit is skipped.
    fn mul_limbs(&self, scalar: &[u64]) -> Self {
        let Some(top) = scalar.iter().rposition(|&limb| limb != 0) else {
            return Self::identity();
        };
        if top == 0 && scalar[0] == 1 {
            return *self;
        }

        let mut result = *self;
        let leading = 63 - scalar[top].leading_zeros();
        for limb in (0..=top).rev() {
            let start = if limb == top { leading } else { 64 };
            for bit in (0..start).rev() {
                result = result.double();
                if (scalar[limb] >> bit) & 1 == 1 {
                    result += *self;
                }
            }
        }
        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        self.mul_limbs(&[n])
    }

    /// Sum of `[s_i]P_i`, one double-and-add per term.
    fn multi_scalar_mul<S: AsRef<[u64]>>(points: &[Self], scalars: &[S]) -> Self {
        debug_assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        let mut result = Self::identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result += point.mul_limbs(scalar.as_ref());
        }
        result
    }
}

impl Group for EdwardsPoint {
    #[inline]
    fn identity() -> Self {
        <EdwardsPoint as Identity>::identity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        <EdwardsPoint as IsIdentity>::is_identity(self)
    }

    #[inline]
    fn generator() -> Self {
        ED25519_BASEPOINT_POINT
    }

    #[inline]
    fn double(&self) -> Self {
        self + self
    }
}
