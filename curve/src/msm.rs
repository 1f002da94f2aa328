use curve25519_dalek::edwards::EdwardsPoint;

use crate::constants::{MAX_DIGIT_SPAN, SPLIT_BITS, VARIABLE_WINDOW};
use crate::group::Group;
use crate::tables::{basepoint_table, split_basepoint_table};

/// Odd multiples `P, 3P, 5P, ...` for signed sliding-window digits.
#[derive(Clone, Debug)]
pub struct OddMultiples<G> {
    window: u32,
    points: Vec<G>,
}

impl<G: Group> OddMultiples<G> {
    /// Table for digits of absolute value below `2^(window - 1)`.
    pub fn new(point: &G, window: u32) -> Self {
        let size = 1usize << (window - 2);
        let twice = point.double();
        let mut points = Vec::with_capacity(size);
        points.push(*point);
        for i in 1..size {
            points.push(points[i - 1] + twice);
        }
        Self { window, points }
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    /// `[digit]P` for an odd digit within the window.
    #[inline]
    fn select(&self, digit: i8) -> G {
        let entry = self.points[(digit.unsigned_abs() / 2) as usize];
        if digit > 0 {
            entry
        } else {
            -entry
        }
    }
}

/// Signed sliding-window recoding, least significant digit first.
///
/// The result `d` satisfies `Σ d_i 2^i = scalar`, every nonzero `d_i` is odd
/// with `|d_i| < 2^(window - 1)`. There is one more position than `scalar`
/// has bits, for the final carry.
pub fn slide(scalar: &[u64], window: u32) -> Vec<i8> {
    let len = 64 * scalar.len() + 1;
    let mut r: Vec<i32> = (0..len)
        .map(|i| match scalar.get(i / 64) {
            Some(&limb) => ((limb >> (i % 64)) & 1) as i32,
            None => 0,
        })
        .collect();
    let m = (1i32 << (window - 1)) - 1;

    for i in 0..len {
        if r[i] == 0 {
            continue;
        }
        let mut b = 1;
        while b <= MAX_DIGIT_SPAN && i + b < len {
            if r[i + b] != 0 {
                let shifted = r[i + b] << b;
                if r[i] + shifted <= m {
                    r[i] += shifted;
                    r[i + b] = 0;
                } else if r[i] - shifted >= -m {
                    r[i] -= shifted;
                    for k in i + b..len {
                        if r[k] == 0 {
                            r[k] = 1;
                            break;
                        }
                        r[k] = 0;
                    }
                } else {
                    break;
                }
            }
            b += 1;
        }
    }

    r.into_iter().map(|d| d as i8).collect()
}

/// `Σ [s_i]P_i` with one shared doubling chain over all recoded scalars.
pub fn sliding_window_mul<G: Group>(terms: &[(&[u64], &OddMultiples<G>)]) -> G {
    let digits: Vec<Vec<i8>> = terms
        .iter()
        .map(|(scalar, table)| slide(scalar, table.window()))
        .collect();

    let top = digits
        .iter()
        .filter_map(|d| d.iter().rposition(|&digit| digit != 0))
        .max();
    let Some(top) = top else {
        return G::identity();
    };

    let mut result = G::identity();
    for i in (0..=top).rev() {
        result = result.double();
        for (d, (_, table)) in digits.iter().zip(terms) {
            let digit = d[i];
            if digit != 0 {
                result += table.select(digit);
            }
        }
    }
    result
}

/// `[s1]P1 + [s2]P2 + [s3]B + [s4][2^126]B`, in variable time.
pub fn quadruple_scalar_mul_vartime(
    p1: &EdwardsPoint,
    s1: &[u64; 4],
    p2: &EdwardsPoint,
    s2: &[u64; 4],
    s3: &[u64; 4],
    s4: &[u64; 4],
) -> EdwardsPoint {
    let t1 = OddMultiples::new(p1, VARIABLE_WINDOW);
    let t2 = OddMultiples::new(p2, VARIABLE_WINDOW);
    sliding_window_mul(&[
        (s1.as_slice(), &t1),
        (s2.as_slice(), &t2),
        (s3.as_slice(), basepoint_table()),
        (s4.as_slice(), split_basepoint_table()),
    ])
}

/// Splits `s` into `(s mod 2^126, s >> 126)`.
pub fn split_scalar(s: &[u64; 4]) -> ([u64; 4], [u64; 4]) {
    let limb = (SPLIT_BITS / 64) as usize;
    let bit = SPLIT_BITS % 64;

    let mut low = [0u64; 4];
    low[..limb].copy_from_slice(&s[..limb]);
    low[limb] = s[limb] & ((1u64 << bit) - 1);

    let mut high = [0u64; 4];
    for (i, out) in high.iter_mut().enumerate().take(4 - limb) {
        let lo = s[i + limb] >> bit;
        let hi = s.get(i + limb + 1).map_or(0, |&next| next << (64 - bit));
        *out = lo | hi;
    }
    (low, high)
}
