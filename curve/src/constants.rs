//! Window sizes and split parameters of the variable-time multiplications.

/// Sliding-window width for points known only at verification time.
///
/// A width-`w` window uses the odd multiples `P, 3P, ..., (2^(w-1) - 1)P`,
/// so this gives an 8-entry table built per call.
pub const VARIABLE_WINDOW: u32 = 5;

/// Sliding-window width for the fixed base points `B` and `[2^126]B`.
///
/// Their 32-entry tables are built once per process.
pub const BASE_WINDOW: u32 = 7;

/// Bit position at which a full-size base-point scalar is split in two.
///
/// `s = s_lo + 2^SPLIT_BITS * s_hi`, with `s_lo` multiplying `B` and `s_hi`
/// multiplying `[2^SPLIT_BITS]B`, so both halves are about as long as the
/// cofactor scalars.
pub const SPLIT_BITS: u32 = 126;

/// Largest gap between consecutive nonzero bits that a sliding-window digit
/// may absorb.
pub(crate) const MAX_DIGIT_SPAN: usize = 6;

/// The combiner subtracts a shifted runner-up instead of the runner-up itself
/// once the two top scalars differ by at least this many bits.
pub(crate) const WIDE_GAP_BITS: u32 = 8;
