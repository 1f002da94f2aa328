//! Sizes and thresholds of Ed25519 batch verification.

/// Size of an encoded public key in bytes.
///
/// A public key is a compressed edwards25519 point: the `y` coordinate in
/// little-endian order with the sign of `x` in the top bit.
pub const PK_SIZE: usize = 32;

/// Size of an encoded signature in bytes.
///
/// A signature consists of:
/// - the compressed commitment point `R` (32 bytes)
/// - the response scalar `S` (32 bytes, little-endian)
pub const SIG_SIZE: usize = 64;

/// Default number of signatures checked together in one batch round.
pub const MAX_BATCH_SIZE: usize = 64;

/// Batches of at most this many signatures are verified one by one.
pub const SINGLE_PATH_THRESHOLD: usize = 3;

/// Bits of the last byte of `S` that must be clear.
///
/// Any canonical scalar is below `2^253`, so a set bit here marks the
/// signature as malformed before anything else is computed.
pub(crate) const RESERVED_S_BITS: u8 = 0xE0;
