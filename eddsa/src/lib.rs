//! Ed25519 signature verification with half-size scalars.
//!
//! This library verifies standard Ed25519 signatures using:
//! - half-size scalar decomposition from the `halfsize` crate, so every point
//!   multiplication uses scalars of about 127 bits
//! - Bos–Coster combination from the `curve` crate to fold the points of a
//!   whole batch into a single multiplication
//! - SHA-512 for the challenge `h = H(R || A || M)`
//!
//! # Overview
//!
//! [`verify`] checks one signature. [`BatchVerifier`] checks many signatures
//! at once: each round of up to [`MAX_BATCH_SIZE`] signatures costs a single
//! combined check, and a round that fails is re-verified signature by
//! signature so the result always names the invalid ones.
//!
//! # Example
//!
//! ```
//! use eddsa::{Signature, verify_batch};
//!
//! let messages: [&[u8]; 0] = [];
//! let public_keys: [[u8; 32]; 0] = [];
//! let signatures: [Signature; 0] = [];
//!
//! let result = verify_batch(&messages, &public_keys, &signatures).expect("lengths match");
//! assert!(result.all_valid());
//! ```
//!
//! # Security Considerations
//!
//! - Verification runs in variable time; it only handles public data
//! - The batch challenge must come from a cryptographically secure RNG
//! - `S` is checked for its reserved top bits only, not for being below `ell`

mod batch;
mod config;
mod constants;
mod errors;
mod signatures;
mod verify;


pub use batch::{BatchVerification, BatchVerifier, verify_batch};
pub use config::BatchConfig;
pub use constants::{MAX_BATCH_SIZE, PK_SIZE, SIG_SIZE, SINGLE_PATH_THRESHOLD};
pub use errors::VerifyError;
pub use halfsize::Reducer;
pub use signatures::{Signature, hash_challenge};
pub use verify::{verify, verify_single, verify_with};
