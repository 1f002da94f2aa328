//! Batch verification with one random challenge per round.
//!
//! Each round draws a random `U`, reduces `U⁻¹ * h_i` for every signature to a
//! half-size pair `(r_i, t_i)` with `r_i * h_i ≡ U * t_i`, and checks the sum
//!
//! ```text
//! [Σ r_i S_i]B + Σ [r_i](-R_i) + [U] Σ [t_i](-A_i) = 0
//! ```
//!
//! The two point sums are folded with the Bos–Coster heap; the leftover
//! `[k]P` of the public-key sum is absorbed into `U`, which is reduced once
//! more so the final check is again a four-term half-size multiplication. A
//! failed round is re-checked one signature at a time.

use curve::{
    Branch, Group, ScalarBits, ScalarHeap, combine, decode_point, quadruple_scalar_mul_vartime, split_scalar,
};
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use halfsize::{ED25519_ORDER, invert_vartime};
use rand::RngCore;
use rand::rngs::ThreadRng;
use tracing::{debug, debug_span, trace};

use crate::config::BatchConfig;
use crate::constants::{PK_SIZE, SINGLE_PATH_THRESHOLD};
use crate::errors::VerifyError;
use crate::signatures::{Signature, hash_challenge};
use crate::verify::verify_with;

/// Per-signature outcome of a batch verification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchVerification {
    /// `valid[i]` tells whether signature `i` verified.
    pub valid: Vec<bool>,
    /// Rounds whose combined check failed and were redone one by one.
    pub fallback_rounds: usize,
}

impl BatchVerification {
    pub fn all_valid(&self) -> bool {
        self.valid.iter().all(|&ok| ok)
    }

    /// Indices of the signatures that did not verify.
    pub fn invalid(&self) -> impl Iterator<Item = usize> + '_ {
        self.valid
            .iter()
            .enumerate()
            .filter_map(|(i, &ok)| (!ok).then_some(i))
    }
}

/// Verifies batches of Ed25519 signatures, drawing round challenges from `R`.
pub struct BatchVerifier<R = ThreadRng> {
    config: BatchConfig,
    rng: R,
}

impl BatchVerifier<ThreadRng> {
    pub fn new(config: BatchConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: RngCore> BatchVerifier<R> {
    pub fn with_rng(config: BatchConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Verifies `signatures[i]` on `messages[i]` under `public_keys[i]`.
    ///
    /// Signatures are taken in rounds of at most `batch_size()`; once no more
    /// than three remain they are verified individually. The only error is a
    /// length mismatch between the three inputs.
    pub fn verify<M: AsRef<[u8]>>(
        &mut self,
        messages: &[M],
        public_keys: &[[u8; PK_SIZE]],
        signatures: &[Signature],
    ) -> Result<BatchVerification, VerifyError> {
        let n = signatures.len();
        if messages.len() != n || public_keys.len() != n {
            return Err(VerifyError::LengthMismatch {
                messages: messages.len(),
                public_keys: public_keys.len(),
                signatures: n,
            });
        }

        let mut result = BatchVerification {
            valid: vec![false; n],
            fallback_rounds: 0,
        };
        let batch_size = self.config.batch_size();
        let mut start = 0;

        while n - start > SINGLE_PATH_THRESHOLD {
            let end = start + batch_size.min(n - start);
            let span = debug_span!("batch_round", start, size = end - start);
            let _enter = span.enter();

            let round = start..end;
            match self.check_round(&messages[round.clone()], &public_keys[round.clone()], &signatures[round]) {
                Ok(()) => {
                    debug!("batch round verified");
                    result.valid[start..end].fill(true);
                }
                Err(err) => {
                    debug!(%err, "batch round failed, verifying individually");
                    result.fallback_rounds += 1;
                    self.verify_each(messages, public_keys, signatures, start..end, &mut result.valid);
                }
            }
            start = end;
        }

        self.verify_each(messages, public_keys, signatures, start..n, &mut result.valid);
        Ok(result)
    }

    fn verify_each<M: AsRef<[u8]>>(
        &self,
        messages: &[M],
        public_keys: &[[u8; PK_SIZE]],
        signatures: &[Signature],
        range: core::ops::Range<usize>,
        valid: &mut [bool],
    ) {
        for i in range {
            let outcome = verify_with(self.config.reducer, messages[i].as_ref(), &public_keys[i], &signatures[i]);
            if let Err(err) = outcome {
                trace!(index = i, %err, "signature rejected");
            }
            valid[i] = outcome.is_ok();
        }
    }

    /// A uniformly random nonzero `U` together with `U⁻¹`.
    fn draw_challenge(&mut self) -> (Scalar, Scalar) {
        loop {
            let mut wide = [0u8; 64];
            self.rng.fill_bytes(&mut wide);
            let u = Scalar::from_bytes_mod_order_wide(&wide);
            if let Some(inverse) = invert_vartime(&ED25519_ORDER, &u.to_u64_limbs()) {
                return (u, Scalar::from_u64_limbs(&inverse));
            }
        }
    }

    /// Runs the combined check over one round of more than three signatures.
    fn check_round<M: AsRef<[u8]>>(
        &mut self,
        messages: &[M],
        public_keys: &[[u8; PK_SIZE]],
        signatures: &[Signature],
    ) -> Result<(), VerifyError> {
        let reducer = self.config.reducer;
        let (u, u_inv) = self.draw_challenge();

        let mut sum_rs = Scalar::ZERO;
        let mut r_terms: Vec<([u64; 4], EdwardsPoint)> = Vec::with_capacity(signatures.len());
        let mut a_terms: Vec<([u64; 4], EdwardsPoint)> = Vec::with_capacity(signatures.len());

        for ((message, public_key), signature) in messages.iter().zip(public_keys).zip(signatures) {
            let s = signature.response()?;
            let h = hash_challenge(&signature.r, public_key, message.as_ref());
            let pair = reducer.reduce(&ED25519_ORDER, &(u_inv * h).to_u64_limbs());

            let rs = Scalar::from_u64_limbs(&pair.r) * s;
            if pair.r_negative {
                sum_rs -= rs;
            } else {
                sum_rs += rs;
            }
            r_terms.push((pair.r, decode_point(&signature.r, Branch::of_negated(pair.r_negative))?));
            a_terms.push((pair.t, decode_point(public_key, Branch::of_negated(pair.t_negative))?));
        }
        trace!(terms = r_terms.len(), "decoded round");

        let sum_r = combine(r_terms);
        let (k, p) = ScalarHeap::new(a_terms).reduce();

        let u = u * Scalar::from_u64_limbs(&k);
        let last = reducer.reduce(&ED25519_ORDER, &u.to_u64_limbs());
        let p = if last.signs_differ() { -p } else { p };

        let sum_rs = Scalar::from_u64_limbs(&last.r) * sum_rs;
        let (rs_lo, rs_hi) = split_scalar(&sum_rs.to_u64_limbs());
        let check = quadruple_scalar_mul_vartime(&sum_r, &last.r, &p, &last.t, &rs_lo, &rs_hi);
        if check.is_identity() {
            Ok(())
        } else {
            Err(VerifyError::EquationFailed)
        }
    }
}

/// Verifies a batch with the default configuration and a thread-local RNG.
pub fn verify_batch<M: AsRef<[u8]>>(
    messages: &[M],
    public_keys: &[[u8; PK_SIZE]],
    signatures: &[Signature],
) -> Result<BatchVerification, VerifyError> {
    BatchVerifier::new(BatchConfig::default()).verify(messages, public_keys, signatures)
}
