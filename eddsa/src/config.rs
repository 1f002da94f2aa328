use halfsize::Reducer;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BATCH_SIZE, SINGLE_PATH_THRESHOLD};

/// Tuning knobs of [`BatchVerifier`](crate::BatchVerifier).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Upper bound on the signatures sharing one random challenge.
    pub max_batch_size: usize,
    /// Scalar decomposition used by both the batch and the single path.
    pub reducer: Reducer,
}

impl BatchConfig {
    pub fn with_reducer(reducer: Reducer) -> Self {
        Self {
            reducer,
            ..Self::default()
        }
    }

    /// Round size actually used; never small enough to hit the single path.
    pub fn batch_size(&self) -> usize {
        self.max_batch_size.max(SINGLE_PATH_THRESHOLD + 1)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_batch_size: MAX_BATCH_SIZE,
            reducer: Reducer::default(),
        }
    }
}
