use mkv_core::{ErrorInfo, MarkovError, MatrixBackend};
use tracing::trace;

use crate::chain::Chain;

impl<M: MatrixBackend> Chain<M> {
    /// Returns the `steps`-step transition matrix `P^steps`.
    ///
    /// The power is accumulated from the identity by right-multiplying with
    /// `P` once per step. Nothing is cached: every call recomputes from
    /// scratch, so callers walking a sequence of powers should multiply
    /// incrementally themselves. `steps == 0` yields the identity.
    pub fn probability_mat(&self, steps: i64) -> Result<M, MarkovError> {
        if steps < 0 {
            return Err(MarkovError::InvalidDimension(
                ErrorInfo::new("negative-steps", "step count must be non-negative")
                    .with_context("steps", steps),
            ));
        }
        let mut result = M::identity(self.size());
        for _ in 0..steps {
            result = result.matmul(self.matrix())?;
        }
        trace!(steps, states = self.size(), "computed transition power");
        Ok(result)
    }
}
