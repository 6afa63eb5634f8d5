use mkv_core::{MarkovError, MatrixBackend};

use crate::chain::Chain;
use crate::distribution::Distribution;

impl<M: MatrixBackend> Chain<M> {
    /// Probability of being in `to` after `steps` steps when starting in `from`.
    pub fn probability(&self, steps: i64, from: usize, to: usize) -> Result<f64, MarkovError> {
        self.ensure_index(from)?;
        self.ensure_index(to)?;
        let power = self.probability_mat(steps)?;
        Ok(power.entry(from, to))
    }

    /// Propagates `initial` through `steps` steps: `initial * P^steps`.
    ///
    /// `initial` is not required to sum to one, but its length must equal the
    /// number of states; otherwise the backend product fails with
    /// [`MarkovError::ShapeMismatch`].
    pub fn distribution(&self, steps: i64, initial: &[f64]) -> Result<Distribution, MarkovError> {
        let power = self.probability_mat(steps)?;
        Ok(Distribution::from(propagate(initial, &power)?))
    }

    /// Expected state index after `steps` steps, starting from the row vector `values`.
    ///
    /// `values` is propagated exactly like [`Chain::distribution`] and the
    /// result is weighted by the index of each slot: `sum_i i * (values * P^steps)[i]`.
    /// The entries of `values` therefore act as the initial mass, not as rewards.
    pub fn expected_value(&self, steps: i64, values: &[f64]) -> Result<f64, MarkovError> {
        let power = self.probability_mat(steps)?;
        let propagated = propagate(values, &power)?;
        Ok(propagated
            .iter()
            .enumerate()
            .fold(0.0, |acc, (idx, mass)| acc + idx as f64 * mass))
    }
}

fn propagate<M: MatrixBackend>(initial: &[f64], power: &M) -> Result<Vec<f64>, MarkovError> {
    let row = M::from_row_major(1, initial.len(), initial)?;
    Ok(row.matmul(power)?.row_vec(0))
}
