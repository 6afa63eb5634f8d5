use std::fmt;

use mkv_core::{ChainConfig, DenseMatrix, ErrorInfo, MarkovError, MatrixBackend};
use tracing::debug;

/// Immutable row-stochastic transition matrix over `N` states.
///
/// Rows are validated once at construction and the matrix is never mutated
/// afterwards; every derived quantity (powers, distributions, classes) is a
/// fresh value owned by the caller.
#[derive(Debug, Clone)]
pub struct Chain<M: MatrixBackend = DenseMatrix> {
    matrix: M,
    config: ChainConfig,
}

impl Chain<DenseMatrix> {
    /// Validates `rows` with the default tolerance and wraps them in a chain.
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MarkovError> {
        Self::with_config(rows, ChainConfig::default())
    }

    /// Validates `rows` against `config` and wraps them in a chain.
    pub fn with_config<R: AsRef<[f64]>>(
        rows: &[R],
        config: ChainConfig,
    ) -> Result<Self, MarkovError> {
        Self::with_backend(rows, config)
    }
}

impl<M: MatrixBackend> Chain<M> {
    /// Validates `rows` and stores them in the matrix backend `M`.
    pub fn with_backend<R: AsRef<[f64]>>(
        rows: &[R],
        config: ChainConfig,
    ) -> Result<Self, MarkovError> {
        config.validate()?;
        let order = rows.len();
        let data = validate_rows(rows, config.tolerance)?;
        let matrix = M::from_row_major(order, order, &data)?;
        debug!(states = order, "constructed chain");
        Ok(Self { matrix, config })
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.matrix.dims().0
    }

    /// Returns whether `state` is a valid index, i.e. `state < size()`.
    pub fn check_dim(&self, state: usize) -> bool {
        state < self.size()
    }

    pub(crate) fn ensure_index(&self, state: usize) -> Result<(), MarkovError> {
        if self.check_dim(state) {
            Ok(())
        } else {
            Err(MarkovError::index_out_of_range(state, self.size()))
        }
    }

    /// Returns the underlying transition matrix.
    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    /// Returns the configuration the chain was validated with.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Returns `P[from][to]`.
    pub(crate) fn weight(&self, from: usize, to: usize) -> f64 {
        self.matrix.entry(from, to)
    }

    /// Copies the transition matrix out as row-major rows.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.size()).map(|row| self.matrix.row_vec(row)).collect()
    }
}

impl<M: MatrixBackend> fmt::Display for Chain<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix)
    }
}

fn validate_rows<R: AsRef<[f64]>>(rows: &[R], tolerance: f64) -> Result<Vec<f64>, MarkovError> {
    let order = rows.len();
    let mut data = Vec::with_capacity(rows.iter().map(|row| row.as_ref().len()).sum());
    for (idx, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if let Some(col) = row.iter().position(|value| !value.is_finite() || *value < 0.0) {
            debug!(row = idx, col, "rejected negative or non-finite entry");
            return Err(MarkovError::NotStochastic(
                ErrorInfo::new("negative-entry", "transition probabilities must be non-negative")
                    .with_context("row", idx)
                    .with_context("col", col)
                    .with_context("value", row[col]),
            ));
        }
        let sum: f64 = row.iter().sum();
        if (sum - 1.0).abs() > tolerance {
            debug!(row = idx, sum, "rejected row that does not sum to one");
            return Err(MarkovError::NotStochastic(
                ErrorInfo::new("not-stochastic", "row does not sum to one")
                    .with_context("row", idx)
                    .with_context("sum", sum)
                    .with_context("tolerance", tolerance),
            ));
        }
        data.extend_from_slice(row);
    }

    if order.checked_mul(order) != Some(data.len()) {
        return Err(MarkovError::ShapeMismatch(
            ErrorInfo::new("non-square", "matrix data is not square")
                .with_context("rows", order)
                .with_context("len", data.len()),
        ));
    }
    if let Some(idx) = rows.iter().position(|row| row.as_ref().len() != order) {
        return Err(MarkovError::ShapeMismatch(
            ErrorInfo::new("ragged-rows", "every row must have one entry per state")
                .with_context("row", idx)
                .with_context("len", rows[idx].as_ref().len())
                .with_context("expected", order),
        ));
    }
    Ok(data)
}
