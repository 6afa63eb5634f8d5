//! Minimal dense-matrix contract consumed by the chain engine.
//!
//! The analyser only ever needs to build a matrix from row-major data, read
//! and write single entries, multiply two matrices and compare them within a
//! tolerance. Keeping the surface this small lets any dense linear-algebra
//! crate stand in for [`nalgebra`].

use std::fmt;

use nalgebra::DMatrix;

use crate::errors::{ErrorInfo, MarkovError};

/// Dense real matrix operations required by the chain engine.
pub trait MatrixBackend: Clone + fmt::Debug + fmt::Display + Send + Sync {
    /// Builds a `rows x cols` matrix from row-major data.
    fn from_row_major(rows: usize, cols: usize, data: &[f64]) -> Result<Self, MarkovError>;

    /// Returns the `size x size` identity matrix.
    fn identity(size: usize) -> Self;

    /// Returns `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    /// Reads the entry at `(row, col)`.
    fn entry(&self, row: usize, col: usize) -> f64;

    /// Overwrites the entry at `(row, col)`.
    fn set_entry(&mut self, row: usize, col: usize, value: f64);

    /// Computes `self * rhs`.
    fn matmul(&self, rhs: &Self) -> Result<Self, MarkovError>;

    /// Returns whether both matrices share a shape and every entry differs by at most `tolerance`.
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        let (rows, cols) = self.dims();
        (0..rows).all(|i| {
            (0..cols).all(|j| (self.entry(i, j) - other.entry(i, j)).abs() <= tolerance)
        })
    }

    /// Returns row `row` as an owned vector.
    fn row_vec(&self, row: usize) -> Vec<f64> {
        let (_, cols) = self.dims();
        (0..cols).map(|col| self.entry(row, col)).collect()
    }
}

impl MatrixBackend for DMatrix<f64> {
    fn from_row_major(rows: usize, cols: usize, data: &[f64]) -> Result<Self, MarkovError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MarkovError::ShapeMismatch(
                ErrorInfo::new("shape-data", "data length does not match the requested shape")
                    .with_context("rows", rows)
                    .with_context("cols", cols)
                    .with_context("len", data.len()),
            ));
        }
        Ok(DMatrix::from_row_slice(rows, cols, data))
    }

    fn identity(size: usize) -> Self {
        DMatrix::identity(size, size)
    }

    fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn entry(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    fn set_entry(&mut self, row: usize, col: usize, value: f64) {
        self[(row, col)] = value;
    }

    fn matmul(&self, rhs: &Self) -> Result<Self, MarkovError> {
        if self.ncols() != rhs.nrows() {
            return Err(MarkovError::ShapeMismatch(
                ErrorInfo::new("shape-product", "inner dimensions of the product differ")
                    .with_context("lhs", format!("{}x{}", self.nrows(), self.ncols()))
                    .with_context("rhs", format!("{}x{}", rhs.nrows(), rhs.ncols())),
            ));
        }
        Ok(self * rhs)
    }
}
