use std::ops::Deref;

use mkv_core::MarkovError;
use serde::{Deserialize, Serialize};

/// Probability mass over the states of a chain, one entry per state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(Vec<f64>);

impl Distribution {
    /// Spreads the mass evenly: every entry is `1 / size`.
    pub fn uniform(size: usize) -> Self {
        let mass = 1.0 / size as f64;
        Self(vec![mass; size])
    }

    /// Puts all mass on `position`.
    pub fn concentrated(size: usize, position: usize) -> Result<Self, MarkovError> {
        if position >= size {
            return Err(MarkovError::index_out_of_range(position, size));
        }
        let mut mass = vec![0.0; size];
        mass[position] = 1.0;
        Ok(Self(mass))
    }

    /// Returns the entries as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the distribution and returns its entries.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Sum of all entries.
    pub fn total_mass(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Deref for Distribution {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Distribution {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Distribution {
    fn from(mass: Vec<f64>) -> Self {
        Self(mass)
    }
}
