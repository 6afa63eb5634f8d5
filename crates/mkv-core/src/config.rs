//! Chain configuration and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MarkovError};
use crate::provenance::SchemaVersion;

/// Tolerance applied to row sums and matrix comparisons when none is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// YAML-configurable parameters shared by chain construction and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Maximum absolute deviation of a row sum from one, and of matrix entries
    /// compared with [`MatrixBackend::approx_eq`](crate::MatrixBackend::approx_eq).
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Schema version stored alongside serialized chains.
    #[serde(default)]
    pub schema_version: SchemaVersion,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            schema_version: SchemaVersion::default(),
        }
    }
}

impl ChainConfig {
    /// Returns a copy of the configuration using `tolerance`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that the tolerance is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), MarkovError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MarkovError::Config(
                ErrorInfo::new("invalid-tolerance", "tolerance must be finite and non-negative")
                    .with_context("tolerance", self.tolerance),
            ));
        }
        Ok(())
    }

    /// Parses and validates a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MarkovError> {
        let config: ChainConfig = serde_yaml::from_str(yaml)
            .map_err(|err| MarkovError::Config(ErrorInfo::new("config-parse", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}

/// Reads a [`ChainConfig`] from a YAML file.
pub fn load_config(path: &Path) -> Result<ChainConfig, MarkovError> {
    let yaml = std::fs::read_to_string(path).map_err(|err| {
        MarkovError::Config(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    ChainConfig::from_yaml_str(&yaml)
}
