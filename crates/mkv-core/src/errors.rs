//! Structured error types shared across MKV crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MarkovError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (indices, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for chain construction and analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MarkovError {
    /// Matrix data does not fit the claimed (square) shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(ErrorInfo),
    /// A row does not describe a probability distribution.
    #[error("matrix is not stochastic: {0}")]
    NotStochastic(ErrorInfo),
    /// A requested step count is negative.
    #[error("invalid dimension: {0}")]
    InvalidDimension(ErrorInfo),
    /// A state index lies outside `[0, N)`.
    #[error("invalid indices: {0}")]
    InvalidIndices(ErrorInfo),
    /// Classification was requested on a chain without states.
    #[error("empty matrix: {0}")]
    EmptyMatrix(ErrorInfo),
    /// Configuration could not be read or failed validation.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl MarkovError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MarkovError::ShapeMismatch(info)
            | MarkovError::NotStochastic(info)
            | MarkovError::InvalidDimension(info)
            | MarkovError::InvalidIndices(info)
            | MarkovError::EmptyMatrix(info)
            | MarkovError::Config(info)
            | MarkovError::Serde(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Builds an [`MarkovError::InvalidIndices`] error for a single offending index.
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        MarkovError::InvalidIndices(
            ErrorInfo::new("index-out-of-range", "state index is outside the chain")
                .with_context("index", index)
                .with_context("size", size),
        )
    }
}
