use mkv_core::{ChainConfig, ErrorInfo, MarkovError, MatrixBackend, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::report::ClassificationReport;

#[derive(Debug, Serialize, Deserialize)]
struct SerializableChain {
    schema_version: SchemaVersion,
    tolerance: f64,
    rows: Vec<Vec<f64>>,
}

/// Serializes the chain, its tolerance and schema version to pretty JSON.
pub fn chain_to_json<M: MatrixBackend>(chain: &Chain<M>) -> Result<String, MarkovError> {
    let serializable = SerializableChain {
        schema_version: chain.config().schema_version,
        tolerance: chain.config().tolerance,
        rows: chain.rows(),
    };
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| MarkovError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a chain from JSON, re-running the stochastic validation.
pub fn chain_from_json(json: &str) -> Result<Chain, MarkovError> {
    let serializable: SerializableChain = serde_json::from_str(json)
        .map_err(|err| MarkovError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    let config = ChainConfig {
        tolerance: serializable.tolerance,
        schema_version: serializable.schema_version,
    };
    Chain::with_config(&serializable.rows, config)
}

/// Serializes a classification report into indented JSON.
pub fn report_to_json(report: &ClassificationReport) -> Result<String, MarkovError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| MarkovError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Deserializes a classification report from JSON text.
pub fn report_from_json(json: &str) -> Result<ClassificationReport, MarkovError> {
    serde_json::from_str(json)
        .map_err(|err| MarkovError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))
}
