#![deny(missing_docs)]
#![doc = "Core contracts for the MKV engine: error taxonomy, configuration and the dense-matrix backend trait."]

pub mod backend;
pub mod config;
pub mod errors;
pub mod provenance;
pub mod rng;

pub use backend::MatrixBackend;
pub use config::{load_config, ChainConfig, DEFAULT_TOLERANCE};
pub use errors::{ErrorInfo, MarkovError};
pub use provenance::SchemaVersion;
pub use rng::{derive_substream_seed, RngHandle};

/// Dense matrix type used by default throughout the workspace.
pub type DenseMatrix = nalgebra::DMatrix<f64>;
