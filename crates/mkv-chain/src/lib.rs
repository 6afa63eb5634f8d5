#![deny(missing_docs)]

//! Analysis of finite, discrete-time Markov chains given as dense
//! row-stochastic matrices.
//!
//! A [`Chain`] is validated once and then answers two families of queries:
//!
//! * forward iteration: `m`-step transition matrices, transition
//!   probabilities, propagated distributions and expected state indices;
//! * structure: attainability over the support graph, communicating
//!   classes, ergodic and absorbing states.
//!
//! ```rust
//! use mkv_chain::Chain;
//!
//! let chain = Chain::new(&[[0.1, 0.9], [0.8, 0.2]]).unwrap();
//! let p = chain.probability(2, 0, 1).unwrap();
//! assert!((p - 0.27).abs() < 1e-9);
//! assert_eq!(chain.equality_classes().unwrap(), vec![vec![0, 1]]);
//! ```

mod chain;
mod classify;
mod distribution;
mod generators;
mod hash;
mod power;
mod query;
mod reach;
mod report;
mod serialization;

pub use chain::Chain;
pub use classify::Class;
pub use distribution::Distribution;
pub use generators::{gen_absorbing_walk, gen_random_chain};
pub use hash::{canonical_hash, stable_hash_string};
pub use reach::AttainabilitySet;
pub use report::{ClassSummary, ClassificationReport, StateSummary};
pub use serialization::{chain_from_json, chain_to_json, report_from_json, report_to_json};

pub use mkv_core::{ChainConfig, DenseMatrix, ErrorInfo, MarkovError, MatrixBackend, RngHandle};
