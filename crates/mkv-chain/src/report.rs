use mkv_core::{MarkovError, MatrixBackend, SchemaVersion};
use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::chain::Chain;
use crate::classify::Class;
use crate::hash::{canonical_hash, stable_hash_string};

/// Communicating class together with its closure flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Member states in discovery order.
    pub members: Class,
    /// Whether every member is ergodic (the class cannot be left).
    pub closed: bool,
}

/// Per-state classification outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    /// State index.
    pub state: usize,
    /// Index into [`ClassificationReport::classes`].
    pub class_index: usize,
    /// Whether the state is ergodic.
    pub ergodic: bool,
    /// Whether the state is absorbing.
    pub absorbing: bool,
    /// Size of the attainability set of the state.
    pub attainable: usize,
}

/// Complete classification of a chain's states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Schema version of the report payload.
    pub schema_version: SchemaVersion,
    /// Number of states in the chain.
    pub size: usize,
    /// Communicating classes in discovery order.
    pub classes: Vec<ClassSummary>,
    /// Absorbing states in class discovery order.
    pub absorbing: Vec<usize>,
    /// One entry per state, ordered by index.
    pub states: Vec<StateSummary>,
    /// Canonical hash of the analysed chain.
    pub chain_hash: String,
    /// Content hash over every other field of the report.
    pub report_hash: String,
}

#[derive(Serialize)]
struct HashPayload<'a> {
    schema_version: SchemaVersion,
    size: usize,
    classes: &'a [ClassSummary],
    absorbing: &'a [usize],
    states: &'a [StateSummary],
    chain_hash: &'a str,
}

impl<M: MatrixBackend> Chain<M> {
    /// Runs the full classification and bundles the results into a report.
    pub fn classify(&self) -> Result<ClassificationReport, MarkovError> {
        let _span = debug_span!("classify", states = self.size()).entered();
        let partition = self.equality_classes()?;
        let ergodic = (0..self.size())
            .map(|state| self.ergodic(state))
            .collect::<Result<Vec<_>, _>>()?;

        let mut class_of = vec![0usize; self.size()];
        let mut absorbing = Vec::new();
        let mut classes = Vec::with_capacity(partition.len());
        for (index, members) in partition.into_iter().enumerate() {
            for &state in &members {
                class_of[state] = index;
            }
            if let &[state] = members.as_slice() {
                if ergodic[state] {
                    absorbing.push(state);
                }
            }
            let closed = members.iter().all(|&state| ergodic[state]);
            classes.push(ClassSummary { members, closed });
        }

        let mut states = Vec::with_capacity(self.size());
        for (state, &class_index) in class_of.iter().enumerate() {
            states.push(StateSummary {
                state,
                class_index,
                ergodic: ergodic[state],
                absorbing: absorbing.contains(&state),
                attainable: self.attainability_set(state)?.len(),
            });
        }

        let schema_version = self.config().schema_version;
        let chain_hash = canonical_hash(self);
        let report_hash = stable_hash_string(&HashPayload {
            schema_version,
            size: self.size(),
            classes: &classes,
            absorbing: &absorbing,
            states: &states,
            chain_hash: &chain_hash,
        })?;

        Ok(ClassificationReport {
            schema_version,
            size: self.size(),
            classes,
            absorbing,
            states,
            chain_hash,
            report_hash,
        })
    }
}
