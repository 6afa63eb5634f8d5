//! Reachability over the support graph of the transition matrix.
//!
//! The graph has an edge `i -> j` iff `P[i][j] != 0`. A state only reaches
//! itself through a self-loop or a cycle; the zero-length path does not count.

use std::collections::BTreeSet;

use mkv_core::{MarkovError, MatrixBackend};

use crate::chain::Chain;

/// Sorted set of states attainable from a source state.
pub type AttainabilitySet = BTreeSet<usize>;

impl<M: MatrixBackend> Chain<M> {
    /// Returns whether `to` can be reached from `from` along non-zero transitions.
    pub fn attainability(&self, from: usize, to: usize) -> Result<bool, MarkovError> {
        self.ensure_index(from)?;
        self.ensure_index(to)?;
        Ok(self.reaches(from, to))
    }

    /// Returns every state attainable from `from`, testing each target independently.
    pub fn attainability_set(&self, from: usize) -> Result<AttainabilitySet, MarkovError> {
        self.ensure_index(from)?;
        Ok((0..self.size())
            .filter(|&to| self.reaches(from, to))
            .collect())
    }

    pub(crate) fn successors(&self, state: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size()).filter(move |&next| self.weight(state, next) != 0.0)
    }

    /// Depth-first walk with an explicit work list. Each state is expanded at
    /// most once and the walk stops as soon as `to` shows up as a successor.
    pub(crate) fn reaches(&self, from: usize, to: usize) -> bool {
        let mut visited = vec![false; self.size()];
        let mut stack = vec![from];
        visited[from] = true;
        while let Some(state) = stack.pop() {
            for next in self.successors(state) {
                if next == to {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        false
    }
}
