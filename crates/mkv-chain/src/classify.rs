use mkv_core::{ErrorInfo, MarkovError, MatrixBackend};
use tracing::{debug, debug_span, trace};

use crate::chain::Chain;

/// Maximal group of mutually communicating states, in discovery order.
pub type Class = Vec<usize>;

impl<M: MatrixBackend> Chain<M> {
    /// Returns whether `first` and `second` reach each other.
    pub fn communicate(&self, first: usize, second: usize) -> Result<bool, MarkovError> {
        let forward = self.attainability(first, second)?;
        let backward = self.attainability(second, first)?;
        Ok(forward && backward)
    }

    /// Returns whether every state attainable from `state` can return to it.
    pub fn ergodic(&self, state: usize) -> Result<bool, MarkovError> {
        let attainable = self.attainability_set(state)?;
        Ok(attainable.into_iter().all(|other| self.reaches(other, state)))
    }

    /// Partitions all states into communicating classes.
    ///
    /// States are scanned in index order; the first unassigned state seeds a
    /// class that collects every attainable state communicating with it. A
    /// state without a return path to itself forms a singleton class, so the
    /// classes always cover `0..size()` exactly once.
    pub fn equality_classes(&self) -> Result<Vec<Class>, MarkovError> {
        let states = self.size();
        if states == 0 {
            return Err(empty_chain());
        }
        let _span = debug_span!("equality_classes", states).entered();
        let mut assigned = vec![false; states];
        let mut classes = Vec::new();
        for state in 0..states {
            if assigned[state] {
                continue;
            }
            assigned[state] = true;
            let mut class = vec![state];
            for other in self.attainability_set(state)? {
                if other != state && self.communicate(state, other)? {
                    assigned[other] = true;
                    class.push(other);
                }
            }
            trace!(?class, "discovered class");
            classes.push(class);
        }
        debug!(classes = classes.len(), "partitioned states");
        Ok(classes)
    }

    /// Returns the absorbing states: members of ergodic singleton classes, in
    /// class discovery order.
    pub fn absorbing_classes(&self) -> Result<Vec<usize>, MarkovError> {
        let mut absorbing = Vec::new();
        for class in self.equality_classes()? {
            if let &[state] = class.as_slice() {
                if self.ergodic(state)? {
                    absorbing.push(state);
                }
            }
        }
        debug!(?absorbing, "detected absorbing states");
        Ok(absorbing)
    }

    /// Returns whether every member of `class` is ergodic.
    ///
    /// Only per-member ergodicity is checked; maximality and mutual
    /// communication between members are not.
    pub fn communicating_class(&self, class: &[usize]) -> Result<bool, MarkovError> {
        for &state in class {
            if !self.ergodic(state)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn empty_chain() -> MarkovError {
    MarkovError::EmptyMatrix(
        ErrorInfo::new("empty-chain", "classification requires at least one state")
            .with_hint("construct the chain from a non-empty set of rows"),
    )
}
