use mkv_core::{ErrorInfo, MarkovError, RngHandle};
use rand::seq::index;
use rand::{Rng, RngCore};

use crate::chain::Chain;

/// Generates a random chain whose rows each have between one and
/// `max_support` non-zero entries.
///
/// One master seed is drawn from `rng` and every row is generated from its
/// own substream of that seed, so the same seed always yields the same matrix
/// and a row does not depend on how many draws earlier rows consumed.
pub fn gen_random_chain(
    n_states: usize,
    max_support: usize,
    rng: &mut RngHandle,
) -> Result<Chain, MarkovError> {
    if n_states == 0 {
        return Err(MarkovError::EmptyMatrix(ErrorInfo::new(
            "empty-chain",
            "random chain generator requires at least one state",
        )));
    }
    let support = max_support.clamp(1, n_states);
    let master_seed = rng.next_u64();
    let mut rows = Vec::with_capacity(n_states);
    for state in 0..n_states {
        let mut row_rng = RngHandle::substream(master_seed, state as u64);
        let k = row_rng.gen_range(1..=support);
        let targets = index::sample(&mut row_rng, n_states, k);
        let weights: Vec<f64> = (0..k).map(|_| row_rng.gen_range(0.05..1.0)).collect();
        let total: f64 = weights.iter().sum();
        let mut row = vec![0.0; n_states];
        for (target, weight) in targets.into_iter().zip(weights) {
            row[target] = weight / total;
        }
        rows.push(row);
    }
    Chain::new(&rows)
}

/// Generates a gambler's-ruin walk: the two end states are absorbing and
/// every interior state steps right with probability `p_forward` and left
/// otherwise.
pub fn gen_absorbing_walk(n_states: usize, p_forward: f64) -> Result<Chain, MarkovError> {
    if n_states == 0 {
        return Err(MarkovError::EmptyMatrix(ErrorInfo::new(
            "empty-chain",
            "absorbing walk requires at least one state",
        )));
    }
    if !(0.0..=1.0).contains(&p_forward) {
        return Err(MarkovError::NotStochastic(
            ErrorInfo::new("invalid-probability", "forward probability must lie in [0, 1]")
                .with_context("p_forward", p_forward),
        ));
    }
    let last = n_states - 1;
    let rows: Vec<Vec<f64>> = (0..n_states)
        .map(|state| {
            let mut row = vec![0.0; n_states];
            if state == 0 || state == last {
                row[state] = 1.0;
            } else {
                row[state - 1] = 1.0 - p_forward;
                row[state + 1] = p_forward;
            }
            row
        })
        .collect();
    Chain::new(&rows)
}
