use std::collections::BTreeSet;

use mkv_chain::{gen_absorbing_walk, Chain, MarkovError};

fn absorbing_walk() -> Chain {
    Chain::new(&[
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.5, 0.0, 0.5, 0.0, 0.0],
        [0.0, 0.5, 0.0, 0.5, 0.0],
        [0.0, 0.0, 0.5, 0.0, 0.5],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ])
    .unwrap()
}

fn cycle_both_ways() -> Chain {
    Chain::new(&[
        [0.0, 0.5, 0.0, 0.0, 0.5],
        [0.5, 0.0, 0.5, 0.0, 0.0],
        [0.0, 0.5, 0.0, 0.5, 0.0],
        [0.0, 0.0, 0.5, 0.0, 0.5],
        [0.5, 0.0, 0.0, 0.5, 0.0],
    ])
    .unwrap()
}

#[test]
fn attainability_follows_support_graph() {
    let chain = absorbing_walk();
    assert!(chain.attainability(1, 0).unwrap());
    assert!(chain.attainability(2, 3).unwrap());
    assert!(chain.attainability(2, 4).unwrap());
    assert!(!chain.attainability(0, 4).unwrap());
    assert!(!chain.attainability(4, 1).unwrap());
}

#[test]
fn attainability_rejects_out_of_range_states() {
    let chain = absorbing_walk();
    let err = chain.attainability(0, 5).unwrap_err();
    assert!(matches!(err, MarkovError::InvalidIndices(_)));
    let err = chain.attainability_set(9).unwrap_err();
    assert!(matches!(err, MarkovError::InvalidIndices(_)));
}

#[test]
fn attainability_sets() {
    let chain = absorbing_walk();
    assert_eq!(chain.attainability_set(0).unwrap(), BTreeSet::from([0]));
    assert_eq!(
        chain.attainability_set(2).unwrap(),
        BTreeSet::from([0, 1, 2, 3, 4])
    );
}

#[test]
fn ergodicity_of_walk_states() {
    let chain = absorbing_walk();
    assert!(chain.ergodic(0).unwrap());
    assert!(chain.ergodic(4).unwrap());
    for state in 1..4 {
        assert!(!chain.ergodic(state).unwrap(), "state {state} leaks mass");
    }
}

#[test]
fn communication_is_symmetric() {
    let chain = absorbing_walk();
    assert!(chain.communicate(1, 3).unwrap());
    assert!(chain.communicate(3, 1).unwrap());
    assert!(!chain.communicate(0, 1).unwrap());
    assert!(!chain.communicate(1, 0).unwrap());
}

#[test]
fn equality_classes_in_discovery_order() {
    let classes = absorbing_walk().equality_classes().unwrap();
    assert_eq!(classes, vec![vec![0], vec![1, 2, 3], vec![4]]);
}

#[test]
fn absorbing_states_of_walk() {
    assert_eq!(absorbing_walk().absorbing_classes().unwrap(), vec![0, 4]);
}

#[test]
fn generated_walk_matches_literal_walk() {
    let generated = gen_absorbing_walk(5, 0.5).unwrap();
    assert_eq!(generated.rows(), absorbing_walk().rows());
}

#[test]
fn full_cycle_is_one_closed_class() {
    let chain = cycle_both_ways();
    assert!(chain.communicating_class(&[0, 1, 2, 3, 4]).unwrap());
    assert_eq!(chain.equality_classes().unwrap(), vec![vec![0, 1, 2, 3, 4]]);
    assert!(chain.absorbing_classes().unwrap().is_empty());
}

#[test]
fn communicating_class_checks_each_member() {
    let chain = absorbing_walk();
    assert!(chain.communicating_class(&[0, 4]).unwrap());
    assert!(!chain.communicating_class(&[0, 2]).unwrap());
    assert!(chain.communicating_class(&[]).unwrap());
    assert!(chain.communicating_class(&[7]).is_err());
}

#[test]
fn state_without_return_path_is_its_own_class() {
    let chain = Chain::new(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]]).unwrap();
    assert_eq!(
        chain.equality_classes().unwrap(),
        vec![vec![0], vec![1], vec![2]]
    );
    assert_eq!(chain.absorbing_classes().unwrap(), vec![2]);
}

#[test]
fn classification_of_empty_chain_fails() {
    let rows: Vec<Vec<f64>> = Vec::new();
    let chain = Chain::new(&rows).unwrap();
    let err = chain.equality_classes().unwrap_err();
    assert!(matches!(err, MarkovError::EmptyMatrix(info) if info.code == "empty-chain"));
    assert!(matches!(
        chain.absorbing_classes().unwrap_err(),
        MarkovError::EmptyMatrix(_)
    ));
    assert!(chain.classify().is_err());
}

#[test]
fn report_summarises_walk() {
    let report = absorbing_walk().classify().unwrap();
    assert_eq!(report.size, 5);
    assert_eq!(report.absorbing, vec![0, 4]);
    let members: Vec<_> = report.classes.iter().map(|c| c.members.clone()).collect();
    assert_eq!(members, vec![vec![0], vec![1, 2, 3], vec![4]]);
    let closed: Vec<_> = report.classes.iter().map(|c| c.closed).collect();
    assert_eq!(closed, vec![true, false, true]);

    let middle = &report.states[2];
    assert_eq!(middle.class_index, 1);
    assert!(!middle.ergodic);
    assert!(!middle.absorbing);
    assert_eq!(middle.attainable, 5);
    assert!(report.states[4].absorbing);
    assert_eq!(report.report_hash.len(), 64);
}

#[test]
fn report_is_deterministic() {
    let a = absorbing_walk().classify().unwrap();
    let b = absorbing_walk().classify().unwrap();
    assert_eq!(a, b);
    let c = cycle_both_ways().classify().unwrap();
    assert_ne!(a.report_hash, c.report_hash);
    assert_ne!(a.chain_hash, c.chain_hash);
}
