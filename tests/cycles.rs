use depmap::core::cycles::{find_cycles, MAX_CYCLES};
use std::collections::{BTreeMap, BTreeSet};

fn adjacency(pairs: &[(&str, &[&str])]) -> BTreeMap<String, BTreeSet<String>> {
    pairs
        .iter()
        .map(|(source, targets)| {
            (
                source.to_string(),
                targets.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn acyclic_graph_has_no_cycles() {
    let adj = adjacency(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
    assert!(find_cycles(&adj).is_empty());
}

#[test]
fn diamond_is_not_a_cycle() {
    let adj = adjacency(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"])]);
    assert!(find_cycles(&adj).is_empty());
}

#[test]
fn mutual_imports_form_one_two_edge_cycle() {
    let adj = adjacency(&[("a", &["b"]), ("b", &["a"])]);
    let cycles = find_cycles(&adj);

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0], vec!["a", "b", "a"]);
}

#[test]
fn three_node_cycle() {
    let adj = adjacency(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
    let cycles = find_cycles(&adj);

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0], vec!["a", "b", "c", "a"]);
}

#[test]
fn self_loop_is_a_valid_one_edge_cycle() {
    let adj = adjacency(&[("a", &["a"])]);
    let cycles = find_cycles(&adj);

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0], vec!["a", "a"]);
}

#[test]
fn every_reported_cycle_is_closed() {
    let adj = adjacency(&[
        ("a", &["b"]),
        ("b", &["a", "c"]),
        ("c", &["d"]),
        ("d", &["c"]),
    ]);

    for cycle in find_cycles(&adj) {
        assert!(cycle.len() > 1);
        assert_eq!(cycle.first(), cycle.last());
    }
}

#[test]
fn reports_are_capped_at_ten() {
    // twelve disjoint 2-cycles
    let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
    for i in 0..12 {
        pairs.push((format!("a{i}"), vec![format!("b{i}")]));
        pairs.push((format!("b{i}"), vec![format!("a{i}")]));
    }
    let adj: BTreeMap<String, BTreeSet<String>> = pairs
        .into_iter()
        .map(|(s, ts)| (s, ts.into_iter().collect()))
        .collect();

    let cycles = find_cycles(&adj);
    assert_eq!(cycles.len(), MAX_CYCLES);
}

#[test]
fn shared_cycle_is_not_reported_twice() {
    // c reaches the a<->b cycle but a was already visited
    let adj = adjacency(&[("a", &["b"]), ("b", &["a"]), ("c", &["a"])]);
    let cycles = find_cycles(&adj);

    assert_eq!(cycles.len(), 1);
}
