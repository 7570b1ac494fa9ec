use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::report::HighlyDepended;

/// Internal nodes with outgoing edges but no incoming ones: files that
/// depend on others while nothing in the scan depends on them.
pub fn entry_points(adjacency: &BTreeMap<String, BTreeSet<String>>) -> Vec<String> {
    let targets: HashSet<&str> = adjacency
        .values()
        .flat_map(|t| t.iter().map(String::as_str))
        .collect();

    adjacency
        .keys()
        .filter(|node| !targets.contains(node.as_str()))
        .cloned()
        .collect()
}

/// Internal targets ranked by incoming-edge count, descending. The sort is
/// stable over `target_order`, so ties keep discovery order.
pub fn highly_depended(
    adjacency: &BTreeMap<String, BTreeSet<String>>,
    target_order: &[String],
) -> Vec<HighlyDepended> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for targets in adjacency.values() {
        for target in targets {
            *counts.entry(target.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<HighlyDepended> = target_order
        .iter()
        .map(|target| HighlyDepended {
            path: target.clone(),
            dependents_count: counts.get(target.as_str()).copied().unwrap_or(0),
        })
        .collect();

    ranked.sort_by(|a, b| b.dependents_count.cmp(&a.dependents_count));
    ranked
}
