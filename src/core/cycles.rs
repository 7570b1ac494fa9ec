use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Cycle reports are capped to bound output size; the search itself runs to
/// completion and the first ones found in discovery order are kept.
pub const MAX_CYCLES: usize = 10;

/// Find circular chains in the internal-edge subgraph.
///
/// Depth-first search with an explicit frame stack (node + path-so-far)
/// instead of native recursion, so deep or adversarial graphs cannot blow
/// the call stack. A frame whose node already sits on its own path closes a
/// cycle; the reported chain runs from the node's first occurrence to the
/// repeat, so its first and last ids are equal. A self-loop is a valid
/// 1-edge cycle. Cycles are deduplicated by exact node sequence - rotations
/// of the same cycle discovered from different start nodes stay distinct.
pub fn find_cycles(adjacency: &BTreeMap<String, BTreeSet<String>>) -> Vec<Vec<String>> {
    struct Frame<'a> {
        node: &'a str,
        path: Vec<&'a str>,
    }

    let mut cycles: Vec<Vec<String>> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();

    for start in adjacency.keys() {
        if visited.contains(start.as_str()) {
            continue;
        }

        let mut stack = vec![Frame {
            node: start.as_str(),
            path: Vec::new(),
        }];

        while let Some(frame) = stack.pop() {
            if let Some(pos) = frame.path.iter().position(|&p| p == frame.node) {
                let mut cycle: Vec<String> =
                    frame.path[pos..].iter().map(|p| (*p).to_string()).collect();
                cycle.push(frame.node.to_string());
                if cycle.len() > 1 && !cycles.contains(&cycle) {
                    cycles.push(cycle);
                }
                continue;
            }

            if !visited.insert(frame.node) {
                continue;
            }

            let mut path = frame.path;
            path.push(frame.node);

            if let Some(neighbors) = adjacency.get(frame.node) {
                // pushed in reverse so pop order matches neighbor order
                for next in neighbors.iter().rev() {
                    stack.push(Frame {
                        node: next.as_str(),
                        path: path.clone(),
                    });
                }
            }
        }
    }

    cycles.truncate(MAX_CYCLES);
    cycles
}
