use petgraph::{graph::NodeIndex, Directed, Graph};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Internal,
    External,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

pub type DependencyGraph = Graph<Node, Edge, Directed>;

/// Accumulates nodes and edges as files are merged in. Internal edges are
/// mirrored into an ordered adjacency map for the cycle and metrics passes;
/// external targets become nodes only, never edges.
pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
    adjacency: BTreeMap<String, BTreeSet<String>>,
    target_order: Vec<String>,
    target_seen: HashSet<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
            adjacency: BTreeMap::new(),
            target_order: Vec::new(),
            target_seen: HashSet::new(),
        }
    }

    pub fn add_internal_node(&mut self, id: &str) -> NodeIndex {
        self.intern(id, NodeType::Internal)
    }

    pub fn add_external_node(&mut self, id: &str) -> NodeIndex {
        self.intern(id, NodeType::External)
    }

    fn intern(&mut self, id: &str, node_type: NodeType) -> NodeIndex {
        if let Some(&index) = self.node_map.get(id) {
            return index;
        }
        let index = self.graph.add_node(Node {
            id: id.to_string(),
            node_type,
            path: id.to_string(),
        });
        self.node_map.insert(id.to_string(), index);
        index
    }

    /// One edge per unique (source, target) pair; repeated imports between
    /// the same pair are dropped and the weight stays 1. Both endpoints are
    /// interned as internal nodes, the target possibly before its file is
    /// visited.
    pub fn add_import_edge(&mut self, source: &str, target: &str) {
        let duplicate = self
            .adjacency
            .get(source)
            .map_or(false, |targets| targets.contains(target));
        if duplicate {
            return;
        }

        let source_idx = self.add_internal_node(source);
        let target_idx = self.add_internal_node(target);
        self.graph.add_edge(
            source_idx,
            target_idx,
            Edge {
                source: source.to_string(),
                target: target.to_string(),
                weight: 1,
            },
        );

        self.adjacency
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string());
        if self.target_seen.insert(target.to_string()) {
            self.target_order.push(target.to_string());
        }
    }

    /// Internal-edge adjacency, keyed and ordered for deterministic walks.
    pub fn adjacency(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.adjacency
    }

    /// Internal edge targets in first-discovery order.
    pub fn internal_targets(&self) -> &[String] {
        &self.target_order
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
