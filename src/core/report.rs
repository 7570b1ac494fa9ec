use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::cycles::MAX_CYCLES;
use super::graph::{Edge, Node};
use crate::parsers::ImportKind;

pub const MAX_INTERNAL_DEPENDENCIES: usize = 100;
pub const MAX_EXTERNAL_DEPENDENCIES: usize = 50;
pub const MAX_GRAPH_NODES: usize = 200;
pub const MAX_GRAPH_EDGES: usize = 500;
pub const MAX_ENTRY_POINTS: usize = 20;
pub const MAX_HIGHLY_DEPENDED: usize = 10;
pub const MAX_USED_IN_PATHS: usize = 10;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InternalDependency {
    pub source: String,
    pub target: String,
    pub import_type: ImportKind,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExternalDependency {
    pub name: String,
    pub used_in: Vec<String>,
    pub import_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HighlyDepended {
    pub path: String,
    pub dependents_count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphReport {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Final structured result of one dependency-mapping run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyReport {
    pub summary: String,
    pub total_dependencies: usize,
    pub internal_dependencies: Vec<InternalDependency>,
    pub external_dependencies: Vec<ExternalDependency>,
    pub dependency_graph: GraphReport,
    pub circular_dependencies: Vec<Vec<String>>,
    pub entry_points: Vec<String>,
    pub highly_depended: Vec<HighlyDepended>,
}

impl DependencyReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable rendering for the CLI's summary format.
    pub fn render_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.summary);
        output.push('\n');
        output.push_str(&format!("Total dependencies: {}\n", self.total_dependencies));

        if !self.internal_dependencies.is_empty() {
            output.push_str("\nInternal dependencies:\n");
            for dep in &self.internal_dependencies {
                output.push_str(&format!(
                    "  {} -> {} ({})\n",
                    dep.source,
                    dep.target,
                    dep.import_type.as_str()
                ));
            }
        }

        if !self.external_dependencies.is_empty() {
            output.push_str("\nExternal dependencies:\n");
            for dep in &self.external_dependencies {
                output.push_str(&format!(
                    "  {} ({} import{})\n",
                    dep.name,
                    dep.import_count,
                    if dep.import_count == 1 { "" } else { "s" }
                ));
            }
        }

        if !self.circular_dependencies.is_empty() {
            output.push_str("\nCircular dependencies:\n");
            for chain in &self.circular_dependencies {
                output.push_str(&format!("  {}\n", chain.join(" -> ")));
            }
        }

        if !self.entry_points.is_empty() {
            output.push_str("\nEntry points:\n");
            for entry in &self.entry_points {
                output.push_str(&format!("  {entry}\n"));
            }
        }

        if !self.highly_depended.is_empty() {
            output.push_str("\nMost depended upon:\n");
            for item in &self.highly_depended {
                output.push_str(&format!(
                    "  {} ({} dependents)\n",
                    item.path, item.dependents_count
                ));
            }
        }

        output.push_str(&format!(
            "\nGraph: {} nodes, {} edges\n",
            self.dependency_graph.nodes.len(),
            self.dependency_graph.edges.len()
        ));
        output
    }
}

/// Merges the analysis pieces into the final report, applying the output
/// truncation limits and composing the natural-language summary.
pub struct ReportAssembler;

impl ReportAssembler {
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        files_scanned: usize,
        mut internal: Vec<InternalDependency>,
        mut external: Vec<ExternalDependency>,
        mut nodes: Vec<Node>,
        mut edges: Vec<Edge>,
        mut cycles: Vec<Vec<String>>,
        mut entry_points: Vec<String>,
        mut highly_depended: Vec<HighlyDepended>,
    ) -> DependencyReport {
        let total = internal.len() + external.len();

        let mut summary = format!(
            "Analyzed {files_scanned} file(s). Found {} internal and {} external dependencies.",
            internal.len(),
            external.len()
        );
        if !cycles.is_empty() {
            summary.push_str(&format!(
                " Detected {} circular dependency chain(s).",
                cycles.len()
            ));
        }
        if let Some(top) = highly_depended.first() {
            summary.push_str(&format!(
                " Most depended: {} ({} dependents).",
                top.path, top.dependents_count
            ));
        }

        internal.truncate(MAX_INTERNAL_DEPENDENCIES);
        external.truncate(MAX_EXTERNAL_DEPENDENCIES);
        for dep in &mut external {
            dep.used_in.truncate(MAX_USED_IN_PATHS);
        }
        nodes.truncate(MAX_GRAPH_NODES);
        edges.truncate(MAX_GRAPH_EDGES);
        cycles.truncate(MAX_CYCLES);
        entry_points.truncate(MAX_ENTRY_POINTS);
        highly_depended.truncate(MAX_HIGHLY_DEPENDED);

        DependencyReport {
            summary,
            total_dependencies: total,
            internal_dependencies: internal,
            external_dependencies: external,
            dependency_graph: GraphReport { nodes, edges },
            circular_dependencies: cycles,
            entry_points,
            highly_depended,
        }
    }

    /// Degenerate result for a scan root that does not exist.
    pub fn path_not_found(path: &Path) -> DependencyReport {
        DependencyReport {
            summary: format!("Path not found: {}", path.display()),
            ..Default::default()
        }
    }

    /// Degenerate result for a root with no recognizable source files.
    pub fn no_source_files(path: &Path) -> DependencyReport {
        DependencyReport {
            summary: format!("No source files found in: {}", path.display()),
            ..Default::default()
        }
    }
}
