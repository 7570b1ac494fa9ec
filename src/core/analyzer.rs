use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::classifier::classify;
use super::cycles::find_cycles;
use super::graph::{Edge, GraphBuilder, Node};
use super::metrics;
use super::report::{DependencyReport, ExternalDependency, InternalDependency, ReportAssembler};
use super::resolver::TargetResolver;
use super::scanner::{FileInfo, FileScanner};
use super::Language;
use crate::parsers::{ImportRecord, ParserFactory};

/// Files past this size are skipped as zero-import files so one pathological
/// input cannot stall a request.
const MAX_FILE_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct MapOptions {
    /// `None` scans every known language, dispatching per file extension.
    pub language: Option<Language>,
    /// Directory traversal depth limit; -1 removes the limit.
    pub depth: i64,
    pub include_external: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            language: None,
            depth: 3,
            include_external: true,
        }
    }
}

/// Orchestrates one mapping run: scan, per-file extraction, classification,
/// graph assembly, cycle/metric passes, report.
pub struct DependencyAnalyzer {
    scanner: FileScanner,
    factory: ParserFactory,
}

impl DependencyAnalyzer {
    pub fn new() -> Self {
        Self {
            scanner: FileScanner::new(),
            factory: ParserFactory::new(),
        }
    }

    /// Map the dependencies under `source_path`. Never fails: a missing
    /// root or a tree with no recognizable sources degrades to a
    /// zero-dependency report, and per-file problems cost only that file's
    /// imports.
    pub fn analyze(&self, source_path: &Path, options: &MapOptions) -> DependencyReport {
        if !source_path.exists() {
            return ReportAssembler::path_not_found(source_path);
        }

        let files = self.scanner.scan(source_path, options.language, options.depth);
        if files.is_empty() {
            return ReportAssembler::no_source_files(source_path);
        }

        // Per-file extraction is independent; fan out across the rayon pool
        // and merge sequentially below, keeping the builder single-threaded.
        let extractions: Vec<Vec<ImportRecord>> = files
            .par_iter()
            .map(|file| self.extract_file(file))
            .collect();

        let resolver = TargetResolver::new(&files);
        let mut builder = GraphBuilder::new();
        let mut internal: Vec<InternalDependency> = Vec::new();
        let mut externals = ExternalAccumulator::new();

        for (file, records) in files.iter().zip(&extractions) {
            builder.add_internal_node(&file.relative_path);

            for record in records {
                if record.target.is_empty() {
                    continue;
                }

                let kind = classify(&record.target, file.language);
                if kind.is_external() {
                    if options.include_external {
                        let root = external_root(&record.target);
                        externals.record(root, &file.relative_path);
                        builder.add_external_node(root);
                    }
                    continue;
                }

                let target_id =
                    resolver.resolve(&record.target, &file.relative_path, file.language);
                internal.push(InternalDependency {
                    source: file.relative_path.clone(),
                    target: target_id.clone(),
                    import_type: record.kind,
                    symbols: record.symbols.clone(),
                });
                builder.add_import_edge(&file.relative_path, &target_id);
            }
        }

        let cycles = find_cycles(builder.adjacency());
        let entry_points = metrics::entry_points(builder.adjacency());
        let highly_depended =
            metrics::highly_depended(builder.adjacency(), builder.internal_targets());
        let external = externals.into_sorted();

        let graph = builder.build();
        let nodes: Vec<Node> = graph.node_weights().cloned().collect();
        let edges: Vec<Edge> = graph.edge_weights().cloned().collect();

        ReportAssembler::assemble(
            files.len(),
            internal,
            external,
            nodes,
            edges,
            cycles,
            entry_points,
            highly_depended,
        )
    }

    fn extract_file(&self, file: &FileInfo) -> Vec<ImportRecord> {
        let parser = match self.factory.get_parser(file.language) {
            Ok(parser) => parser,
            Err(err) => {
                eprintln!(
                    "Warning: skipping {}: {}",
                    file.path.display(),
                    err
                );
                return Vec::new();
            }
        };

        match read_bounded(&file.path) {
            Some(contents) => parser.extract(&contents),
            None => Vec::new(),
        }
    }
}

impl Default for DependencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a file as text, tolerating invalid UTF-8 and skipping oversized
/// inputs. `None` means zero imports for this file, never a scan failure.
fn read_bounded(path: &Path) -> Option<String> {
    let metadata = fs::metadata(path).ok()?;
    if metadata.len() > MAX_FILE_BYTES {
        eprintln!("Warning: skipping oversized file {}", path.display());
        return None;
    }
    let bytes = fs::read(path).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Root package name of an external target: first path segment, then its
/// first dotted component ("os.path" -> "os", "github.com/x/y" -> "github").
fn external_root(target: &str) -> &str {
    let first = target.split('/').next().unwrap_or(target);
    first.split('.').next().unwrap_or(first)
}

/// Aggregates external usage per root package, preserving first-seen order
/// so the by-count sort breaks ties deterministically.
struct ExternalAccumulator {
    order: Vec<String>,
    usage: HashMap<String, ExternalUsage>,
}

#[derive(Default)]
struct ExternalUsage {
    used_in: Vec<String>,
    count: usize,
}

impl ExternalAccumulator {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            usage: HashMap::new(),
        }
    }

    fn record(&mut self, name: &str, used_in: &str) {
        if !self.usage.contains_key(name) {
            self.order.push(name.to_string());
        }
        let entry = self.usage.entry(name.to_string()).or_default();
        entry.count += 1;
        if !entry.used_in.iter().any(|path| path == used_in) {
            entry.used_in.push(used_in.to_string());
        }
    }

    fn into_sorted(mut self) -> Vec<ExternalDependency> {
        let mut deps: Vec<ExternalDependency> = self
            .order
            .iter()
            .map(|name| {
                let usage = self.usage.remove(name).unwrap_or_default();
                ExternalDependency {
                    name: name.clone(),
                    used_in: usage.used_in,
                    import_count: usage.count,
                }
            })
            .collect();

        deps.sort_by(|a, b| b.import_count.cmp(&a.import_count));
        deps
    }
}
