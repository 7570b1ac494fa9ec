pub mod analyzer;
pub mod classifier;
pub mod cycles;
pub mod graph;
pub mod language;
pub mod metrics;
pub mod report;
pub mod resolver;
pub mod scanner;

pub use analyzer::{DependencyAnalyzer, MapOptions};
pub use classifier::{classify, DependencyKind};
pub use graph::{DependencyGraph, Edge, GraphBuilder, Node, NodeType};
pub use language::Language;
pub use report::{DependencyReport, ReportAssembler};
pub use resolver::TargetResolver;
pub use scanner::{FileInfo, FileScanner};
