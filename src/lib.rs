//! # DEPMAP
//!
//! Multi-language dependency mapping for source trees.
//!
//! depmap scans a file or directory, extracts module-level import/require
//! relationships per language, classifies each target as internal (project)
//! or external (stdlib/third-party), and derives structural facts from the
//! resulting graph: circular dependency chains, entry points, and the most
//! depended-upon modules.
//!
//! ## Supported Languages
//!
//! Python (structured parse with pattern fallback), JavaScript, TypeScript,
//! Java, Go (pattern extraction)

pub mod core;
pub mod parsers;
