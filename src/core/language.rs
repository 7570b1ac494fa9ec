use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Language tag resolved from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Typescript,
    Java,
    Go,
    Unknown,
}

impl Language {
    /// Classify a file path by its extension. Extensions outside the fixed
    /// table map to `Unknown`.
    pub fn from_path(path: &Path) -> Language {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("py" | "pyi" | "pyw") => Language::Python,
            Some("js" | "jsx" | "mjs" | "cjs") => Language::Javascript,
            Some("ts" | "tsx") => Language::Typescript,
            Some("java") => Language::Java,
            Some("go") => Language::Go,
            _ => Language::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Java => "java",
            Language::Go => "go",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
