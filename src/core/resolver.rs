use std::collections::HashSet;

use super::{FileInfo, Language};

const ECMA_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx"];
const TS_FIRST_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];
const PYTHON_EXTENSIONS: &[&str] = &["py", "pyi", "pyw"];

/// Maps classified-internal import targets onto scanned-file node ids.
///
/// Relative markers are applied against the importing file's directory and
/// the language's known extensions are tried; a miss keeps the raw module
/// string as the node id, standing in for a target the scan never visited.
pub struct TargetResolver {
    files: HashSet<String>,
}

impl TargetResolver {
    pub fn new(files: &[FileInfo]) -> Self {
        Self {
            files: files.iter().map(|f| f.relative_path.clone()).collect(),
        }
    }

    pub fn resolve(&self, target: &str, source: &str, language: Language) -> String {
        let resolved = match language {
            Language::Python => self.resolve_python(target, source),
            Language::Javascript => self.resolve_ecma(target, source, ECMA_EXTENSIONS),
            Language::Typescript => self.resolve_ecma(target, source, TS_FIRST_EXTENSIONS),
            Language::Go => self.resolve_relative(target, source, &["go"]),
            _ => None,
        };
        resolved.unwrap_or_else(|| target.to_string())
    }

    /// Relative Python imports: one leading dot anchors at the importing
    /// file's package, each extra dot climbs a level. `from . import x`
    /// carries no module path and stays unresolved.
    fn resolve_python(&self, target: &str, source: &str) -> Option<String> {
        if !target.starts_with('.') {
            return None;
        }

        let dots = target.chars().take_while(|&c| c == '.').count();
        let remainder = &target[dots..];
        if remainder.is_empty() {
            return None;
        }

        let mut base = parent_components(source);
        for _ in 1..dots {
            base.pop()?;
        }
        base.extend(remainder.split('.').map(str::to_string));

        let stem = base.join("/");
        self.with_extension(&stem, PYTHON_EXTENSIONS)
            .or_else(|| self.existing(&format!("{stem}/__init__.py")))
    }

    fn resolve_ecma(&self, target: &str, source: &str, extensions: &[&str]) -> Option<String> {
        let joined = if let Some(rest) = target.strip_prefix('/') {
            join_segments(Vec::new(), rest)?
        } else if target.starts_with('.') {
            join_segments(parent_components(source), target)?
        } else {
            return None;
        };

        self.existing(&joined)
            .or_else(|| self.with_extension(&joined, extensions))
            .or_else(|| self.with_extension(&format!("{joined}/index"), extensions))
    }

    fn resolve_relative(&self, target: &str, source: &str, extensions: &[&str]) -> Option<String> {
        if !target.starts_with('.') {
            return None;
        }
        let joined = join_segments(parent_components(source), target)?;
        self.existing(&joined)
            .or_else(|| self.with_extension(&joined, extensions))
    }

    fn existing(&self, candidate: &str) -> Option<String> {
        self.files.contains(candidate).then(|| candidate.to_string())
    }

    fn with_extension(&self, stem: &str, extensions: &[&str]) -> Option<String> {
        extensions
            .iter()
            .map(|ext| format!("{stem}.{ext}"))
            .find(|candidate| self.files.contains(candidate))
    }
}

/// Directory components of a relative file path.
fn parent_components(source: &str) -> Vec<String> {
    let mut parts: Vec<String> = source.split('/').map(str::to_string).collect();
    parts.pop();
    parts
}

/// Apply `.`/`..` path segments against a base; climbing past the scan root
/// gives up on resolution.
fn join_segments(mut base: Vec<String>, target: &str) -> Option<String> {
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                base.pop()?;
            }
            other => base.push(other.to_string()),
        }
    }
    Some(base.join("/"))
}
