use super::Language;

/// Outcome of classifying an import target. `Stdlib` and `ThirdParty`
/// both count as external for graph purposes; the split only matters for
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Internal,
    Stdlib,
    ThirdParty,
}

impl DependencyKind {
    pub fn is_external(self) -> bool {
        !matches!(self, DependencyKind::Internal)
    }
}

/// Python standard-library root modules recognized by the classifier.
pub const PYTHON_STDLIB: &[&str] = &[
    "os", "sys", "re", "json", "time", "datetime", "pathlib", "collections",
    "itertools", "functools", "typing", "abc", "ast", "io", "math", "random",
    "subprocess", "threading", "multiprocessing", "logging", "unittest",
    "argparse", "configparser", "dataclasses", "enum", "copy", "hashlib",
    "base64", "urllib", "http", "socket", "email", "html", "xml", "sqlite3",
];

/// Node.js built-in modules (also reachable via the `node:` prefix).
pub const NODE_BUILTINS: &[&str] = &[
    "fs", "path", "http", "https", "crypto", "os", "child_process", "events",
    "stream", "util", "url", "querystring", "assert", "buffer", "cluster",
    "dns", "net", "process", "readline", "tls", "vm", "zlib",
];

/// Decide whether an import target is project-local or external.
///
/// Precedence: a relative-path marker wins for every language; after that
/// each language applies its own rule. The Go rule (no dot, no slash =
/// stdlib) is a naming heuristic, not a membership check, and misclassifies
/// single-segment third-party imports.
pub fn classify(target: &str, language: Language) -> DependencyKind {
    if target.starts_with('.') {
        return DependencyKind::Internal;
    }

    match language {
        Language::Python => {
            let root = target.split('.').next().unwrap_or(target);
            if PYTHON_STDLIB.contains(&root) {
                DependencyKind::Stdlib
            } else {
                DependencyKind::ThirdParty
            }
        }
        Language::Javascript | Language::Typescript => {
            if target.starts_with('/') {
                DependencyKind::Internal
            } else if NODE_BUILTINS.contains(&target) || target.starts_with("node:") {
                DependencyKind::Stdlib
            } else {
                // anything else is a package-registry name
                DependencyKind::ThirdParty
            }
        }
        Language::Java => {
            // java.* / javax.* count as standard, not external
            if target.starts_with("java.") || target.starts_with("javax.") {
                DependencyKind::Internal
            } else {
                DependencyKind::ThirdParty
            }
        }
        Language::Go => {
            if !target.contains('/') && !target.contains('.') {
                DependencyKind::Stdlib
            } else {
                DependencyKind::ThirdParty
            }
        }
        Language::Unknown => DependencyKind::ThirdParty,
    }
}
