use anyhow::Result;
use regex::Regex;

use super::{ImportKind, ImportParser, ImportRecord};

/// ECMAScript import patterns, shared by the JavaScript and TypeScript
/// parsers since both languages use the same module forms.
pub(crate) struct EcmaImportPatterns {
    default_import: Regex,
    named_import: Regex,
    namespace_import: Regex,
    require_call: Regex,
    dynamic_import: Regex,
}

impl EcmaImportPatterns {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            default_import: Regex::new(r#"import\s+(\w+)\s+from\s+['"]([^'"]+)['"]"#)?,
            named_import: Regex::new(r#"import\s+\{([^}]+)\}\s+from\s+['"]([^'"]+)['"]"#)?,
            namespace_import: Regex::new(r#"import\s+\*\s+as\s+(\w+)\s+from\s+['"]([^'"]+)['"]"#)?,
            require_call: Regex::new(
                r#"(?:const|let|var)\s+(\w+)\s*=\s*require\s*\(['"]([^'"]+)['"]\)"#,
            )?,
            dynamic_import: Regex::new(r#"import\s*\(['"]([^'"]+)['"]\)"#)?,
        })
    }

    pub(crate) fn extract(&self, source: &str) -> Vec<ImportRecord> {
        let mut records = Vec::new();

        for captures in self.default_import.captures_iter(source) {
            let (Some(symbol), Some(target)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            records.push(ImportRecord::new(
                target.as_str(),
                ImportKind::Default,
                vec![symbol.as_str().to_string()],
            ));
        }

        for captures in self.named_import.captures_iter(source) {
            let (Some(names), Some(target)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            // `a as b` binds b locally; the record keeps the exported name a
            let symbols: Vec<String> = names
                .as_str()
                .split(',')
                .map(|s| s.trim().split(" as ").next().unwrap_or("").trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            records.push(ImportRecord::new(
                target.as_str(),
                ImportKind::Named,
                symbols,
            ));
        }

        for captures in self.namespace_import.captures_iter(source) {
            let (Some(symbol), Some(target)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            records.push(ImportRecord::new(
                target.as_str(),
                ImportKind::Namespace,
                vec![symbol.as_str().to_string()],
            ));
        }

        for captures in self.require_call.captures_iter(source) {
            let (Some(symbol), Some(target)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            records.push(ImportRecord::new(
                target.as_str(),
                ImportKind::Require,
                vec![symbol.as_str().to_string()],
            ));
        }

        // computed module expressions bind no name syntactically
        for captures in self.dynamic_import.captures_iter(source) {
            let Some(target) = captures.get(1) else { continue };
            records.push(ImportRecord::new(
                target.as_str(),
                ImportKind::Dynamic,
                Vec::new(),
            ));
        }

        records
    }
}

pub struct JavaScriptParser {
    patterns: EcmaImportPatterns,
}

impl JavaScriptParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: EcmaImportPatterns::new()?,
        })
    }
}

impl ImportParser for JavaScriptParser {
    fn extract(&self, source: &str) -> Vec<ImportRecord> {
        self.patterns.extract(source)
    }

    fn language_name(&self) -> &str {
        "javascript"
    }
}
