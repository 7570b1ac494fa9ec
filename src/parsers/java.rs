use anyhow::Result;
use regex::Regex;

use super::{ImportKind, ImportParser, ImportRecord};

pub struct JavaParser {
    import_pattern: Regex,
}

impl JavaParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // group 1: optional `static`; group 2: the dotted type or
            // package name, with a trailing `.*` stripped
            import_pattern: Regex::new(r"import\s+(static\s+)?([\w.]+)(?:\.\*)?\s*;")?,
        })
    }
}

impl ImportParser for JavaParser {
    fn extract(&self, source: &str) -> Vec<ImportRecord> {
        let mut records = Vec::new();

        for captures in self.import_pattern.captures_iter(source) {
            let Some(target) = captures.get(2) else { continue };
            let kind = if captures.get(1).is_some() {
                ImportKind::Static
            } else {
                ImportKind::Direct
            };
            // the class name (last segment) is the bound symbol
            let symbol = target
                .as_str()
                .rsplit('.')
                .next()
                .unwrap_or(target.as_str());
            records.push(ImportRecord::new(
                target.as_str(),
                kind,
                vec![symbol.to_string()],
            ));
        }

        records
    }

    fn language_name(&self) -> &str {
        "java"
    }
}
