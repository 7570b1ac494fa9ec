use anyhow::Result;
use regex::Regex;

use super::{ImportKind, ImportParser, ImportRecord};

pub struct GoParser {
    single_import: Regex,
    import_block: Regex,
    spec_line: Regex,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            single_import: Regex::new(r#"import\s+"([^"]+)""#)?,
            import_block: Regex::new(r"(?s)import\s*\(([^)]*)\)")?,
            // optional alias identifier before the quoted path
            spec_line: Regex::new(r#"(?:(\w+)\s+)?"([^"]+)""#)?,
        })
    }
}

impl ImportParser for GoParser {
    fn extract(&self, source: &str) -> Vec<ImportRecord> {
        let mut records = Vec::new();

        for captures in self.single_import.captures_iter(source) {
            let Some(target) = captures.get(1) else { continue };
            records.push(ImportRecord::new(
                target.as_str(),
                ImportKind::Direct,
                Vec::new(),
            ));
        }

        for block in self.import_block.captures_iter(source) {
            let Some(specs) = block.get(1) else { continue };
            for captures in self.spec_line.captures_iter(specs.as_str()) {
                let Some(target) = captures.get(2) else { continue };
                match captures.get(1) {
                    Some(alias) => records.push(ImportRecord::new(
                        target.as_str(),
                        ImportKind::Aliased,
                        vec![alias.as_str().to_string()],
                    )),
                    None => records.push(ImportRecord::new(
                        target.as_str(),
                        ImportKind::Direct,
                        Vec::new(),
                    )),
                }
            }
        }

        records
    }

    fn language_name(&self) -> &str {
        "go"
    }
}
