use anyhow::Result;

use super::javascript::EcmaImportPatterns;
use super::{ImportParser, ImportRecord};

/// TypeScript uses the same module syntax as JavaScript, so the parser is a
/// thin wrapper over the shared ECMAScript pattern set.
pub struct TypeScriptParser {
    patterns: EcmaImportPatterns,
}

impl TypeScriptParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: EcmaImportPatterns::new()?,
        })
    }
}

impl ImportParser for TypeScriptParser {
    fn extract(&self, source: &str) -> Vec<ImportRecord> {
        self.patterns.extract(source)
    }

    fn language_name(&self) -> &str {
        "typescript"
    }
}
