pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod typescript;

use anyhow::Result;
use serde::Serialize;

use crate::core::Language;

/// How an import statement binds its target, as written in the source.
/// Purely descriptive; carried through to the report unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Direct,
    From,
    Default,
    Named,
    Namespace,
    Require,
    Dynamic,
    Aliased,
    Static,
}

impl ImportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ImportKind::Direct => "direct",
            ImportKind::From => "from",
            ImportKind::Default => "default",
            ImportKind::Named => "named",
            ImportKind::Namespace => "namespace",
            ImportKind::Require => "require",
            ImportKind::Dynamic => "dynamic",
            ImportKind::Aliased => "aliased",
            ImportKind::Static => "static",
        }
    }
}

/// One import statement found in a file, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
    pub target: String,
    pub kind: ImportKind,
    pub symbols: Vec<String>,
}

impl ImportRecord {
    pub fn new(target: impl Into<String>, kind: ImportKind, symbols: Vec<String>) -> Self {
        Self {
            target: target.into(),
            kind,
            symbols,
        }
    }
}

/// Per-language import extraction. Pure over text: unreadable or binary
/// content upstream simply yields zero records.
pub trait ImportParser {
    fn extract(&self, source: &str) -> Vec<ImportRecord>;
    #[allow(dead_code)]
    fn language_name(&self) -> &str;
}

pub struct ParserFactory;

impl ParserFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_parser(&self, language: Language) -> Result<Box<dyn ImportParser + Send + Sync>> {
        match language {
            Language::Python => Ok(Box::new(python::PythonParser::new()?)),
            Language::Javascript => Ok(Box::new(javascript::JavaScriptParser::new()?)),
            Language::Typescript => Ok(Box::new(typescript::TypeScriptParser::new()?)),
            Language::Java => Ok(Box::new(java::JavaParser::new()?)),
            Language::Go => Ok(Box::new(go::GoParser::new()?)),
            Language::Unknown => anyhow::bail!("unsupported language: {}", language),
        }
    }
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}
