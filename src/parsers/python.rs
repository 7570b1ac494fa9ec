use anyhow::Result;
use regex::Regex;
use tree_sitter::{Node as TSNode, Parser};

use super::{ImportKind, ImportParser, ImportRecord};

/// Structured extraction could not produce a usable syntax tree; the caller
/// falls back to pattern extraction instead of failing the file.
struct Unparsable;

/// Python import extraction. Primary strategy parses the file with
/// tree-sitter and walks `import`/`from ... import` nodes; files that do
/// not parse cleanly fall back to a fixed pattern set so one malformed file
/// never aborts the scan.
pub struct PythonParser {
    import_pattern: Regex,
    from_pattern: Regex,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            import_pattern: Regex::new(r"(?m)^import[ \t]+([\w., \t]+)")?,
            from_pattern: Regex::new(r"(?m)^from[ \t]+([\w.]+)[ \t]+import[ \t]+([\w*, \t]+)")?,
        })
    }

    fn extract_structured(&self, source: &str) -> std::result::Result<Vec<ImportRecord>, Unparsable> {
        let mut parser = Parser::new();
        parser
            .set_language(tree_sitter_python::language())
            .map_err(|_| Unparsable)?;
        let tree = parser.parse(source, None).ok_or(Unparsable)?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(Unparsable);
        }

        let mut records = Vec::new();
        collect_imports(&root, source.as_bytes(), &mut records);
        Ok(records)
    }

    fn extract_patterns(&self, source: &str) -> Vec<ImportRecord> {
        let mut records = Vec::new();

        for captures in self.import_pattern.captures_iter(source) {
            let Some(modules) = captures.get(1) else { continue };
            for module in modules.as_str().split(',') {
                let module = module.trim();
                if module.is_empty() {
                    continue;
                }
                let root = module.split('.').next().unwrap_or(module);
                records.push(ImportRecord::new(
                    root,
                    ImportKind::Direct,
                    vec![module.to_string()],
                ));
            }
        }

        for captures in self.from_pattern.captures_iter(source) {
            let (Some(module), Some(names)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            let symbols: Vec<String> = names
                .as_str()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            records.push(ImportRecord::new(
                module.as_str(),
                ImportKind::From,
                symbols,
            ));
        }

        records
    }
}

impl ImportParser for PythonParser {
    fn extract(&self, source: &str) -> Vec<ImportRecord> {
        match self.extract_structured(source) {
            Ok(records) => records,
            Err(Unparsable) => self.extract_patterns(source),
        }
    }

    fn language_name(&self) -> &str {
        "python"
    }
}

fn node_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

/// Walk the whole tree so nested imports (inside functions, try blocks)
/// are recorded too, in document order.
fn collect_imports(node: &TSNode, source: &[u8], records: &mut Vec<ImportRecord>) {
    match node.kind() {
        "import_statement" => process_import(node, source, records),
        "import_from_statement" => process_import_from(node, source, records),
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_imports(&child, source, records);
    }
}

/// `import a.b, c as d` - one record per imported name, the bound alias (or
/// the module itself) as the symbol.
fn process_import(node: &TSNode, source: &[u8], records: &mut Vec<ImportRecord>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "dotted_name" => {
                let module = node_text(&child, source);
                records.push(ImportRecord::new(
                    module,
                    ImportKind::Direct,
                    vec![module.to_string()],
                ));
            }
            "aliased_import" => {
                let module = child
                    .child_by_field_name("name")
                    .map(|n| node_text(&n, source))
                    .unwrap_or("");
                let alias = child
                    .child_by_field_name("alias")
                    .map(|n| node_text(&n, source))
                    .unwrap_or(module);
                if !module.is_empty() {
                    records.push(ImportRecord::new(
                        module,
                        ImportKind::Direct,
                        vec![alias.to_string()],
                    ));
                }
            }
            _ => {}
        }
    }
}

/// `from x import a, b as c` - one record carrying the original (pre-alias)
/// symbol names; a wildcard import binds `*`.
fn process_import_from(node: &TSNode, source: &[u8], records: &mut Vec<ImportRecord>) {
    let module = node
        .child_by_field_name("module_name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();
    if module.is_empty() {
        return;
    }

    let mut symbols = Vec::new();
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        match name.kind() {
            "dotted_name" => symbols.push(node_text(&name, source).to_string()),
            "aliased_import" => {
                if let Some(original) = name.child_by_field_name("name") {
                    symbols.push(node_text(&original, source).to_string());
                }
            }
            _ => {}
        }
    }

    if symbols.is_empty() {
        let mut cursor = node.walk();
        if node
            .children(&mut cursor)
            .any(|c| c.kind() == "wildcard_import")
        {
            symbols.push("*".to_string());
        }
    }

    records.push(ImportRecord::new(module, ImportKind::From, symbols));
}
