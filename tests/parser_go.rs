use depmap::parsers::go::GoParser;
use depmap::parsers::{ImportKind, ImportParser};

#[test]
fn single_import() {
    let parser = GoParser::new().unwrap();
    let records = parser.extract("import \"fmt\"\n");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].target, "fmt");
    assert_eq!(records[0].kind, ImportKind::Direct);
    assert!(records[0].symbols.is_empty());
}

#[test]
fn import_block_yields_one_record_per_spec() {
    let parser = GoParser::new().unwrap();
    let code = r#"
import (
    "fmt"
    "net/http"
)
"#;
    let records = parser.extract(code);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].target, "fmt");
    assert_eq!(records[1].target, "net/http");
}

#[test]
fn aliased_import_in_block() {
    let parser = GoParser::new().unwrap();
    let code = r#"
import (
    mylog "github.com/user/logger"
)
"#;
    let records = parser.extract(code);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].target, "github.com/user/logger");
    assert_eq!(records[0].kind, ImportKind::Aliased);
    assert_eq!(records[0].symbols, vec!["mylog"]);
}
