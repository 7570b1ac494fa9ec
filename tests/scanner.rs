use depmap::core::{FileScanner, Language};
use std::fs;

#[test]
fn scan_auto_picks_up_known_extensions_sorted() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("b.js"), "").unwrap();
    fs::write(dir.path().join("a.py"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let files = FileScanner::new().scan(dir.path(), None, -1);

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].relative_path, "a.py");
    assert_eq!(files[0].language, Language::Python);
    assert_eq!(files[1].relative_path, "b.js");
    assert_eq!(files[1].language, Language::Javascript);
}

#[test]
fn scan_with_language_filter_excludes_other_extensions() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "").unwrap();
    fs::write(dir.path().join("b.js"), "").unwrap();

    let files = FileScanner::new().scan(dir.path(), Some(Language::Python), -1);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path, "a.py");
}

#[test]
fn scan_respects_depth_limit() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("top.py"), "").unwrap();
    fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
    fs::write(dir.path().join("sub/nested.py"), "").unwrap();
    fs::write(dir.path().join("sub/deeper/deep.py"), "").unwrap();

    let shallow = FileScanner::new().scan(dir.path(), None, 1);
    assert_eq!(shallow.len(), 1);
    assert_eq!(shallow[0].relative_path, "top.py");

    let mid = FileScanner::new().scan(dir.path(), None, 2);
    assert_eq!(mid.len(), 2);

    let unlimited = FileScanner::new().scan(dir.path(), None, -1);
    assert_eq!(unlimited.len(), 3);
}

#[test]
fn scan_file_root_returns_the_file_itself() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("single.py");
    fs::write(&file, "import os").unwrap();

    let files = FileScanner::new().scan(&file, None, 3);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path, "single.py");
    assert_eq!(files[0].language, Language::Python);
}

#[test]
fn scan_file_root_with_explicit_filter_overrides_detection() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("script.py");
    fs::write(&file, "").unwrap();

    let files = FileScanner::new().scan(&file, Some(Language::Go), 3);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].language, Language::Go);
}

#[test]
fn nested_relative_paths_use_forward_slashes() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg/mod.py"), "").unwrap();

    let files = FileScanner::new().scan(dir.path(), None, -1);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path, "pkg/mod.py");
}
