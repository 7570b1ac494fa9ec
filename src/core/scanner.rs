use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::Language;

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    /// Path relative to the scan root with `/` separators; doubles as the
    /// node id of the file in the dependency graph.
    pub relative_path: String,
    pub language: Language,
}

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Collect source files under `root`. A file root is returned as-is
    /// (taking the explicit language filter over extension detection); a
    /// directory is walked up to `depth` components below the root, -1
    /// meaning unlimited. Results are sorted by relative path so repeated
    /// scans of an unchanged tree produce identical reports.
    pub fn scan(&self, root: &Path, language: Option<Language>, depth: i64) -> Vec<FileInfo> {
        if root.is_file() {
            let detected = language.unwrap_or_else(|| Language::from_path(root));
            let relative = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            return vec![FileInfo {
                path: root.to_path_buf(),
                relative_path: relative,
                language: detected,
            }];
        }

        if !root.is_dir() {
            return Vec::new();
        }

        let mut walker = WalkDir::new(root).follow_links(false);
        if depth >= 0 {
            walker = walker.max_depth(depth as usize);
        }

        let entries: Vec<_> = walker
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.path().is_file())
            .collect();

        let mut files: Vec<FileInfo> = entries
            .par_iter()
            .filter_map(|entry| {
                let path = entry.path();
                let detected = Language::from_path(path);
                if detected == Language::Unknown {
                    return None;
                }
                if let Some(filter) = language {
                    if detected != filter {
                        return None;
                    }
                }
                let relative = path
                    .strip_prefix(root)
                    .ok()?
                    .to_string_lossy()
                    .replace('\\', "/");
                Some(FileInfo {
                    path: path.to_path_buf(),
                    relative_path: relative,
                    language: detected,
                })
            })
            .collect();

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        files
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}
