//! File tree: directory -> file names, the backbone of `file_tree.json`
//! and the Markdown summary.

pub mod builder;

pub use builder::build_file_tree;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Key used for the walk root.
pub const ROOT_KEY: &str = ".";

/// Mapping from relative directory path to the sorted names of the files
/// directly inside it. Keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTree {
    dirs: BTreeMap<String, Vec<String>>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory, with no files yet.
    pub fn ensure_dir(&mut self, key: &str) {
        self.dirs.entry(key.to_string()).or_default();
    }

    pub fn push_file(&mut self, dir_key: &str, name: String) {
        self.dirs.entry(dir_key.to_string()).or_default().push(name);
    }

    /// Sort every file list.
    pub fn sort(&mut self) {
        for files in self.dirs.values_mut() {
            files.sort();
        }
    }

    pub fn files(&self, dir_key: &str) -> Option<&[String]> {
        self.dirs.get(dir_key).map(Vec::as_slice)
    }

    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.dirs.iter()
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }

    pub fn file_count(&self) -> usize {
        self.dirs.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Forward-slash path of `path` relative to `root`; `"."` for the root itself.
pub(crate) fn relative_key(root: &Path, path: &Path) -> String {
    let rel = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => path,
    };
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    if parts.is_empty() {
        ROOT_KEY.to_string()
    } else {
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_key() {
        let root = PathBuf::from("/repo");
        assert_eq!(relative_key(&root, &root), ".");
        assert_eq!(relative_key(&root, &root.join("a").join("b.py")), "a/b.py");
    }

    #[test]
    fn test_json_round_trip() {
        let mut tree = FileTree::new();
        tree.ensure_dir(".");
        tree.push_file(".", "setup.py".to_string());
        tree.push_file("pkg", "b.py".to_string());
        tree.push_file("pkg", "a.py".to_string());
        tree.ensure_dir("pkg/empty");
        tree.sort();

        let json = serde_json::to_string_pretty(&tree).unwrap();
        assert!(json.contains("\"pkg/empty\": []"));
        let back: FileTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
        assert_eq!(back.files("pkg").unwrap(), &["a.py".to_string(), "b.py".to_string()]);
    }

    #[test]
    fn test_counts() {
        let mut tree = FileTree::new();
        tree.push_file(".", "a".to_string());
        tree.push_file("x", "b".to_string());
        tree.push_file("x", "c".to_string());
        assert_eq!(tree.dir_count(), 2);
        assert_eq!(tree.file_count(), 3);
    }
}
