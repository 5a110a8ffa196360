//! File system operations for the output tree.

use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// Artifact file names inside `<root>/<repo-name>/`.
pub const FILE_TREE_JSON: &str = "file_tree.json";
pub const CCG_JSON: &str = "ccg.json";
pub const DOCS_MD: &str = "docs.md";
pub const README_MD: &str = "readme.md";

/// Storage layer for generated artifacts.
///
/// Layout:
/// ```text
/// outputs/
/// └── <repo-name>/
///     ├── repo/             # clone target
///     ├── file_tree.json
///     ├── ccg.json
///     ├── docs.md
///     └── readme.md
/// ```
#[derive(Debug, Clone)]
pub struct OutputStore {
    root: PathBuf,
}

impl OutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one repository's artifacts.
    pub fn repo_dir(&self, repo_name: &str) -> PathBuf {
        self.root.join(repo_name)
    }

    /// Write a value as pretty-printed JSON.
    pub fn write_json<T: Serialize>(&self, repo_name: &str, file: &str, value: &T) -> Result<PathBuf> {
        let content = serde_json::to_string_pretty(value)?;
        self.write_text(repo_name, file, &content)
    }

    /// Write a text artifact.
    pub fn write_text(&self, repo_name: &str, file: &str, content: &str) -> Result<PathBuf> {
        let dir = self.repo_dir(repo_name);
        fs::create_dir_all(&dir)?;

        let path = dir.join(file);
        write_atomic(&path, content.as_bytes())?;
        debug!(path = %path.display(), bytes = content.len(), "artifact written");
        Ok(path)
    }
}

/// Write to a temp file next to `path`, then rename over it.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);
    let result = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&temp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn test_write_json_pretty_and_unicode() {
        let dir = tempdir().unwrap();
        let store = OutputStore::new(dir.path().join("outputs"));

        let mut value = BTreeMap::new();
        value.insert("ünï", vec!["çødé.py"]);
        let path = store.write_json("demo", FILE_TREE_JSON, &value).unwrap();

        assert_eq!(path, dir.path().join("outputs/demo/file_tree.json"));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"ünï\": [\n"));
        assert!(text.contains("çødé.py"));
    }

    #[test]
    fn test_overwrite_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let store = OutputStore::new(dir.path());

        store.write_text("demo", DOCS_MD, "first").unwrap();
        let path = store.write_text("demo", DOCS_MD, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let names: Vec<_> = fs::read_dir(store.repo_dir("demo"))
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["docs.md"]);
    }
}
