//! Line-oriented symbol extraction.
//!
//! Definitions are found with two line patterns, one for functions and one
//! for classes. There is no parsing and no scoping: a method indented under
//! a class is reported exactly like a top-level function.

pub mod patterns;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{RepoDocError, Result};

/// Names defined in one file, in file order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSymbols {
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl FileSymbols {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.functions.len() + self.classes.len()
    }
}

/// Extract function and class names from source text.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn extract_symbols(content: &str) -> FileSymbols {
    let mut symbols = FileSymbols::default();

    for line in content.split(['\n', '\r']) {
        if let Some(name) = patterns::function_name(line) {
            symbols.functions.push(name.to_string());
        }
        if let Some(name) = patterns::class_name(line) {
            symbols.classes.push(name.to_string());
        }
    }

    symbols
}

/// Extract symbols from a file on disk.
///
/// Never fails: an unreadable file is logged once and yields empty lists so
/// the rest of a repository scan carries on.
pub fn extract_file_symbols(path: &Path) -> FileSymbols {
    match read_source(path) {
        Ok(content) => extract_symbols(&content),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "failed to read source file");
            FileSymbols::default()
        }
    }
}

/// Read a file as text. Invalid UTF-8 bytes are dropped.
fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| RepoDocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::count_diagnostics;
    use tempfile::tempdir;

    #[test]
    fn test_order_and_nesting() {
        let symbols = extract_symbols("def a():\n  def b():\nclass C:\n");
        assert_eq!(symbols.functions, vec!["a", "b"]);
        assert_eq!(symbols.classes, vec!["C"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let src = "class A:\n    def run(self):\n        pass\nclass B(A):\n    def run(self):\n        pass\n";
        let symbols = extract_symbols(src);
        assert_eq!(symbols.functions, vec!["run", "run"]);
        assert_eq!(symbols.classes, vec!["A", "B"]);
        assert_eq!(symbols.len(), 4);
    }

    #[test]
    fn test_crlf_lines() {
        let symbols = extract_symbols("def win():\r\n    pass\r\nclass Dos:\r\n");
        assert_eq!(symbols.functions, vec!["win"]);
        assert_eq!(symbols.classes, vec!["Dos"]);
    }

    #[test]
    fn test_bare_carriage_return_lines() {
        let symbols = extract_symbols("def a():\rdef b():\rclass Mac:\r");
        assert_eq!(symbols.functions, vec!["a", "b"]);
        assert_eq!(symbols.classes, vec!["Mac"]);
    }

    #[test]
    fn test_no_definitions() {
        let symbols = extract_symbols("import os\nprint('hello')\n");
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_file_with_invalid_utf8_still_extracts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.py");
        let mut bytes = b"# caf\xe9\ndef ok():\n    pass\n".to_vec();
        bytes.extend_from_slice(b"class K:\n");
        std::fs::write(&path, bytes).unwrap();

        let symbols = extract_file_symbols(&path);
        assert_eq!(symbols.functions, vec!["ok"]);
        assert_eq!(symbols.classes, vec!["K"]);
    }

    #[test]
    fn test_invalid_bytes_are_dropped_not_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bytes.py");
        std::fs::write(&path, b"def caf\xe9():\n    pass\n\xffclass K:\n").unwrap();

        let symbols = extract_file_symbols(&path);
        assert_eq!(symbols.functions, vec!["caf"]);
        assert_eq!(symbols.classes, vec!["K"]);
    }

    #[test]
    fn test_missing_file_yields_empty_and_one_diagnostic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.py");

        let (symbols, diagnostics) = count_diagnostics(|| extract_file_symbols(&path));
        assert!(symbols.is_empty());
        assert_eq!(diagnostics, 1);
    }

    #[test]
    fn test_readable_file_logs_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.py");
        std::fs::write(&path, "def f():\n").unwrap();

        let (symbols, diagnostics) = count_diagnostics(|| extract_file_symbols(&path));
        assert_eq!(symbols.functions, vec!["f"]);
        assert_eq!(diagnostics, 0);
    }
}
