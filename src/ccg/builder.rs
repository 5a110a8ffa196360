//
//  builder.rs
//  repodoc
//

use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

use super::CodeContainmentGraph;
use crate::error::Result;
use crate::symbols::extract_file_symbols;
use crate::tree::builder::{check_root, is_file_entry, walker};
use crate::tree::relative_key;

/// Which files the symbol walk picks up.
#[derive(Debug, Clone, Copy)]
pub struct CcgOptions<'a> {
    /// File name suffix, e.g. `.py`.
    pub suffix: &'a str,
    /// Directories to prune. `None` walks the whole tree.
    pub prune: Option<&'a BTreeSet<String>>,
}

impl Default for CcgOptions<'static> {
    fn default() -> Self {
        Self {
            suffix: ".py",
            prune: None,
        }
    }
}

/// Run the extractor over every matching file under `root`.
///
/// Unreadable files show up with empty lists; they never abort the scan.
pub fn build_ccg(root: &Path, options: CcgOptions<'_>) -> Result<CodeContainmentGraph> {
    check_root(root)?;

    if options.prune.is_none() {
        debug!(root = %root.display(), "symbol walk covers ignored directories too");
    }

    let mut ccg = CodeContainmentGraph::new();

    for entry in walker(root, options.prune) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !is_file_entry(&entry) {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(options.suffix) {
            continue;
        }

        let symbols = extract_file_symbols(entry.path());
        ccg.insert(relative_key(root, entry.path()), symbols);
    }

    info!(root = %root.display(), files = ccg.len(), "code containment graph built");
    Ok(ccg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_ignore_dirs;
    use std::fs;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_suffix_filter() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("a.py"), "def a1():\nclass A:\ndef a2():\n");
        write(&dir.path().join("b.py"), "class B(A):\n    def b1(self):\n");
        write(&dir.path().join("readme.md"), "def not_code():\n");

        let ccg = build_ccg(dir.path(), CcgOptions::default()).unwrap();
        let keys: Vec<&String> = ccg.files.keys().collect();
        assert_eq!(keys, vec!["a.py", "b.py"]);

        let a = ccg.get("a.py").unwrap();
        assert_eq!(a.functions, vec!["a1", "a2"]);
        assert_eq!(a.classes, vec!["A"]);
        let b = ccg.get("b.py").unwrap();
        assert_eq!(b.functions, vec!["b1"]);
        assert_eq!(b.classes, vec!["B"]);
        assert!(ccg.get("readme.md").is_none());
    }

    #[test]
    fn test_nested_keys_use_forward_slashes() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("pkg/sub/mod.py"), "def f():\n");

        let ccg = build_ccg(dir.path(), CcgOptions::default()).unwrap();
        assert!(ccg.get("pkg/sub/mod.py").is_some());
    }

    #[test]
    fn test_unpruned_walk_includes_ignored_dirs() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("venv/lib/site.py"), "def site():\n");
        write(&dir.path().join("app.py"), "def app():\n");

        let ccg = build_ccg(dir.path(), CcgOptions::default()).unwrap();
        assert!(ccg.get("venv/lib/site.py").is_some());
        assert!(ccg.get("app.py").is_some());
    }

    #[test]
    fn test_pruned_walk_skips_ignored_dirs() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("venv/lib/site.py"), "def site():\n");
        write(&dir.path().join("app.py"), "def app():\n");

        let ignore = default_ignore_dirs();
        let options = CcgOptions {
            suffix: ".py",
            prune: Some(&ignore),
        };
        let ccg = build_ccg(dir.path(), options).unwrap();
        assert_eq!(ccg.len(), 1);
        assert!(ccg.get("app.py").is_some());
    }

    #[test]
    fn test_custom_suffix() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("tool.pyw"), "def gui():\n");
        write(&dir.path().join("lib.py"), "def lib():\n");

        let options = CcgOptions {
            suffix: ".pyw",
            prune: None,
        };
        let ccg = build_ccg(dir.path(), options).unwrap();
        assert_eq!(ccg.files.keys().collect::<Vec<_>>(), vec!["tool.pyw"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_with_suffix_not_read() {
        let dir = tempdir().unwrap();
        let _listener = std::os::unix::net::UnixListener::bind(dir.path().join("daemon.py")).unwrap();
        write(&dir.path().join("app.py"), "def app():\n");

        let ccg = build_ccg(dir.path(), CcgOptions::default()).unwrap();
        assert!(ccg.get("daemon.py").is_none());
        assert_eq!(ccg.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_recorded_empty() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked.py");
        write(&locked, "def hidden():\n");
        write(&dir.path().join("open.py"), "def visible():\n");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores file permissions; only assert when the lock holds
        if fs::read(&locked).is_ok() {
            return;
        }

        let ccg = build_ccg(dir.path(), CcgOptions::default()).unwrap();
        assert!(ccg.get("locked.py").unwrap().is_empty());
        assert_eq!(ccg.get("open.py").unwrap().functions, vec!["visible"]);
    }
}
