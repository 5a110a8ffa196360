//
//  builder.rs
//  repodoc
//

use ignore::{DirEntry, Walk, WalkBuilder};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{relative_key, FileTree, ROOT_KEY};
use crate::error::{RepoDocError, Result};

/// Fail early on roots that cannot be walked.
pub(crate) fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(RepoDocError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RepoDocError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Plain recursive walker: hidden entries included, no .gitignore handling,
/// symlinks not followed. Directories named in `prune` are never descended.
pub(crate) fn walker(root: &Path, prune: Option<&BTreeSet<String>>) -> Walk {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    if let Some(prune) = prune {
        let prune = Arc::new(prune.clone());
        builder.filter_entry(move |entry| !is_pruned(entry, &prune));
    }

    builder.build()
}

fn is_pruned(entry: &DirEntry, prune: &BTreeSet<String>) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    is_dir && prune.contains(entry.file_name().to_string_lossy().as_ref())
}

/// Whether a walk entry holds readable source. Symlinks count as files
/// unless they point at a directory; sockets, fifos and devices never do.
pub(crate) fn is_file_entry(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}

fn is_dir_symlink(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_symlink()) && entry.path().is_dir()
}

/// Build the directory -> file names map for everything under `root`,
/// pruning any directory whose name is in `ignore_dirs`.
pub fn build_file_tree(root: &Path, ignore_dirs: &BTreeSet<String>) -> Result<FileTree> {
    check_root(root)?;

    let mut tree = FileTree::new();
    let mut skipped = 0usize;

    for entry in walker(root, Some(ignore_dirs)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                skipped += 1;
                continue;
            }
        };

        if entry.depth() == 0 {
            tree.ensure_dir(ROOT_KEY);
            continue;
        }

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            tree.ensure_dir(&relative_key(root, entry.path()));
        } else if is_dir_symlink(&entry) {
            debug!(path = %entry.path().display(), "skipping directory symlink");
        } else {
            // regular files, file symlinks, sockets, fifos and devices
            let dir_key = entry
                .path()
                .parent()
                .map(|parent| relative_key(root, parent))
                .unwrap_or_else(|| ROOT_KEY.to_string());
            let name = entry.file_name().to_string_lossy().to_string();
            tree.push_file(&dir_key, name);
        }
    }

    tree.sort();
    info!(
        root = %root.display(),
        dirs = tree.dir_count(),
        files = tree.file_count(),
        skipped,
        "file tree built"
    );

    Ok(tree)
}
