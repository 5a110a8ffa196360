//! # repodoc
//!
//! Documentation helper for source repositories.
//!
//! repodoc walks a repository, pulls a coarse list of function and class names
//! out of its source files with line patterns, and writes the results as
//! artifacts:
//!
//! - **file_tree.json**: directory -> sorted file names, ignore-dirs pruned
//! - **ccg.json**: the code containment graph, file -> functions / classes
//! - **docs.md**: README preview and file tree listing
//! - **diagrams**: file -> class / function containment, rendered by Graphviz
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repodoc::{RepoDoc, RepoDocConfig};
//! use std::path::Path;
//!
//! let docs = RepoDoc::new(RepoDocConfig::default());
//!
//! // outputs/<parent-name>/file_tree.json
//! let tree_json = docs.map(Path::new("outputs/widgets/repo")).unwrap();
//!
//! // outputs/<parent-name>/ccg.json
//! let ccg_json = docs.analyze(Path::new("outputs/widgets/repo")).unwrap();
//! ```

pub mod ccg;
pub mod cli;
pub mod clone;
pub mod config;
pub mod diagram;
pub mod docs;
pub mod error;
pub mod storage;
pub mod symbols;
pub mod tree;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use ccg::{build_ccg, CcgOptions, CodeContainmentGraph};
pub use clone::{clone_repo, repo_name_from_url, select_cloner, RepoCloner};
pub use config::RepoDocConfig;
pub use diagram::{render_diagram, RenderGraph};
pub use error::{RepoDocError, Result};
pub use storage::OutputStore;
pub use symbols::{extract_file_symbols, extract_symbols, FileSymbols};
pub use tree::{build_file_tree, FileTree};

use std::path::{Component, Path, PathBuf};
use tracing::info;

use crate::clone::CLONE_DIR;
use crate::storage::{CCG_JSON, DOCS_MD, FILE_TREE_JSON, README_MD};

/// Artifact directory name for a local repository root: the name of the
/// root's parent directory, so `outputs/widgets/repo` maps to `widgets`.
///
/// The path is made absolute lexically; symlinked parents keep their own name.
pub fn repo_name_for_root(root: &Path) -> String {
    absolute_lexical(root)
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| CLONE_DIR.to_string())
}

/// Join onto the working directory and fold `.`/`..` without touching the
/// filesystem.
fn absolute_lexical(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normal = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normal.pop();
            }
            other => normal.push(other.as_os_str()),
        }
    }
    normal
}

/// What a clone run produced.
#[derive(Debug, Clone)]
pub struct CloneReport {
    pub repo_dir: PathBuf,
    pub file_tree: PathBuf,
    pub readme: Option<PathBuf>,
}

/// The main repodoc instance.
///
/// One method per command; each writes its artifacts under the configured
/// output root and returns where they went.
pub struct RepoDoc {
    config: RepoDocConfig,
    store: OutputStore,
}

impl RepoDoc {
    pub fn new(config: RepoDocConfig) -> Self {
        let store = OutputStore::new(config.output.root.clone());
        Self { config, store }
    }

    pub fn config(&self) -> &RepoDocConfig {
        &self.config
    }

    pub fn store(&self) -> &OutputStore {
        &self.store
    }

    /// Build the FileTree for `root` with the configured ignore-set.
    pub fn file_tree(&self, root: &Path) -> Result<FileTree> {
        build_file_tree(root, &self.config.scan.ignore_dirs)
    }

    /// Build the CCG for `root` with the configured suffix.
    pub fn code_graph(&self, root: &Path) -> Result<CodeContainmentGraph> {
        let options = CcgOptions {
            suffix: &self.config.analyze.suffix,
            prune: self
                .config
                .analyze
                .prune_ignored
                .then_some(&self.config.scan.ignore_dirs),
        };
        build_ccg(root, options)
    }

    /// Clone with the backend chosen by configuration, then map.
    pub fn clone_repository(&self, url: &str) -> Result<CloneReport> {
        let cloner = select_cloner(&self.config.clone)?;
        self.clone_with(url, cloner.as_ref())
    }

    /// Clone `url` into `<root>/<name>/repo`, then write `file_tree.json`
    /// and, when there is a README, `readme.md`.
    pub fn clone_with(&self, url: &str, cloner: &dyn RepoCloner) -> Result<CloneReport> {
        let repo_dir = clone_repo(url, self.store.root(), cloner)?;
        let repo_name = repo_name_from_url(url);

        let tree = self.file_tree(&repo_dir)?;
        let file_tree = self.store.write_json(&repo_name, FILE_TREE_JSON, &tree)?;

        let readme = match docs::read_readme(&repo_dir) {
            Some(text) if !text.is_empty() => {
                Some(self.store.write_text(&repo_name, README_MD, &text)?)
            }
            _ => None,
        };

        info!(repo = %repo_name, dir = %self.store.repo_dir(&repo_name).display(), "clone and map complete");
        Ok(CloneReport {
            repo_dir,
            file_tree,
            readme,
        })
    }

    /// Write `file_tree.json` for a local directory.
    pub fn map(&self, root: &Path) -> Result<PathBuf> {
        let tree = self.file_tree(root)?;
        self.store
            .write_json(&repo_name_for_root(root), FILE_TREE_JSON, &tree)
    }

    /// Write `docs.md` for a local directory.
    pub fn generate_docs(&self, root: &Path) -> Result<PathBuf> {
        let tree = self.file_tree(root)?;
        let readme = docs::read_readme(root);
        let repo_name = repo_name_for_root(root);

        let markdown = docs::render_markdown(
            &repo_name,
            readme.as_deref(),
            &tree,
            self.config.docs.readme_lines,
        );
        self.store.write_text(&repo_name, DOCS_MD, &markdown)
    }

    /// Write `ccg.json` for a local directory.
    pub fn analyze(&self, root: &Path) -> Result<PathBuf> {
        let ccg = self.code_graph(root)?;
        self.store.write_json(&repo_name_for_root(root), CCG_JSON, &ccg)
    }

    /// Render a `ccg.json` to `output`. `format` overrides the configured one.
    pub fn diagram(&self, ccg_path: &Path, output: &Path, format: Option<&str>) -> Result<()> {
        let format = format.unwrap_or(self.config.diagram.format.as_str());
        let backend = diagram::backend_for(format, &self.config.diagram.program);
        diagram::render_ccg_file(ccg_path, output, format, backend.as_ref())
    }
}
