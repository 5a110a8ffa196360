//! Repository cloning.
//!
//! One [`RepoCloner`] interface with two implementations: the `git`
//! executable and (with the `libgit2` feature) libgit2. The implementation is
//! chosen once, from configuration, by [`select_cloner`].

mod git_cli;
#[cfg(feature = "libgit2")]
mod libgit2;

pub use git_cli::GitCliCloner;
#[cfg(feature = "libgit2")]
pub use libgit2::LibGit2Cloner;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{CloneBackend, CloneConfig};
use crate::error::{RepoDocError, Result};

/// Name of the directory a clone lands in, under `<output>/<repo-name>/`.
pub const CLONE_DIR: &str = "repo";

/// Clones a remote repository into a local directory.
pub trait RepoCloner {
    /// Short backend name, for logs.
    fn name(&self) -> &'static str;

    /// Clone `url` into `dest`, which does not exist yet.
    fn fetch_into(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Pick the clone implementation for this run.
pub fn select_cloner(config: &CloneConfig) -> Result<Box<dyn RepoCloner>> {
    match config.backend {
        CloneBackend::GitCli => Ok(Box::new(GitCliCloner::new(&config.git_program))),
        CloneBackend::Libgit2 => libgit2_cloner(),
        CloneBackend::Auto => {
            if let Ok(cloner) = libgit2_cloner() {
                return Ok(cloner);
            }
            let cli = GitCliCloner::new(&config.git_program);
            if cli.is_available() {
                Ok(Box::new(cli))
            } else {
                Err(RepoDocError::Clone(format!(
                    "no clone backend available: `{}` is not runnable and libgit2 support is not compiled in",
                    config.git_program
                )))
            }
        }
    }
}

#[cfg(feature = "libgit2")]
fn libgit2_cloner() -> Result<Box<dyn RepoCloner>> {
    Ok(Box::new(LibGit2Cloner))
}

#[cfg(not(feature = "libgit2"))]
fn libgit2_cloner() -> Result<Box<dyn RepoCloner>> {
    Err(RepoDocError::Config(
        "clone.backend = \"libgit2\" requires building with the `libgit2` feature".into(),
    ))
}

/// Repository name from a clone URL: last path segment without `.git`.
pub fn repo_name_from_url(url: &str) -> String {
    let last = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        CLONE_DIR.to_string()
    } else {
        name.to_string()
    }
}

/// Clone `url` into `<output_root>/<repo-name>/repo`, replacing any previous
/// clone. Returns the clone directory.
///
/// A failed clone leaves no destination directory behind.
pub fn clone_repo(url: &str, output_root: &Path, cloner: &dyn RepoCloner) -> Result<PathBuf> {
    let dest = output_root.join(repo_name_from_url(url)).join(CLONE_DIR);

    if dest.exists() {
        info!(dest = %dest.display(), "removing existing clone");
        fs::remove_dir_all(&dest)?;
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    info!(url, dest = %dest.display(), backend = cloner.name(), "cloning");
    if let Err(e) = cloner.fetch_into(url, &dest) {
        if dest.exists() {
            if let Err(cleanup) = fs::remove_dir_all(&dest) {
                warn!(dest = %dest.display(), error = %cleanup, "failed to remove partial clone");
            }
        }
        return Err(e);
    }

    Ok(dest)
}
