//! Clone through libgit2.

use std::path::Path;

use super::RepoCloner;
use crate::error::{RepoDocError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct LibGit2Cloner;

impl RepoCloner for LibGit2Cloner {
    fn name(&self) -> &'static str {
        "libgit2"
    }

    fn fetch_into(&self, url: &str, dest: &Path) -> Result<()> {
        git2::Repository::clone(url, dest)
            .map(|_| ())
            .map_err(|e| RepoDocError::Clone(e.message().to_string()))
    }
}
