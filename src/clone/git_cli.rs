//! Clone through the `git` executable.

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use super::RepoCloner;
use crate::error::{RepoDocError, Result};

#[derive(Debug, Clone)]
pub struct GitCliCloner {
    program: String,
}

impl GitCliCloner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check that the program runs at all (`git --version`).
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Default for GitCliCloner {
    fn default() -> Self {
        Self::new("git")
    }
}

impl RepoCloner for GitCliCloner {
    fn name(&self) -> &'static str {
        "git-cli"
    }

    fn fetch_into(&self, url: &str, dest: &Path) -> Result<()> {
        debug!(program = %self.program, url, dest = %dest.display(), "running git clone");

        let output = Command::new(&self.program)
            .arg("clone")
            .arg("--")
            .arg(url)
            .arg(dest)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RepoDocError::Clone(format!("failed to run {}: {}", self.program, e)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(RepoDocError::Clone(stderr.trim().to_string()))
        }
    }
}
