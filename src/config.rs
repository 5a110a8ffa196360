//
//  config.rs
//  repodoc
//

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{RepoDocError, Result};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "repodoc.toml";

/// Top-level repodoc configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RepoDocConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub analyze: AnalyzeConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub diagram: DiagramConfig,
    #[serde(default)]
    pub clone: CloneConfig,
}

/// Where artifacts are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output root; each repository gets `<root>/<repo-name>/`.
    #[serde(default = "default_output_root")]
    pub root: PathBuf,
}

/// File tree traversal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Directory names pruned during traversal.
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: BTreeSet<String>,
}

/// Symbol extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeConfig {
    /// File name suffix selecting source files.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Apply `scan.ignore_dirs` to the symbol walk as well.
    #[serde(default)]
    pub prune_ignored: bool,
}

/// Markdown summary settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocsConfig {
    /// How many README lines go into docs.md.
    #[serde(default = "default_readme_lines")]
    pub readme_lines: usize,
}

/// Diagram rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramConfig {
    /// Graphviz output format (`png`, `svg`, ...). `dot` writes the source.
    #[serde(default = "default_format")]
    pub format: String,
    /// Graphviz layout program.
    #[serde(default = "default_program")]
    pub program: String,
}

/// Which clone implementation to use.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CloneBackend {
    /// libgit2 when compiled in, otherwise the `git` executable.
    #[default]
    Auto,
    GitCli,
    Libgit2,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloneConfig {
    #[serde(default)]
    pub backend: CloneBackend,
    #[serde(default = "default_git_program")]
    pub git_program: String,
}

fn default_output_root() -> PathBuf {
    PathBuf::from("outputs")
}

/// Directory names skipped by the tree builder unless configured otherwise.
pub fn default_ignore_dirs() -> BTreeSet<String> {
    [".git", "__pycache__", "node_modules", "venv", ".venv"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_suffix() -> String {
    ".py".to_string()
}

fn default_readme_lines() -> usize {
    40
}

fn default_format() -> String {
    "png".to_string()
}

fn default_program() -> String {
    "dot".to_string()
}

fn default_git_program() -> String {
    "git".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: default_ignore_dirs(),
        }
    }
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            prune_ignored: false,
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            readme_lines: default_readme_lines(),
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            program: default_program(),
        }
    }
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            backend: CloneBackend::default(),
            git_program: default_git_program(),
        }
    }
}

impl RepoDocConfig {
    /// Load config from a TOML file. A missing file yields the defaults,
    /// a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config: Self = toml::from_str(&contents)
            .map_err(|e| RepoDocError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.analyze.suffix.is_empty() {
            return Err(RepoDocError::Config("analyze.suffix must not be empty".into()));
        }
        if self.diagram.format.trim().is_empty() {
            return Err(RepoDocError::Config("diagram.format must not be empty".into()));
        }
        Ok(())
    }
}
