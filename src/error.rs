//! Error types for repodoc.

use std::path::PathBuf;

/// Everything that can go wrong while documenting a repository.
#[derive(Debug, thiserror::Error)]
pub enum RepoDocError {
    /// A required command argument was not supplied.
    #[error("Provide --{0}")]
    MissingArgument(&'static str),

    /// A candidate source file could not be read. Recovered inside the extractor.
    #[error("Error reading {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Clone failed: {0}")]
    Clone(String),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepoDocError>;
