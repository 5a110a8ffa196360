//
//  backend.rs
//  repodoc
//

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::{RepoDocError, Result};

/// Something that turns DOT source into an output file.
pub trait RenderBackend {
    /// Write `dot` rendered as `format` to `output`. The caller owns
    /// `output` and removes it if this returns an error.
    fn render(&self, dot: &str, format: &str, output: &Path) -> Result<()>;
}

/// Renders through a Graphviz layout program (`dot` by default).
#[derive(Debug, Clone)]
pub struct GraphvizBackend {
    program: String,
}

impl GraphvizBackend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GraphvizBackend {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl RenderBackend for GraphvizBackend {
    fn render(&self, dot: &str, format: &str, output: &Path) -> Result<()> {
        debug!(program = %self.program, format, output = %output.display(), "invoking graphviz");

        let mut child = Command::new(&self.program)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RepoDocError::Render(format!("failed to start {}: {}", self.program, e)))?;

        // Dropping stdin closes the pipe so the program sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(dot.as_bytes()),
            None => Ok(()),
        };

        let result = child
            .wait_with_output()
            .map_err(|e| RepoDocError::Render(format!("{} did not finish: {}", self.program, e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(RepoDocError::Render(format!(
                "{} exited with {}: {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }
        written.map_err(|e| RepoDocError::Render(format!("writing to {}: {}", self.program, e)))?;

        if !output.exists() {
            return Err(RepoDocError::Render(format!(
                "{} produced no output",
                self.program
            )));
        }
        Ok(())
    }
}

/// Writes the DOT source as-is. Used for the `dot`/`gv` formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotSourceBackend;

impl RenderBackend for DotSourceBackend {
    fn render(&self, dot: &str, _format: &str, output: &Path) -> Result<()> {
        fs::write(output, dot).map_err(|e| RepoDocError::Render(e.to_string()))
    }
}

/// Pick the backend for an output format.
pub fn backend_for(format: &str, program: &str) -> Box<dyn RenderBackend> {
    match format {
        "dot" | "gv" => Box::new(DotSourceBackend),
        _ => Box::new(GraphvizBackend::new(program)),
    }
}
