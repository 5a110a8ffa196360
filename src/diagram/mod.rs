//! Containment diagram: CCG -> RenderGraph -> DOT -> image.

pub mod backend;
pub mod dot;
pub mod graph;

pub use backend::{backend_for, DotSourceBackend, GraphvizBackend, RenderBackend};
pub use dot::to_dot;
pub use graph::{NodeKind, RenderGraph, RenderNode};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::ccg::CodeContainmentGraph;
use crate::error::{RepoDocError, Result};

/// Render `ccg` to `output` through `backend`.
///
/// The backend writes a hidden sibling file which is renamed over `output`
/// only on success, so either a complete image exists or nothing new does.
pub fn render_diagram(
    ccg: &CodeContainmentGraph,
    output: &Path,
    format: &str,
    backend: &dyn RenderBackend,
) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            RepoDocError::Render(format!("cannot create {}: {}", parent.display(), e))
        })?;
    }

    let graph = RenderGraph::from_ccg(ccg);
    let source = to_dot(&graph);
    let partial = partial_path(output);

    if let Err(e) = backend.render(&source, format, &partial) {
        discard(&partial);
        return Err(e);
    }

    if let Err(e) = fs::rename(&partial, output) {
        discard(&partial);
        return Err(RepoDocError::Render(format!(
            "cannot move image to {}: {}",
            output.display(),
            e
        )));
    }

    info!(
        output = %output.display(),
        format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "diagram rendered"
    );
    Ok(())
}

/// Load a `ccg.json` and render it.
pub fn render_ccg_file(
    ccg_path: &Path,
    output: &Path,
    format: &str,
    backend: &dyn RenderBackend,
) -> Result<()> {
    let ccg = CodeContainmentGraph::load(ccg_path)?;
    render_diagram(&ccg, output, format, backend)
}

fn partial_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "diagram".to_string());
    output.with_file_name(format!(".{name}.partial"))
}

fn discard(path: &Path) {
    if path.exists() {
        if let Err(e) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %e, "failed to remove partial render");
        }
    }
}
