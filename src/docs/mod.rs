//! Markdown summary: README preview plus the file tree listing.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::tree::FileTree;

/// README names tried in order.
const README_CANDIDATES: &[&str] = &["README.md", "README.MD", "readme.md", "Readme.md"];

/// Find and read the repository README.
///
/// Text that is not valid UTF-8 is decoded as Latin-1. Returns `None` when
/// there is no README or it cannot be read.
pub fn read_readme(root: &Path) -> Option<String> {
    let path = README_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())?;

    match fs::read(&path) {
        Ok(bytes) => {
            debug!(readme = %path.display(), "found README");
            Some(decode_text(bytes))
        }
        Err(e) => {
            warn!(readme = %path.display(), error = %e, "failed to read README");
            None
        }
    }
}

fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// Build `docs.md`.
pub fn render_markdown(
    repo_name: &str,
    readme: Option<&str>,
    tree: &FileTree,
    readme_lines: usize,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Project documentation for `{}`\n", repo_name));

    if let Some(readme) = readme.filter(|r| !r.is_empty()) {
        lines.push(format!("## README (first {} lines)\n", readme_lines));
        lines.extend(readme.lines().take(readme_lines).map(str::to_string));
        lines.push("\n---\n".to_string());
    }

    lines.push("## File tree (summary)\n".to_string());
    for (dir, files) in tree.iter() {
        lines.push(format!("**{}**", dir));
        let mut files = files.clone();
        files.sort();
        lines.extend(files.into_iter().map(|f| format!("- {}", f)));
    }

    lines.join("\n")
}
