//! Storage layer for repodoc.
//!
//! Handles all writes under the output root:
//! - Creating `<root>/<repo-name>/` directories
//! - Writing JSON and Markdown artifacts atomically

mod fs;

pub use fs::{OutputStore, CCG_JSON, DOCS_MD, FILE_TREE_JSON, README_MD};
