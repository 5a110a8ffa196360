//! Code containment graph: relative file path -> functions and classes.
//!
//! Serialized as `ccg.json`:
//! ```text
//! { "files": { "pkg/a.py": { "functions": [...], "classes": [...] } } }
//! ```

pub mod builder;

pub use builder::{build_ccg, CcgOptions};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::symbols::FileSymbols;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeContainmentGraph {
    #[serde(default)]
    pub files: BTreeMap<String, FileSymbols>,
}

impl CodeContainmentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: String, symbols: FileSymbols) {
        self.files.insert(file, symbols);
    }

    pub fn get(&self, file: &str) -> Option<&FileSymbols> {
        self.files.get(file)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Read a `ccg.json` artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
