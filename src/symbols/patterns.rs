//! Line patterns for definition keywords.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_FUNC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap()
});
static RE_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*class\s+([A-Za-z_][A-Za-z0-9_]*)\s*[:(]").unwrap()
});

/// Name declared by a `def name(` line.
pub fn function_name(line: &str) -> Option<&str> {
    RE_FUNC.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Name declared by a `class Name:` or `class Name(` line.
pub fn class_name(line: &str) -> Option<&str> {
    RE_CLASS.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}
