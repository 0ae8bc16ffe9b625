//! Fragment entities
//!
//! A fragment is one input file contributing a slice of the shared
//! namespace. Fragments live for a single run and are never cached.

use std::path::{Path, PathBuf};

/// Raw fragment as read from the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFragment {
    /// Path relative to the source root (the sort key)
    path: PathBuf,
    raw_text: String,
}

impl SourceFragment {
    pub fn new(path: impl Into<PathBuf>, raw_text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            raw_text: raw_text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Whether the namespace boilerplate was recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// Opening construct and closing brace were removed
    Stripped,
    /// Pattern did not match; the text was kept verbatim
    PassedThrough,
}

/// Fragment body with its namespace boilerplate removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedFragment {
    path: PathBuf,
    body: String,
    outcome: StripOutcome,
}

impl StrippedFragment {
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>, outcome: StripOutcome) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
            outcome,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Body text, trimmed of surrounding whitespace
    pub fn body(&self) -> &str {
        self.body.trim()
    }

    pub fn outcome(&self) -> StripOutcome {
        self.outcome
    }

    pub fn is_passed_through(&self) -> bool {
        self.outcome == StripOutcome::PassedThrough
    }
}
