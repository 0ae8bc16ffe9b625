//! BuildReport - result of one successful pipeline run

use std::path::PathBuf;

/// Outcome of the best-effort formatting step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatStatus {
    Formatted,
    /// Formatter failed; the unformatted artifact was kept
    Failed(String),
}

impl FormatStatus {
    pub fn is_formatted(&self) -> bool {
        matches!(self, FormatStatus::Formatted)
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of fragments aggregated
    pub fragments: usize,
    /// Fragments copied verbatim because their boilerplate did not match
    pub passed_through: Vec<PathBuf>,
    pub destination: PathBuf,
    pub bytes_written: usize,
    pub formatted: FormatStatus,
}

impl BuildReport {
    pub fn is_formatted(&self) -> bool {
        self.formatted.is_formatted()
    }
}
