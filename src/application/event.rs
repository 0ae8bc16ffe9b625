//! Build event types for NDJSON and terminal output

use serde::Serialize;

use crate::domain::entities::BuildReport;

/// Events emitted while building or watching
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildEvent {
    WatchStarted {
        source: String,
        destination: String,
    },
    FileChanged {
        path: String,
    },
    BuildStarted,
    /// A fragment's boilerplate did not match; it was copied verbatim
    PassedThrough {
        path: String,
    },
    /// Formatting failed; the unformatted artifact was kept
    FormatFailed {
        formatter: String,
        message: String,
    },
    BuildComplete {
        fragments: usize,
        passed_through: usize,
        bytes: usize,
        formatted: bool,
        destination: String,
    },
    Error {
        message: String,
    },
    /// Changes arrived during a build; another build will follow
    RerunQueued,
    Shutdown,
}

impl BuildEvent {
    pub fn complete(report: &BuildReport) -> Self {
        BuildEvent::BuildComplete {
            fragments: report.fragments,
            passed_through: report.passed_through.len(),
            bytes: report.bytes_written,
            formatted: report.is_formatted(),
            destination: report.destination.display().to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
