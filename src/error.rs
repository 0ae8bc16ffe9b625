//! Error types for nsbundle
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundle operations
pub type BundleResult<T> = Result<T, BundleError>;

/// Fatal errors that abort a pipeline run
///
/// None of these leave a partially written destination behind: reads finish
/// before anything is written, and writes are atomic.
#[derive(Error, Debug)]
pub enum BundleError {
    /// Source root does not exist or is not a directory
    #[error("source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Directory traversal failed below the source root
    #[error("failed to walk source directory {root}: {message}")]
    SourceWalk { root: PathBuf, message: String },

    /// A fragment could not be read (I/O error or invalid UTF-8)
    #[error("failed to read fragment {path}: {source}")]
    FragmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination could not be written
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file watcher could not be set up
    #[error("watcher error: {0}")]
    Watch(String),
}

impl From<notify::Error> for BundleError {
    fn from(err: notify::Error) -> Self {
        BundleError::Watch(err.to_string())
    }
}

/// Non-fatal formatter failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The formatter program could not be started
    #[error("could not run '{program}': {message}")]
    Spawn { program: String, message: String },

    /// The formatter ran but reported failure
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Misuse of the watch scheduler's state machine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// A run was started while another was still in progress
    #[error("a build is already running")]
    AlreadyRunning,
}
