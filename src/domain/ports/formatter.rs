//! Formatter port - best-effort post-processing of the destination file

use std::path::Path;

use crate::error::FormatError;

/// Rewrites a file in place to normalise its formatting
///
/// Failures are reported to the caller, which keeps the unformatted file.
pub trait Formatter {
    /// Short name used in events
    fn name(&self) -> &str;

    /// Format `path` in place
    fn format(&self, path: &Path) -> Result<(), FormatError>;
}
