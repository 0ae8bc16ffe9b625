//! Fixed build configuration
//!
//! nsbundle has no configuration file and reads no environment variables.
//! Every input the pipeline needs is a constant collected here so tests can
//! point a `BundleConfig` at a temporary directory.

use std::path::{Path, PathBuf};

/// Directory holding the fragment files
pub const SOURCE_ROOT: &str = "types";

/// The single consolidated output file
pub const DESTINATION: &str = "dist/host.d.ts";

/// Name of the shared namespace
pub const NAMESPACE: &str = "Host";

/// Interface inside the namespace that describes the global object
pub const ROOT_INTERFACE: &str = "Platform";

/// Global identifier bound to the root interface
pub const GLOBAL_IDENT: &str = "host";

/// Formatter program and the arguments preceding the destination path
pub const FORMATTER_PROGRAM: &str = "npx";
pub const FORMATTER_ARGS: &[&str] = &["prettier", "--write"];

/// Fragment files are recognised by this suffix (covers `.d.ts`)
pub const FRAGMENT_SUFFIX: &str = ".ts";

/// Everything a pipeline run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    pub source_root: PathBuf,
    pub destination: PathBuf,
    pub namespace: String,
    pub root_interface: String,
    pub global_ident: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(SOURCE_ROOT),
            destination: PathBuf::from(DESTINATION),
            namespace: NAMESPACE.to_string(),
            root_interface: ROOT_INTERFACE.to_string(),
            global_ident: GLOBAL_IDENT.to_string(),
        }
    }
}

impl BundleConfig {
    /// Resolve relative paths against `base` (normally the working directory)
    pub fn rooted_at(mut self, base: &Path) -> Self {
        if self.source_root.is_relative() {
            self.source_root = base.join(&self.source_root);
        }
        if self.destination.is_relative() {
            self.destination = base.join(&self.destination);
        }
        self
    }
}
