//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the pipeline read fragments and write the destination without
//! depending on the local disk, so write failures can be simulated in tests.

use std::path::Path;

/// Result type for file system operations
pub type FsResult<T> = std::io::Result<T>;

/// Abstract file system interface
///
/// `LocalFs` is the only production implementation; tests substitute
/// their own to simulate write failures.
pub trait FileSystem {
    /// Read file content as UTF-8
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace the file's content atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }
}

