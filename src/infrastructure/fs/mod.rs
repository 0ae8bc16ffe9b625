//! File System Implementations
//!
//! `LocalFs` implements the FileSystem port; `FragmentReader` enumerates the
//! source tree on top of it.

mod local;
mod reader;

pub use local::LocalFs;
pub use reader::{is_fragment_path, FragmentReader};
