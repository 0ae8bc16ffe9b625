//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod file_system;
pub mod formatter;

pub use file_system::{FileSystem, FsResult};
pub use formatter::Formatter;
