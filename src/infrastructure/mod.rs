//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and fragment enumeration
//! - `formatter/` - External formatter invocation

pub mod formatter;
pub mod fs;

// Re-export for convenience
pub use formatter::{CommandFormatter, NoopFormatter};
pub use fs::{FragmentReader, LocalFs};
