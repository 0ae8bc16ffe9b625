//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command definitions
//! - `factory` - Wires the pipeline to the local file system and formatter

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::{create_pipeline, create_watch_use_case};
