//! Formatter Implementations
//!
//! - `CommandFormatter` - runs an external tool (prettier by default)
//! - `NoopFormatter` - leaves the file alone

mod command;

pub use command::{CommandFormatter, NoopFormatter};
