//! External formatter invocation
//!
//! Runs `<program> <args...> <destination>` and waits for it. No timeout is
//! imposed; by the time the formatter runs the artifact is already written.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::{FORMATTER_ARGS, FORMATTER_PROGRAM};
use crate::domain::ports::Formatter;
use crate::error::FormatError;

/// Formatter backed by an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl Default for CommandFormatter {
    fn default() -> Self {
        Self::new(FORMATTER_PROGRAM, FORMATTER_ARGS.iter().copied())
    }
}

impl CommandFormatter {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Formatter for CommandFormatter {
    fn name(&self) -> &str {
        &self.program
    }

    fn format(&self, path: &Path) -> Result<(), FormatError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| FormatError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Formatter that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn name(&self) -> &str {
        "noop"
    }

    fn format(&self, _path: &Path) -> Result<(), FormatError> {
        Ok(())
    }
}
