//! Bundle pipeline
//!
//! One full rebuild, strictly in order:
//!
//! 1. Read every fragment under the source root (FragmentReader)
//! 2. Strip namespace boilerplate (NamespaceStripper)
//! 3. Aggregate into one document (Aggregator)
//! 4. Atomically overwrite the destination (FileSystem::write)
//! 5. Run the formatter on it, best effort (Formatter)
//!
//! All fragments are read before anything is written, so a fatal error in
//! steps 1-4 leaves the previous artifact exactly as it was.

use std::path::PathBuf;

use crate::config::BundleConfig;
use crate::domain::entities::{BuildReport, FormatStatus};
use crate::domain::ports::{FileSystem, Formatter};
use crate::domain::services::{Aggregator, NamespaceStripper};
use crate::error::{BundleError, BundleResult};
use crate::infrastructure::fs::FragmentReader;

use super::event::BuildEvent;

/// Destination text plus what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub fragments: usize,
    pub passed_through: Vec<PathBuf>,
}

/// Runs the read → strip → aggregate → write → format sequence
#[derive(Debug, Clone)]
pub struct BundlePipeline<F: FileSystem, T: Formatter> {
    config: BundleConfig,
    fs: F,
    formatter: T,
}

impl<F: FileSystem, T: Formatter> BundlePipeline<F, T> {
    pub fn new(config: BundleConfig, fs: F, formatter: T) -> Self {
        Self {
            config,
            fs,
            formatter,
        }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Build the destination text without writing anything
    pub fn render(&self) -> BundleResult<Rendered> {
        let reader = FragmentReader::new(&self.fs, &self.config.source_root)
            .excluding(&self.config.destination);
        let fragments = reader.read_all()?;

        let stripped = NamespaceStripper::new().strip_all(&fragments);
        let passed_through = stripped
            .iter()
            .filter(|f| f.is_passed_through())
            .map(|f| f.path().to_path_buf())
            .collect();

        let text = Aggregator::from_config(&self.config)
            .aggregate(&stripped)
            .render();
        Ok(Rendered {
            text,
            fragments: fragments.len(),
            passed_through,
        })
    }

    /// Run the pipeline once
    ///
    /// Pass-through fragments and formatter failures are reported through
    /// `on_event`; neither fails the run.
    pub fn run(&self, on_event: &impl Fn(BuildEvent)) -> BundleResult<BuildReport> {
        let Rendered {
            text,
            fragments,
            passed_through,
        } = self.render()?;
        for path in &passed_through {
            on_event(BuildEvent::PassedThrough {
                path: path.display().to_string(),
            });
        }

        let destination = self.config.destination.clone();
        self.fs
            .write(&destination, &text)
            .map_err(|source| BundleError::OutputWrite {
                path: destination.clone(),
                source,
            })?;

        let formatted = match self.formatter.format(&destination) {
            Ok(()) => FormatStatus::Formatted,
            Err(e) => {
                on_event(BuildEvent::FormatFailed {
                    formatter: self.formatter.name().to_string(),
                    message: e.to_string(),
                });
                FormatStatus::Failed(e.to_string())
            }
        };

        Ok(BuildReport {
            fragments,
            passed_through,
            destination,
            bytes_written: text.len(),
            formatted,
        })
    }

    /// Run once, bracketed by `BuildStarted` and `BuildComplete` / `Error`
    pub fn execute(&self, on_event: &impl Fn(BuildEvent)) -> BundleResult<BuildReport> {
        on_event(BuildEvent::BuildStarted);
        match self.run(on_event) {
            Ok(report) => {
                on_event(BuildEvent::complete(&report));
                Ok(report)
            }
            Err(e) => {
                on_event(BuildEvent::Error {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
