//! nsbundle - namespace declaration bundler
//!
//! Gathers fragment files that each contribute a slice of one shared
//! namespace, strips their repeated `namespace X { ... }` wrapper, and writes
//! a single consolidated declaration file which is then run through an
//! external formatter. A watch mode rebuilds on every source change.
//!
//! The transform is textual: declarations are never parsed, cross-fragment
//! references are not resolved and duplicate names are not detected.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildEvent, BundlePipeline, WatchScheduler, WatchUseCase};
pub use config::BundleConfig;
pub use domain::entities::{
    AggregatedDocument, BuildReport, FormatStatus, SourceFragment, StripOutcome, StrippedFragment,
};
pub use domain::services::{aggregate, strip_namespace, Aggregator, NamespaceStripper};
pub use error::{BundleError, BundleResult, FormatError};
pub use infrastructure::{CommandFormatter, FragmentReader, LocalFs, NoopFormatter};
