//! Domain Entities
//!
//! - `SourceFragment` / `StrippedFragment` - one input file before and after stripping
//! - `AggregatedDocument` - the consolidated namespace
//! - `BuildReport` - what a successful run produced

mod document;
mod fragment;
mod report;

pub use document::AggregatedDocument;
pub use fragment::{SourceFragment, StripOutcome, StrippedFragment};
pub use report::{BuildReport, FormatStatus};
