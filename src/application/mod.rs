//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain text transforms (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BundlePipeline` - One full run: read, strip, aggregate, write, format
//! - `WatchUseCase` - Re-runs the pipeline when the source tree changes

mod event;
pub mod pipeline;
pub mod watch;

pub use event::BuildEvent;
pub use pipeline::BundlePipeline;
pub use watch::{SchedulerState, WatchScheduler, WatchUseCase, DEBOUNCE_MS};
