//! Watch Use Case
//!
//! Continuous rebuilds on source change. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - At most one build at a time, with a pending-rerun flag for changes
//!   that arrive mid-build
//!
//! Every rebuild is a full pipeline run; nothing is cached between runs.
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(pipeline);
//! use_case.start(running, |event| { ... });
//! ```

mod scheduler;
mod use_case;


pub use scheduler::{SchedulerState, WatchScheduler, DEBOUNCE_MS};
pub use use_case::WatchUseCase;
