//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{BundlePipeline, WatchUseCase};
use crate::config::BundleConfig;
use crate::infrastructure::{CommandFormatter, LocalFs};

/// Type alias for the concrete pipeline used by the CLI
pub type ConcretePipeline = BundlePipeline<LocalFs, CommandFormatter>;

/// Type alias for the concrete watch use case used by the CLI
pub type ConcreteWatchUseCase = WatchUseCase<LocalFs, CommandFormatter>;

/// Create a pipeline writing to the local disk and formatting with prettier
pub fn create_pipeline(config: BundleConfig) -> ConcretePipeline {
    BundlePipeline::new(config, LocalFs::new(), CommandFormatter::default())
}

/// Create a watch use case around [`create_pipeline`]
pub fn create_watch_use_case(config: BundleConfig) -> ConcreteWatchUseCase {
    WatchUseCase::new(create_pipeline(config))
}
