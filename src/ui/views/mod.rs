pub mod build;
pub mod event;
pub mod watch;
