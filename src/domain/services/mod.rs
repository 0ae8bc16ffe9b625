//! Domain Services
//!
//! Pure text transforms over fragments. No I/O.

mod aggregator;
mod stripper;

pub use aggregator::{aggregate, Aggregator};
pub use stripper::{strip_namespace, NamespaceStripper};
