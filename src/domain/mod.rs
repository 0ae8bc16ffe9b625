//! Domain Layer
//!
//! Pure text transforms and data types, no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Fragments, the aggregated document and the run report
//! - `services/` - Namespace stripping and aggregation
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! I/O (reading fragments, writing the destination, running the formatter)
//! always goes through a port so the services stay testable on plain strings.

pub mod entities;
pub mod ports;
pub mod services;
