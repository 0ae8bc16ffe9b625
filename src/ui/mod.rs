//! Terminal output for the CLI
//!
//! - `theme` - Colors and icons
//! - `primitives` - Icons with ASCII fallback
//! - `blocks` - Reusable output blocks
//! - `views` - Per-command rendering of build events

pub mod blocks;
pub mod context;
pub mod primitives;
pub mod theme;
pub mod views;
