//! Sequential thinking core.
//!
//! This module provides:
//! - The thought record model with validation and normalization
//! - The append-only [`ThoughtLog`] with its branch index
//! - Boxed text rendering of recorded thoughts
//! - Display sinks for the rendered output

mod log;
mod record;
mod render;
mod sink;

pub use self::log::*;
pub use record::*;
pub use render::*;
pub use sink::*;
