//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Action`]s. The caller
//! owns the event loop and applies actions to its settings snapshot.

pub mod map;

pub use ascii_cast_types as types;

pub use map::{map_key, should_quit};
