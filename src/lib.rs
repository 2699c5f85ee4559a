//! ASCII Cast (workspace facade crate).
//!
//! Re-exports the member crates as `ascii_cast::{core,input,term,types}` so
//! the binary, benches and integration tests share one import path.

pub use ascii_cast_core as core;
pub use ascii_cast_input as input;
pub use ascii_cast_term as term;
pub use ascii_cast_types as types;
