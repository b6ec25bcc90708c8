//! Terminal input module (engine-facing).
//!
//! Maps raw key identifiers and `crossterm` key events to
//! [`crate::types::GameAction`]. Matching is case-insensitive.

pub mod map;

pub use blocktris_types as types;

pub use map::{handle_key_event, map_key_name, should_quit};
