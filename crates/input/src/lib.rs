//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Each key
//! press is one command; there is no auto-repeat layer.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, should_quit};
