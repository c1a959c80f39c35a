//! Classic Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `classic_tetris::{core,input,term,types}`.
//! The game rules live in `core`; `input` and `term` are the terminal frontend.

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
