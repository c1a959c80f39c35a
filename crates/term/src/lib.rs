//! Terminal frontend for the game.
//!
//! Renders [`core::GameSnapshot`]s into a framebuffer and flushes it to the
//! terminal. Holds no game rules; everything it shows comes from the snapshot.
//!
//! - Board cells are drawn 2 columns wide to keep blocks roughly square
//! - `GameView` is pure and unit-testable
//! - `TerminalRenderer` owns the crossterm side (raw mode, diff redraw)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
