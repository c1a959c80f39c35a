//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run behind any frontend (terminal, GUI, headless)
//! - **Allocation-free**: Boards, matrices and snapshots are fixed-size values
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with the validity predicate, locking and line clearing
//! - [`shape`]: the seven tetromino matrices and the 90° rotation
//! - [`piece`]: the falling piece, translation and classic wall kicks
//! - [`rng`]: seeded uniform piece generation
//! - [`scoring`]: line-clear points, leveling and gravity speed
//! - [`game_state`]: the engine tying it all together
//! - [`snapshot`]: read-only state for renderers
//!
//! # Game Rules
//!
//! Classic rules:
//!
//! - **Uniform randomizer**: every piece is an independent draw over the seven shapes
//! - **Classic kicks**: a blocked rotation retries 1 and 2 columns right/left, nothing more
//! - **Instant lock**: a piece locks as soon as it cannot fall further
//! - **Ghost piece**: shows where the current piece will land (toggleable)
//! - **Scoring**: 100/300/500/800 for 1-4 lines, times the level
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::GameState;
//! use classic_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.board().cells().iter().filter(|c| c.is_some()).count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity moves the piece one row each time the
//! accumulated time exceeds the level's fall interval.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameConfig, GameState};
pub use piece::{Piece, KICK_OFFSETS};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score, fall_interval_ms, fall_interval_secs};
pub use shape::{get_shape, rotate, Shape, ShapeMatrix, SHAPES};
pub use snapshot::GameSnapshot;
