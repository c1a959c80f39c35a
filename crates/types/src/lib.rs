//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Classic playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn**: horizontally centered at row 0
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the reference loop (~60 FPS) |
//! | `BASE_FALL_MS` | 500 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level |
//! | `FALL_FLOOR_MS` | 50 | Fastest gravity interval |
//!
//! # Fall Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 450ms |
//! | 3 | 400ms |
//! | ... | ... |
//! | 10+ | 50ms |
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//! assert_eq!(piece.color(), Color::Purple);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame interval of the reference game loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (500ms per row)
pub const BASE_FALL_MS: u32 = 500;

/// Gravity speed-up per level
pub const FALL_STEP_MS: u32 = 50;

/// Gravity never gets faster than this
pub const FALL_FLOOR_MS: u32 = 50;

/// Level a fresh session starts at
pub const START_LEVEL: u32 = 1;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table
///
/// Base points for clearing N lines at level 1:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Opaque color identifier carried by pieces and locked cells.
///
/// The core never interprets colors; renderers map them through [`Color::rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Purple,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    /// Reference RGB value for this color
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 255, 255),
            Color::Purple => (128, 0, 128),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Yellow => (255, 255, 0),
            Color::Orange => (255, 165, 0),
            Color::Blue => (0, 0, 255),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the clear (0 when no lines cleared)
    pub score_delta: u32,
    pub level_up: bool,
    /// The following piece could not spawn
    pub game_over: bool,
}

/// The seven tetromino shapes
///
/// Each shape has a fixed color:
/// - **I**: Cyan, horizontal bar
/// - **T**: Purple, T-shaped
/// - **Z**: Red
/// - **S**: Green (mirror of Z)
/// - **O**: Yellow, 2x2 square
/// - **L**: Orange
/// - **J**: Blue (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    Z,
    S,
    O,
    L,
    J,
}

impl PieceKind {
    /// All kinds in catalogue order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Color identifier associated with this shape
    pub const fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
            PieceKind::S => Color::Green,
            PieceKind::O => Color::Yellow,
            PieceKind::L => Color::Orange,
            PieceKind::J => Color::Blue,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }
}

/// Commands the frontend forwards to the game
///
/// Movement, rotation and drops are ignored while paused or after game over.
/// `TogglePause` and `Restart` are always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise with classic wall kicks
    Rotate,
    /// Drop piece to its resting position and lock it
    HardDrop,
    /// Pause or resume gravity and movement
    TogglePause,
    /// Show or hide the ghost piece
    ToggleGhost,
    /// Discard the session and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("toggleghost"), Some(GameAction::ToggleGhost));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "togglepause" => Some(GameAction::TogglePause),
            "toggleghost" => Some(GameAction::ToggleGhost),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::TogglePause => "togglePause",
            GameAction::ToggleGhost => "toggleGhost",
            GameAction::Restart => "restart",
        }
    }

    /// Whether the action is accepted while paused or after game over
    pub fn always_active(&self) -> bool {
        matches!(self, GameAction::TogglePause | GameAction::Restart)
    }
}
