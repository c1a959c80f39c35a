use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only view of a game for renderers.
///
/// Plain `Copy` data; refresh it every frame with `GameState::snapshot_into`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Piece,
    pub next: Piece,
    /// Landing row of the current piece; `None` when the ghost is hidden or the game is over.
    pub ghost_y: Option<i8>,
    pub ghost_enabled: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Ghost piece for drawing, if one should be shown
    pub fn ghost(&self) -> Option<Piece> {
        self.ghost_y.map(|y| self.current.with_y(y))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: Piece::new(PieceKind::I),
            next: Piece::new(PieceKind::I),
            ghost_y: None,
            ghost_enabled: true,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
            paused: false,
            game_over: false,
        }
    }
}
