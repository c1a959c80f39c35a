//! Piece module - the falling piece and its movement rules
//!
//! A piece is a shape matrix, a color and a board anchor (the matrix's top-left
//! cell). Rotation uses classic wall kicks: try in place, then shift by
//! +1, -1, +2, -2 columns, and give up after that.

use crate::board::Board;
use crate::shape::{get_shape, MinoOffsets, ShapeMatrix};
use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Horizontal offsets tried on rotation, in order
pub const KICK_OFFSETS: [i8; 5] = [0, 1, -1, 2, -2];

/// A piece on (or just above) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation, horizontally centered at row 0
    pub fn new(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            matrix: shape.matrix,
            color: shape.color,
            x: Self::spawn_x(&shape.matrix),
            y: 0,
        }
    }

    /// Spawn column for a matrix: `width / 2 - cols / 2`
    pub fn spawn_x(matrix: &ShapeMatrix) -> i8 {
        (BOARD_WIDTH / 2) as i8 - (matrix.cols() / 2) as i8
    }

    /// Occupied cells in board coordinates
    pub fn cells(&self) -> MinoOffsets {
        self.matrix
            .occupied()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Check the piece against the board validity predicate
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid(&self.matrix, self.x, self.y)
    }

    /// Copy of this piece with a different anchor row
    pub fn with_y(self, y: i8) -> Self {
        Self { y, ..self }
    }

    /// Shift by (dx, dy) if the target position is valid.
    /// Returns false and leaves the piece untouched otherwise.
    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        if !board.is_valid(&self.matrix, self.x + dx, self.y + dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate clockwise with classic wall kicks.
    ///
    /// Returns the applied horizontal kick (0 for an in-place rotation), or
    /// `None` when every candidate collides; the piece is unchanged in that case.
    pub fn try_rotate(&mut self, board: &Board) -> Option<i8> {
        let rotated = self.matrix.rotate();

        let kick = KICK_OFFSETS
            .iter()
            .copied()
            .find(|&dx| board.is_valid(&rotated, self.x + dx, self.y))?;

        self.matrix = rotated;
        self.x += kick;
        Some(kick)
    }

    /// Lowest anchor row reachable by moving straight down
    pub fn resting_y(&self, board: &Board) -> i8 {
        let mut y = self.y;
        while board.is_valid(&self.matrix, self.x, y + 1) {
            y += 1;
        }
        y
    }
}
