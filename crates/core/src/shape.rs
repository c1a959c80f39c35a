//! Shape module - tetromino matrices and the 90° rotation transform
//!
//! Shapes are stored as small fixed-size boolean matrices (at most 4x4) with an
//! explicit row/column count, so rotation never allocates.
//! Offsets handed out to callers are `(dx, dy)`: column first, then row.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind};

/// Largest matrix side used by any shape
pub const MAX_DIM: usize = 4;

/// Offset of a single occupied cell relative to the matrix origin (dx, dy)
pub type MinoOffset = (i8, i8);

/// Occupied cells of a matrix, in row-major order
pub type MinoOffsets = ArrayVec<MinoOffset, { MAX_DIM * MAX_DIM }>;

/// A `rows x cols` occupancy matrix, `rows, cols <= 4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_DIM]; MAX_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 flags
    pub const fn from_rows<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_DIM && C > 0 && C <= MAX_DIM);

        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether cell (row, col) is occupied; false outside the matrix
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as `(dx, dy)` offsets
    pub fn occupied(&self) -> MinoOffsets {
        let mut out = ArrayVec::new();
        for row in 0..self.rows as usize {
            for col in 0..self.cols as usize {
                if self.cells[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise.
    ///
    /// An R x C matrix becomes C x R with `out[c][R-1-r] = self[r][c]`
    /// (reverse the row order, then transpose).
    pub fn rotate(&self) -> Self {
        let r_len = self.rows as usize;
        let c_len = self.cols as usize;
        let mut cells = [[false; MAX_DIM]; MAX_DIM];

        for r in 0..r_len {
            for c in 0..c_len {
                cells[c][r_len - 1 - r] = self.cells[r][c];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Free-function form of [`ShapeMatrix::rotate`]
pub fn rotate(matrix: &ShapeMatrix) -> ShapeMatrix {
    matrix.rotate()
}

/// A catalogue entry: spawn matrix plus its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    pub color: Color,
    pub matrix: ShapeMatrix,
}

/// The seven shapes in spawn orientation
pub const SHAPES: [Shape; 7] = [
    Shape {
        kind: PieceKind::I,
        color: PieceKind::I.color(),
        matrix: ShapeMatrix::from_rows([[1, 1, 1, 1]]),
    },
    Shape {
        kind: PieceKind::T,
        color: PieceKind::T.color(),
        matrix: ShapeMatrix::from_rows([[1, 1, 1], [0, 1, 0]]),
    },
    Shape {
        kind: PieceKind::Z,
        color: PieceKind::Z.color(),
        matrix: ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1]]),
    },
    Shape {
        kind: PieceKind::S,
        color: PieceKind::S.color(),
        matrix: ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0]]),
    },
    Shape {
        kind: PieceKind::O,
        color: PieceKind::O.color(),
        matrix: ShapeMatrix::from_rows([[1, 1], [1, 1]]),
    },
    Shape {
        kind: PieceKind::L,
        color: PieceKind::L.color(),
        matrix: ShapeMatrix::from_rows([[1, 1, 1], [1, 0, 0]]),
    },
    Shape {
        kind: PieceKind::J,
        color: PieceKind::J.color(),
        matrix: ShapeMatrix::from_rows([[1, 1, 1], [0, 0, 1]]),
    },
];

/// Look up the catalogue entry for a kind
pub fn get_shape(kind: PieceKind) -> &'static Shape {
    let idx = match kind {
        PieceKind::I => 0,
        PieceKind::T => 1,
        PieceKind::Z => 2,
        PieceKind::S => 3,
        PieceKind::O => 4,
        PieceKind::L => 5,
        PieceKind::J => 6,
    };
    &SHAPES[idx]
}
