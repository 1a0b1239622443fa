//! Pieces module - tetromino shapes as fixed 4x4 grids
//!
//! Every shape is normalized to the same square bounding grid, so rotation
//! never resizes anything and four clockwise turns give back the original.
//! Grid coordinates are (column, row) from the top-left corner.

use crate::types::{PieceKind, SHAPE_SIZE};

/// Offset of a single occupied cell relative to the shape origin
pub type MinoOffset = (i8, i8);

/// A 4x4 boolean grid of occupied cells. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Row-major: `rows[row][col]`
    rows: [[bool; SHAPE_SIZE]; SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from row-major cells.
    pub const fn from_rows(rows: [[bool; SHAPE_SIZE]; SHAPE_SIZE]) -> Self {
        Self { rows }
    }

    /// Build a shape from the (column, row) offsets of its occupied cells.
    ///
    /// Offsets outside the grid are ignored.
    pub fn from_offsets(offsets: &[MinoOffset]) -> Self {
        let mut rows = [[false; SHAPE_SIZE]; SHAPE_SIZE];
        for &(dx, dy) in offsets {
            if (0..SHAPE_SIZE as i8).contains(&dx) && (0..SHAPE_SIZE as i8).contains(&dy) {
                rows[dy as usize][dx as usize] = true;
            }
        }
        Self { rows }
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        SHAPE_SIZE
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        SHAPE_SIZE
    }

    /// Whether the cell at (col, row) is occupied. Out-of-grid cells are empty.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        row < SHAPE_SIZE && col < SHAPE_SIZE && self.rows[row][col]
    }

    pub fn rows(&self) -> &[[bool; SHAPE_SIZE]; SHAPE_SIZE] {
        &self.rows
    }

    /// Occupied cells as (dx, dy) offsets, scanned row by row.
    pub fn cells(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(dx, _)| (dx as i8, dy as i8))
        })
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&filled| filled).count()
    }
}

const X: bool = true;
const O: bool = false;

const I_SHAPE: Shape = Shape::from_rows([
    [O, O, O, O],
    [X, X, X, X],
    [O, O, O, O],
    [O, O, O, O],
]);

const J_SHAPE: Shape = Shape::from_rows([
    [X, O, O, O],
    [X, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
]);

const L_SHAPE: Shape = Shape::from_rows([
    [O, O, X, O],
    [X, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
]);

const O_SHAPE: Shape = Shape::from_rows([
    [O, O, O, O],
    [O, X, X, O],
    [O, X, X, O],
    [O, O, O, O],
]);

const S_SHAPE: Shape = Shape::from_rows([
    [O, X, X, O],
    [X, X, O, O],
    [O, O, O, O],
    [O, O, O, O],
]);

const T_SHAPE: Shape = Shape::from_rows([
    [O, X, O, O],
    [X, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
]);

const Z_SHAPE: Shape = Shape::from_rows([
    [X, X, O, O],
    [O, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
]);

/// Get the spawn shape for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
