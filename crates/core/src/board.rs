//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or permanently
//! occupied by a merged piece. Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one [`Board::clear_full_lines`] pass, in scan order.
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(true)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&c| c))
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Occupy every cell of a row. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(true);
    }

    /// Commit a shape's occupied cells at origin (x, y).
    ///
    /// Placement must already have been validated with
    /// [`can_place`](crate::collision::can_place). Cells mapped above the
    /// board (negative rows) are dropped, so a piece locked while partially
    /// above the visible area keeps only its visible part.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        for (dx, dy) in shape.cells() {
            let bx = x + dx;
            let by = y + dy;
            if by < 0 || by >= BOARD_HEIGHT as i8 {
                continue;
            }
            debug_assert!(
                (0..BOARD_WIDTH as i8).contains(&bx),
                "merge at unvalidated column {bx}"
            );
            if let Some(idx) = Self::index(bx, by) {
                self.cells[idx] = true;
            }
        }
    }

    /// Clear full rows in one top-to-bottom pass and return their indices.
    ///
    /// Each full row is removed by shifting every row above it down by one
    /// and emptying row 0. The scan moves on to the next row right after a
    /// shift and never looks back at the row it just refilled.
    pub fn clear_full_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y as u8);
            }
        }
        cleared
    }

    /// Remove row `y`, shift rows above it down and empty the top row.
    fn clear_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(false);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Copy into a 2D grid (snapshot format)
    pub fn to_grid(&self) -> [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in grid.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
