//! Placement checks for shapes on the board.

use crate::board::Board;
use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` fits with its origin at board column `x`, row `y`.
///
/// A cell outside the columns or below the floor rejects the placement.
/// Cells above the board (negative rows) only need a valid column; they are
/// never checked against occupancy, which lets pieces spawn partly hidden.
pub fn can_place(shape: &Shape, board: &Board, x: i8, y: i8) -> bool {
    shape.cells().all(|(dx, dy)| {
        let bx = x as i16 + dx as i16;
        let by = y as i16 + dy as i16;

        if bx < 0 || bx >= BOARD_WIDTH as i16 || by >= BOARD_HEIGHT as i16 {
            return false;
        }
        by < 0 || !board.is_occupied(bx as i8, by as i8)
    })
}
