//! Clockwise rotation of shape grids.
//!
//! Rotation happens in place within the 4x4 bounding grid, about its centre.
//! There are no wall kicks: the session simply discards a rotation that does
//! not fit.

use crate::pieces::Shape;
use crate::types::SHAPE_SIZE;

/// Rotate a shape 90° clockwise.
///
/// For an input of height H, output cell (row = x, col = H - 1 - y) takes the
/// value of input cell (row = y, col = x).
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let src = shape.rows();
    let h = shape.height();
    let mut out = [[false; SHAPE_SIZE]; SHAPE_SIZE];

    for (y, row) in src.iter().enumerate() {
        for (x, &filled) in row.iter().enumerate() {
            out[x][h - 1 - y] = filled;
        }
    }

    Shape::from_rows(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_of;
    use crate::types::PieceKind;

    #[test]
    fn horizontal_i_becomes_vertical_in_column_two() {
        let rotated = rotate_clockwise(&shape_of(PieceKind::I));
        let cells: Vec<_> = rotated.cells().collect();
        assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn t_points_right_after_one_turn() {
        // T spawns pointing up; a clockwise turn points it right.
        let rotated = rotate_clockwise(&shape_of(PieceKind::T));
        let cells: Vec<_> = rotated.cells().collect();
        assert_eq!(cells, vec![(2, 0), (2, 1), (3, 1), (2, 2)]);
    }

    #[test]
    fn o_moves_within_the_grid_but_keeps_its_footprint() {
        let o = shape_of(PieceKind::O);
        // The 2x2 block sits in the centre, so rotation is a no-op.
        assert_eq!(rotate_clockwise(&o), o);
    }

    #[test]
    fn rotation_does_not_mutate_input() {
        let l = shape_of(PieceKind::L);
        let copy = l;
        let _ = rotate_clockwise(&l);
        assert_eq!(l, copy);
    }
}
