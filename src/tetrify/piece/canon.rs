use itertools::Itertools;

use crate::tetrify::prelude::*;

/// A 4x4 orientation bitmap packed into a u16, bit `row * 4 + col`.
///
/// The bounding box of the cells is centered into the window, so two shapes
/// describe the same orientation iff their grids are bit-equal. Equivalent
/// orientations of symmetric pieces (both ends of an I, every turn of an O)
/// collapse onto a single grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeGrid(u16);

impl ShapeGrid {
    /// Canonicalizes a cell set into the 4x4 window. The internal anchor
    /// leans on the bounding-box center: column 1 when the box leans right
    /// or is balanced, column 2 otherwise, and likewise for rows.
    pub fn from_cells(cells: &[Offset; 4]) -> ShapeGrid {
        let (min_x, max_x) = cells.iter().map(|c| c.dx).minmax().into_option().unwrap();
        let (min_y, max_y) = cells.iter().map(|c| c.dy).minmax().into_option().unwrap();
        let anchor_x = if min_x + max_x >= 0 { 1 } else { 2 };
        let anchor_y = if min_y + max_y >= 0 { 1 } else { 2 };

        let mut bits: u16 = 0;
        for cell in cells {
            let col = (anchor_x + cell.dx).rem_euclid(4);
            let row = (anchor_y + cell.dy).rem_euclid(4);
            bits |= 1 << (row * 4 + col);
        }
        ShapeGrid(bits)
    }
}

impl Shape {
    /// The canonical 4x4 grid for this orientation.
    pub fn grid(&self) -> ShapeGrid {
        ShapeGrid::from_cells(&self.cells())
    }

    /// Every distinct orientation of this shape, starting from this one.
    /// Rotates left at most four times, stopping at the first repeated grid.
    pub fn orientations(&self) -> Vec<Shape> {
        let mut seen: Vec<ShapeGrid> = Vec::with_capacity(4);
        let mut out: Vec<Shape> = Vec::with_capacity(4);
        let mut shape = *self;
        for _ in 0..4 {
            let grid = shape.grid();
            if seen.contains(&grid) {
                break;
            }
            seen.push(grid);
            out.push(shape);
            shape = shape.rotated_left();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::tetrify::prelude::*;

    #[test_case(Piece::T, 4)]
    #[test_case(Piece::J, 4)]
    #[test_case(Piece::L, 4)]
    #[test_case(Piece::Z, 2)]
    #[test_case(Piece::S, 2)]
    #[test_case(Piece::I, 2)]
    #[test_case(Piece::O, 1)]
    fn orientation_counts(kind: Piece, expected: usize) {
        assert_eq!(Shape::canonical(kind).orientations().len(), expected);
    }

    #[test]
    fn four_left_rotations_are_identity() {
        for kind in Piece::all() {
            let shape = Shape::canonical(kind);
            let spun = shape.rotated_left().rotated_left().rotated_left().rotated_left();
            assert_eq!(spun.cells(), shape.cells());
            assert_eq!(spun.grid(), shape.grid());
        }
    }

    #[test]
    fn left_then_right_is_identity() {
        for kind in Piece::all() {
            let shape = Shape::canonical(kind);
            assert_eq!(shape.rotated_left().rotated_right().cells(), shape.cells());
            assert_eq!(shape.rotated_right().rotated_left().cells(), shape.cells());
        }
    }

    #[test]
    fn every_o_rotation_shares_a_grid() {
        let o = Shape::canonical(Piece::O);
        let mut spun = o;
        for _ in 0..4 {
            spun = spun.rotated_left();
            assert_eq!(spun.grid(), o.grid());
        }
    }

    #[test]
    fn distinct_orientations_have_distinct_grids() {
        for kind in Piece::all() {
            let mut grids = std::collections::HashSet::new();
            let mut shape = Shape::canonical(kind);
            for _ in 0..4 {
                grids.insert(shape.grid());
                shape = shape.rotated_left();
            }
            assert_eq!(grids.len(), Shape::canonical(kind).orientations().len());
        }
    }
}
