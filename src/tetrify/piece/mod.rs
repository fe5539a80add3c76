pub mod canon;

use crate::tetrify::prelude::*;

pub use canon::ShapeGrid;

/// An oriented tetromino: a kind plus four cell offsets around an anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: Piece,
    cells: [Offset; 4],
}

impl Shape {
    /// Constructs the catalog orientation of the given kind.
    pub fn canonical(kind: Piece) -> Shape {
        Shape { kind, cells: Shape::_catalog_template(kind) }
    }

    /// Gets the base shape corresponding to the piece kind as a set of offsets on an anchor point.
    fn _catalog_template(kind: Piece) -> [Offset; 4] {
        match kind {
            Piece::T => [
                Offset { dx: 0, dy: 0 },
                Offset { dx: -1, dy: 0 },
                Offset { dx: 1, dy: 0 },
                Offset { dx: 0, dy: -1 },
            ],
            Piece::J => [
                Offset { dx: 0, dy: 0 },
                Offset { dx: -1, dy: 0 },
                Offset { dx: 0, dy: -1 },
                Offset { dx: 0, dy: -2 },
            ],
            Piece::L => [
                Offset { dx: 0, dy: 0 },
                Offset { dx: 1, dy: 0 },
                Offset { dx: 0, dy: -1 },
                Offset { dx: 0, dy: -2 },
            ],
            Piece::Z => [
                Offset { dx: 0, dy: 0 },
                Offset { dx: -1, dy: 0 },
                Offset { dx: 0, dy: -1 },
                Offset { dx: 1, dy: -1 },
            ],
            Piece::S => [
                Offset { dx: 0, dy: 0 },
                Offset { dx: -1, dy: -1 },
                Offset { dx: 0, dy: -1 },
                Offset { dx: 1, dy: 0 },
            ],
            Piece::I => [
                Offset { dx: 0, dy: 0 },
                Offset { dx: 0, dy: -1 },
                Offset { dx: 0, dy: -2 },
                Offset { dx: 0, dy: -3 },
            ],
            Piece::O => [
                Offset { dx: 0, dy: 0 },
                Offset { dx: 0, dy: -1 },
                Offset { dx: -1, dy: 0 },
                Offset { dx: -1, dy: -1 },
            ],
        }
    }

    /// The cell offsets of this orientation.
    pub fn cells(&self) -> [Offset; 4] {
        self.cells
    }

    /// The shape rotated one quarter-turn to the left.
    pub fn rotated_left(&self) -> Shape {
        Shape {
            kind: self.kind,
            cells: self.cells.map(|Offset { dx, dy }| Offset { dx: -dy, dy: dx }),
        }
    }

    /// The shape rotated one quarter-turn to the right; the exact inverse of
    /// [`Shape::rotated_left`].
    pub fn rotated_right(&self) -> Shape {
        Shape {
            kind: self.kind,
            cells: self.cells.map(|Offset { dx, dy }| Offset { dx: dy, dy: -dx }),
        }
    }

    /// The lowest anchor row that keeps every cell of the shape at or below
    /// the top of the board. Spawning uses it directly.
    pub fn spawn_row(&self) -> i32 {
        -self.cells.iter().map(|c| c.dy).min().unwrap_or(0)
    }

    /// Gets the real board positions of the shape placed at the anchor.
    pub fn real_cells(&self, anchor: Anchor) -> [Anchor; 4] {
        self.cells.map(|c| anchor + c)
    }
}

impl Piece {
    /// Resolves four offsets to the catalog kind they form, regardless of
    /// orientation, by matching canonical grids across rotations.
    pub fn identify(cells: &[Offset; 4]) -> Option<Piece> {
        let probe = ShapeGrid::from_cells(cells);
        Piece::all().into_iter().find(|&kind| {
            Shape::canonical(kind)
                .orientations()
                .iter()
                .any(|shape| shape.grid() == probe)
        })
    }
}
