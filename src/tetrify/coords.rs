use std::ops::Add;

/// Integer board position. `x` is the column and `y` the row; `y` grows
/// downward, so falling is `y + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

/// Relative cell offset within a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

/// Offsets that turn a position into one of its orthogonal neighbours.
pub static ORTHOGONAL_OFFSETS: [Offset; 4] = [
    Offset { dx: -1, dy: 0 },
    Offset { dx: 0, dy: -1 },
    Offset { dx: 0, dy: 1 },
    Offset { dx: 1, dy: 0 },
];

impl Anchor {
    /// Constructs a new anchor.
    pub fn new(x: i32, y: i32) -> Anchor {
        Anchor { x, y }
    }

    /// The position one row down; where the anchor lands after a fall step.
    pub fn below(&self) -> Anchor {
        Anchor { x: self.x, y: self.y + 1 }
    }
}

impl Offset {
    /// Constructs a new offset.
    pub fn new(dx: i32, dy: i32) -> Offset {
        Offset { dx, dy }
    }
}

impl Add<Offset> for Anchor {
    type Output = Anchor;
    fn add(self, rhs: Offset) -> Self::Output {
        Anchor { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

impl Add<&Offset> for &Anchor {
    type Output = Anchor;
    fn add(self, rhs: &Offset) -> Self::Output {
        *self + *rhs
    }
}
