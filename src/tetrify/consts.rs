pub const NUM_PIECES: usize = 7;

// A tetromino kind.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    T = 0,
    J = 1,
    L = 2,
    Z = 3,
    S = 4,
    I = 5,
    O = 6,
}

impl Piece {
    /// Gets the tetromino kinds in catalog order.
    pub fn all() -> [Piece; NUM_PIECES] {
        [Piece::T, Piece::J, Piece::L, Piece::Z, Piece::S, Piece::I, Piece::O]
    }

    /// Notates the piece.
    pub fn notate(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<u8> for Piece {
    fn from(value: u8) -> Self {
        match value {
            0 => Piece::T,
            1 => Piece::J,
            2 => Piece::L,
            3 => Piece::Z,
            4 => Piece::S,
            5 => Piece::I,
            6 => Piece::O,
            _ => panic!("expected piece tag of 0-6, received {value}"),
        }
    }
}
