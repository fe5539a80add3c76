use crate::tetrify::prelude::*;

/// A cell on a tetrify board.
/// bits:
///     [00, 02]: state code
///     [03, 03]: ghost flag
///     [04, 06]: piece tag value
///     [07, 07]: piece tag presence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell(u8);

/// Per-cell accounting code. Selectedness contributes 3 and occupancy 1, so
/// dropping a block onto a cell is an increment and lifting one a decrement.
/// Code 2 is skipped intentionally: it is impossible to fill a false
/// positive or clear a false negative, so a materialized 2 marks corruption.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Empty = 0,
    FalsePositive = 1,
    FalseNegative = 3,
    Filled = 4,
}

impl Cell {
    const CODE_OFFSET: usize = 0x00;
    const CODE_EXTENT: usize = 0b111;
    const GHOST_OFFSET: usize = 0x03;
    const GHOST_EXTENT: usize = 0b1;
    const TAG_VALUE_OFFSET: usize = 0x04;
    const TAG_VALUE_EXTENT: usize = 0b111; // T J L Z S I O
    const TAG_PRESENCE_OFFSET: usize = 0x07;
    const TAG_PRESENCE_EXTENT: usize = 0b1; // Some None

    /// A fresh cell the target selected: a false negative waiting for cover.
    pub fn selected() -> Cell {
        Cell::default().with_code(CellState::FalseNegative as u8)
    }

    /// The raw state code of this cell.
    pub fn code(&self) -> u8 {
        self._extract(Cell::CODE_OFFSET, Cell::CODE_EXTENT)
    }

    /// The decoded state of this cell; corruption surfaces as an error.
    pub fn state(&self) -> Result<CellState> {
        match self.code() {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::FalsePositive),
            3 => Ok(CellState::FalseNegative),
            4 => Ok(CellState::Filled),
            v => Err(anyhow!("cell holds corrupted state code {v}")),
        }
    }

    /// Whether a block occupies the cell, committed or ghost.
    pub fn filled(&self) -> bool {
        matches!(self.code(), 1 | 4)
    }

    /// Whether a committed (non-ghost) block occupies the cell.
    pub fn solidly_filled(&self) -> bool {
        self.filled() && !self.ghost()
    }

    /// Whether the cell currently shows an uncommitted piece preview.
    pub fn ghost(&self) -> bool {
        self._extract(Cell::GHOST_OFFSET, Cell::GHOST_EXTENT) == 1
    }

    /// The piece that last touched this cell, if any. Rendering only.
    pub fn tag(&self) -> Option<Piece> {
        if self._extract(Cell::TAG_PRESENCE_OFFSET, Cell::TAG_PRESENCE_EXTENT) == 1 {
            Some(Piece::from(self._extract(Cell::TAG_VALUE_OFFSET, Cell::TAG_VALUE_EXTENT)))
        } else {
            None
        }
    }

    /// The frame encoding of the cell: the state code with the ghost flag
    /// folded into bit 3, so downstream rendering can recover both.
    pub fn render(&self) -> u8 {
        self.code() | (self._extract(Cell::GHOST_OFFSET, Cell::GHOST_EXTENT) << 3)
    }

    /// Produces a new cell with the given state code.
    pub fn with_code(&self, code: u8) -> Cell {
        self._with(Cell::CODE_OFFSET, Cell::CODE_EXTENT, code)
    }

    /// Produces a new cell with the given ghost flag.
    pub fn with_ghost(&self, ghost: bool) -> Cell {
        self._with(Cell::GHOST_OFFSET, Cell::GHOST_EXTENT, ghost as u8)
    }

    /// Produces a new cell with the given piece tag.
    pub fn with_tag(&self, tag: Option<Piece>) -> Cell {
        if let Some(kind) = tag {
            self._with(Cell::TAG_PRESENCE_OFFSET, Cell::TAG_PRESENCE_EXTENT, 1)
                ._with(Cell::TAG_VALUE_OFFSET, Cell::TAG_VALUE_EXTENT, kind as u8)
        } else {
            self._with(Cell::TAG_PRESENCE_OFFSET, Cell::TAG_PRESENCE_EXTENT, 0)
        }
    }

    /// Produces the value stored in the bits corresponding to a given offset and extent.
    fn _extract(&self, offset: usize, extent: usize) -> u8 {
        (self.0 >> offset) & extent as u8
    }

    /// Produces a new Cell with the given value placed into the bits corresponding to the given offset and extent.
    fn _with(&self, offset: usize, extent: usize, value: u8) -> Cell {
        let mask: u8 = (extent << offset) as u8;
        let antimask = !mask;
        let v = (value << offset) & mask;
        Cell((self.0 & antimask) | v)
    }
}

#[cfg(test)]
mod tests {
    use crate::tetrify::prelude::*;

    #[test]
    fn default_cell_is_empty() {
        let cell = Cell::default();
        assert_eq!(cell.code(), CellState::Empty as u8);
        assert!(!cell.filled());
        assert!(!cell.ghost());
        assert_eq!(cell.tag(), None);
    }

    #[test]
    fn fields_are_independent() {
        let cell = Cell::selected().with_ghost(true).with_tag(Some(Piece::S));
        assert_eq!(cell.code(), 3);
        assert!(cell.ghost());
        assert_eq!(cell.tag(), Some(Piece::S));

        let cleared = cell.with_ghost(false).with_tag(None);
        assert_eq!(cleared.code(), 3);
        assert!(!cleared.ghost());
        assert_eq!(cleared.tag(), None);
    }

    #[test]
    fn ghost_blocks_are_not_solid() {
        let ghost = Cell::default().with_code(1).with_ghost(true);
        assert!(ghost.filled());
        assert!(!ghost.solidly_filled());
        assert!(ghost.with_ghost(false).solidly_filled());
    }

    #[test]
    fn render_folds_the_ghost_bit_in() {
        let solid = Cell::default().with_code(4).with_tag(Some(Piece::I));
        assert_eq!(solid.render(), 4);
        assert_eq!(solid.with_ghost(true).render(), 4 | 0x08);
    }

    #[test]
    fn corrupted_codes_decode_to_errors() {
        assert!(Cell::default().with_code(2).state().is_err());
        assert!(Cell::default().with_code(5).state().is_err());
        assert!(Cell::selected().state().is_ok());
    }
}
