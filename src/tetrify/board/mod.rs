pub(crate) mod cell;
pub(crate) mod features;
pub(crate) mod pretty;
pub(crate) mod stragglers;

use crate::tetrify::prelude::*;

use cell::Cell;

/// A single animation frame: row-major state codes with the ghost bit folded in.
pub type Frame = Vec<Vec<u8>>;

/// A full animation: one frame per spawn, elementary action, and commit.
pub type Animation = Vec<Frame>;

/// A rectangular dual-state board. Every cell tracks selectedness crossed
/// with occupancy, so the board is simultaneously the target image and the
/// pile of placed blocks.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds the starting board for a target image: selected cells begin
    /// as false negatives, everything else empty, no ghosts anywhere.
    pub fn from_target(target: &[Vec<bool>]) -> Result<Board> {
        let height = target.len();
        let width = target.first().map_or(0, |row| row.len());
        if width == 0 || height == 0 {
            return Err(anyhow!("target grid must be non-empty"));
        }
        if target.iter().any(|row| row.len() != width) {
            return Err(anyhow!("target grid must be rectangular"));
        }

        let cells = target
            .iter()
            .flat_map(|row| {
                row.iter().map(|&selected| {
                    if selected { Cell::selected() } else { Cell::default() }
                })
            })
            .collect();
        Ok(Board { width, height, cells })
    }

    /// The board width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The board height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at (x, y), if that position is on the board.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        let on_board = x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height;
        on_board.then(|| self.at(x as usize, y as usize))
    }

    /// In-bounds indexing for the board's own scans.
    pub(crate) fn at(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// True iff the shape cannot occupy the anchor: some cell would fall off
    /// the board or step onto a committed block. Ghost previews never block.
    pub fn is_blocked(&self, shape: &Shape, anchor: Anchor) -> bool {
        shape
            .real_cells(anchor)
            .iter()
            .any(|position| {
                self.cell_at(position.x, position.y)
                    .map_or(true, |cell| cell.solidly_filled())
            })
    }

    /// True iff the shape cannot fall any further from the anchor.
    pub fn has_landed(&self, shape: &Shape, anchor: Anchor) -> bool {
        self.is_blocked(shape, anchor.below())
    }

    /// Stamps the shape onto the board, incrementing each covered cell's
    /// code. The stamp is a ghost unless the shape has landed or the caller
    /// forces a committed block. Incrementing an occupied cell would
    /// materialize an illegal code, so it surfaces as corruption.
    pub fn apply(&mut self, shape: &Shape, anchor: Anchor, force_solid: bool) -> Result<()> {
        let ghost = !self.has_landed(shape, anchor) && !force_solid;
        self.stamp(shape, anchor, ghost, false)
    }

    /// Stamps the shape as a pure ghost overlay for animation. The fly-over
    /// passes behind settled blocks instead of poisoning them, so a preview
    /// followed by [`Board::clear_ghosts`] is always an identity.
    pub fn preview(&mut self, shape: &Shape, anchor: Anchor) -> Result<()> {
        self.stamp(shape, anchor, true, true)
    }

    fn stamp(&mut self, shape: &Shape, anchor: Anchor, ghost: bool, cosmetic: bool) -> Result<()> {
        for position in shape.real_cells(anchor) {
            let Some(current) = self.cell_at(position.x, position.y) else {
                // Cells hanging off the board (partially visible spawns) are not drawn.
                continue;
            };
            if current.filled() {
                if cosmetic {
                    continue;
                }
                return Err(anyhow!(
                    "applying {} at ({}, {}) would corrupt an occupied cell",
                    shape.kind.notate(),
                    position.x,
                    position.y
                ));
            }
            let index = position.y as usize * self.width + position.x as usize;
            self.cells[index] = current
                .with_code(current.code() + 1)
                .with_ghost(ghost)
                .with_tag(Some(shape.kind));
        }
        Ok(())
    }

    /// Clears every ghost cell, decrementing its code back. Together with a
    /// ghost apply this is an identity on the board.
    pub fn clear_ghosts(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.ghost() {
                *cell = cell.with_code(cell.code() - 1).with_ghost(false).with_tag(None);
            }
        }
    }

    /// The frame encoding of the board.
    pub fn render(&self) -> Frame {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.at(x, y).render()).collect())
            .collect()
    }

    /// The spawn position for a shape: top-center, every cell on-board for
    /// any board at least as tall as the shape.
    pub fn spawn_anchor(&self, shape: &Shape) -> Anchor {
        Anchor::new(self.width as i32 / 2, shape.spawn_row())
    }

    /// Builds a board straight from state codes; rows of '0134' digits.
    #[cfg(test)]
    pub(crate) fn from_codes(rows: &[&str]) -> Board {
        let height = rows.len();
        let width = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| {
                row.chars()
                    .map(|ch| Cell::default().with_code(ch.to_digit(10).unwrap() as u8))
            })
            .collect();
        Board { width, height, cells }
    }
}
