use super::*;
use super::cell::CellState;

impl Board {
    /// Blocks the target never asked for.
    pub fn count_false_positives(&self) -> u32 {
        self.count_code(CellState::FalsePositive)
    }

    /// Selected cells still waiting for cover.
    pub fn count_false_negatives(&self) -> u32 {
        self.count_code(CellState::FalseNegative)
    }

    /// Cells currently showing an uncommitted preview.
    pub fn count_ghosts(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.ghost()).count() as u32
    }

    fn count_code(&self, state: CellState) -> u32 {
        self.cells.iter().filter(|cell| cell.code() == state as u8).count() as u32
    }

    /// False negatives trapped beneath a block in their column. Each column
    /// is scanned from the floor up, accumulating negatives and banking the
    /// running count whenever a filled cell caps them; negatives in a
    /// still-open shaft are never banked.
    pub fn count_buried_false_negatives(&self) -> u32 {
        let mut total = 0;
        for x in 0..self.width {
            let mut pending = 0;
            for y in (0..self.height).rev() {
                let cell = self.at(x, y);
                if cell.code() == CellState::FalseNegative as u8 {
                    pending += 1;
                }
                if cell.filled() {
                    total += pending;
                    pending = 0;
                }
            }
        }
        total
    }

    /// Unfilled cells walled in by blocks on both sides; the board edge
    /// counts as a wall. Deep wells are only fillable by an I.
    pub fn count_wells(&self) -> u32 {
        let mut wells = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.at(x, y).filled() {
                    continue;
                }
                let left = x == 0 || self.at(x - 1, y).filled();
                let right = x + 1 == self.width || self.at(x + 1, y).filled();
                if left && right {
                    wells += 1;
                }
            }
        }
        wells
    }

    /// Columns rising at least three blocks above both neighbours; spikes
    /// that leave an I as the only clean cover for the flanks.
    pub fn count_towers(&self) -> u32 {
        let heights: Vec<u32> = (0..self.width).map(|x| self.column_height(x)).collect();
        (0..self.width)
            .filter(|&x| {
                let left = if x == 0 { 0 } else { heights[x - 1] };
                let right = if x + 1 == self.width { 0 } else { heights[x + 1] };
                heights[x] >= left + 3 && heights[x] >= right + 3
            })
            .count() as u32
    }

    /// Height of the filled pile in a column.
    fn column_height(&self, x: usize) -> u32 {
        (0..self.height)
            .find(|&y| self.at(x, y).filled())
            .map_or(0, |y| (self.height - y) as u32)
    }
}
