use itertools::Itertools;

use super::*;

impl Board {
    /// Pretty-prints the board: one digit per cell, ghosts shown as `g`.
    pub fn pretty(&self) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let cell = self.at(x, y);
                        if cell.ghost() { "g".into() } else { cell.code().to_string() }
                    })
                    .join("")
            })
            .join("\n")
    }
}
