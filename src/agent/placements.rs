use crate::tetrify::prelude::*;

use super::Solver;

/// A scored final resting pose for one piece.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub score: i64,
    pub shape: Shape,
    pub anchor: Anchor,
}

impl Solver {
    /// Every admissible final placement of the piece on this board, scored.
    ///
    /// Orientations are deduplicated by canonical grid, so symmetric pieces
    /// are not enumerated twice. Under gravity each open column contributes
    /// at most its hard-drop pose; with gravity off, every row from the top
    /// of the column down to the landing row is its own floating candidate.
    /// Candidates whose boards already bust the budgets are dropped here,
    /// before the search ever recurses into them.
    pub(super) fn scored_placements(&mut self, board: &Board, piece: Piece) -> Result<Vec<Placement>> {
        let mut placements = Vec::new();

        for shape in Shape::canonical(piece).orientations() {
            for x in 0..board.width() as i32 {
                let start = Anchor::new(x, shape.spawn_row());
                if board.is_blocked(&shape, start) {
                    continue;
                }

                if self.config.enforce_gravity {
                    let (_, anchor) = Action::HardDrop.apply(shape, start, board);
                    self.consider(board, &shape, anchor, &mut placements)?;
                } else {
                    let mut anchor = start;
                    loop {
                        self.consider(board, &shape, anchor, &mut placements)?;
                        if board.has_landed(&shape, anchor) {
                            break;
                        }
                        anchor = anchor.below();
                    }
                }
            }
        }

        Ok(placements)
    }

    /// Scores one candidate pose on a scratch clone and keeps it if the
    /// resulting board is still viable.
    fn consider(
        &mut self,
        board: &Board,
        shape: &Shape,
        anchor: Anchor,
        placements: &mut Vec<Placement>,
    ) -> Result<()> {
        let mut scratch = board.clone();
        scratch.apply(shape, anchor, true)?;
        let score = self.evaluator.state_value(&scratch);
        if !self.did_fail(&scratch) {
            placements.push(Placement { score, shape: *shape, anchor });
        }
        Ok(())
    }
}
