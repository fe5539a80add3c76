use crate::tetrify::prelude::*;

use super::placements::Placement;

/// Reifies an abstract placement sequence into an animation of a player
/// steering each piece from spawn to rest: one frame for the bare starting
/// board, then one per spawn, per elementary action, and per commit.
///
/// The fly-over frames are cosmetic ghost previews; each placement is
/// committed from the placement itself, so the animation always ends on the
/// exact board the search accepted, even where a motion was obstructed.
pub fn animate(origin: &Board, placements: &[Placement]) -> Result<Animation> {
    let mut board = origin.clone();
    let mut frames: Animation = vec![board.render()];

    for placement in placements {
        // Spawn at top-center in the catalog orientation.
        let mut shape = Shape::canonical(placement.shape.kind);
        let mut anchor = board.spawn_anchor(&shape);
        board.preview(&shape, anchor)?;
        frames.push(board.render());

        for action in action_sequence(&board, &shape, anchor, placement) {
            board.clear_ghosts();
            let pose = action.apply(shape, anchor, &board);
            shape = pose.0;
            anchor = pose.1;
            board.preview(&shape, anchor)?;
            frames.push(board.render());
        }

        board.clear_ghosts();
        board.apply(&placement.shape, placement.anchor, true)?;
        frames.push(board.render());
    }

    Ok(frames)
}

/// The optimal (ordered) recipe taking a freshly spawned piece to the
/// desired placement: rotate into orientation, walk to the column, then
/// soft-drop to the row or until the piece rests.
fn action_sequence(board: &Board, shape: &Shape, anchor: Anchor, placement: &Placement) -> Vec<Action> {
    let mut sequence = Vec::new();
    let target_grid = placement.shape.grid();

    // Rotate until the orientation matches, preferring left turns.
    let mut working = *shape;
    while working.grid() != target_grid {
        if working.rotated_left().grid() == target_grid {
            sequence.push(Action::RotateLeft);
            working = working.rotated_left();
        } else {
            sequence.push(Action::RotateRight);
            working = working.rotated_right();
        }
    }

    // Walk to the target column.
    let mut col = anchor.x;
    while col != placement.anchor.x {
        if col > placement.anchor.x {
            sequence.push(Action::Left);
            col -= 1;
        } else {
            sequence.push(Action::Right);
            col += 1;
        }
    }

    // Soft-drop to the target row (or until resting).
    let mut row = anchor.y;
    while row < placement.anchor.y
        && !board.has_landed(&working, Anchor::new(placement.anchor.x, row))
    {
        sequence.push(Action::SoftDrop);
        row += 1;
    }

    sequence
}

#[cfg(test)]
mod tests {
    use crate::agent::{Solver, SolverConfig};
    use crate::tetrify::prelude::*;

    use super::*;

    fn first_animation(target: &[Vec<bool>], gravity: bool) -> Animation {
        let board = Board::from_target(target).unwrap();
        let mut solver = Solver::new(SolverConfig {
            allowed_false_positives: 0,
            allowed_false_negatives: 0,
            enforce_gravity: gravity,
            reduce_is: false,
            seed: Some(1),
        });
        let mut first: Option<Animation> = None;
        solver
            .solve(&board, |animation| {
                first = Some(animation);
                false
            })
            .unwrap();
        first.expect("target should be solvable")
    }

    #[test]
    fn every_frame_has_the_board_dimensions() {
        let animation = first_animation(&[vec![true; 4], vec![true; 4]], true);
        for frame in &animation {
            assert_eq!(frame.len(), 2);
            assert!(frame.iter().all(|row| row.len() == 4));
        }
    }

    #[test]
    fn the_last_frame_is_the_solved_board() {
        let animation = first_animation(&[vec![true; 2], vec![true; 2]], true);
        assert_eq!(animation.last().unwrap(), &vec![vec![4, 4], vec![4, 4]]);
    }

    #[test]
    fn motion_frames_carry_ghost_bits() {
        let animation = first_animation(&[vec![true; 4]], true);
        let ghostly = animation
            .iter()
            .any(|frame| frame.iter().flatten().any(|&code| code & 0x08 != 0));
        assert!(ghostly, "some intermediate frame should show the moving ghost");
    }

    #[test]
    fn an_empty_sequence_is_just_the_starting_board() {
        let board = Board::from_target(&[vec![false, false], vec![false, false]]).unwrap();
        let animation = animate(&board, &[]).unwrap();
        assert_eq!(animation, vec![vec![vec![0, 0], vec![0, 0]]]);
    }

    #[test]
    fn commits_accumulate_across_placements() {
        let target = vec![vec![true; 4], vec![true; 4]];
        let animation = first_animation(&target, true);

        // Two placements commit eight cells in total; the frame right after
        // the first commit shows exactly four committed cells.
        let committed_counts: Vec<usize> = animation
            .iter()
            .map(|frame| frame.iter().flatten().filter(|&&code| code == 4).count())
            .collect();
        assert!(committed_counts.contains(&4));
        assert_eq!(*committed_counts.last().unwrap(), 8);
    }
}
