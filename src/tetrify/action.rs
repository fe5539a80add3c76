use crate::tetrify::prelude::*;

/// An elementary in-grid move a player can make with the falling piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    RotateLeft,
    RotateRight,
    SoftDrop,
    HardDrop,
    Idle,
}

impl Action {
    /// The board-transition semantics of the action: the pose the piece ends
    /// up in, which is the original pose whenever the transition is blocked.
    pub fn apply(&self, shape: Shape, anchor: Anchor, board: &Board) -> (Shape, Anchor) {
        match self {
            Action::Left => Action::_shifted(shape, anchor, Anchor::new(anchor.x - 1, anchor.y), board),
            Action::Right => Action::_shifted(shape, anchor, Anchor::new(anchor.x + 1, anchor.y), board),
            Action::SoftDrop => Action::_shifted(shape, anchor, anchor.below(), board),
            Action::HardDrop => {
                let mut pose = (shape, anchor);
                loop {
                    let (next_shape, next_anchor) = Action::SoftDrop.apply(pose.0, pose.1, board);
                    if next_anchor == pose.1 {
                        return (next_shape, next_anchor);
                    }
                    pose = (next_shape, next_anchor);
                }
            }
            Action::RotateLeft => Action::_turned(shape, shape.rotated_left(), anchor, board),
            Action::RotateRight => Action::_turned(shape, shape.rotated_right(), anchor, board),
            Action::Idle => (shape, anchor),
        }
    }

    fn _shifted(shape: Shape, from: Anchor, to: Anchor, board: &Board) -> (Shape, Anchor) {
        if board.is_blocked(&shape, to) { (shape, from) } else { (shape, to) }
    }

    fn _turned(original: Shape, rotated: Shape, anchor: Anchor, board: &Board) -> (Shape, Anchor) {
        if board.is_blocked(&rotated, anchor) { (original, anchor) } else { (rotated, anchor) }
    }
}

#[cfg(test)]
mod tests {
    use crate::tetrify::prelude::*;

    fn open_board() -> Board {
        Board::from_target(&vec![vec![false; 4]; 6]).unwrap()
    }

    #[test]
    fn walls_stop_horizontal_movement() {
        let board = open_board();
        let o = Shape::canonical(Piece::O);
        let spawn = Anchor::new(1, 1);

        let (_, left) = Action::Left.apply(o, spawn, &board);
        assert_eq!(left, spawn);

        let (_, right) = Action::Right.apply(o, spawn, &board);
        assert_eq!(right, Anchor::new(2, 1));
    }

    #[test]
    fn hard_drop_rests_on_the_floor_and_on_piles() {
        let mut board = open_board();
        let o = Shape::canonical(Piece::O);

        let (_, rest) = Action::HardDrop.apply(o, Anchor::new(1, 1), &board);
        assert_eq!(rest, Anchor::new(1, 5));

        board.apply(&o, Anchor::new(1, 5), true).unwrap();
        let (_, stacked) = Action::HardDrop.apply(o, Anchor::new(1, 1), &board);
        assert_eq!(stacked, Anchor::new(1, 3));
    }

    #[test]
    fn blocked_rotations_keep_the_pose() {
        let board = Board::from_target(&vec![vec![false]; 6]).unwrap();
        let i = Shape::canonical(Piece::I);
        let spawn = Anchor::new(0, 3);

        // A 1-wide board has no room for a horizontal I.
        let (shape, anchor) = Action::RotateLeft.apply(i, spawn, &board);
        assert_eq!(shape.cells(), i.cells());
        assert_eq!(anchor, spawn);
    }

    #[test]
    fn free_rotations_turn_the_shape() {
        let board = open_board();
        let t = Shape::canonical(Piece::T);
        let spawn = Anchor::new(2, 2);

        let (shape, anchor) = Action::RotateLeft.apply(t, spawn, &board);
        assert_eq!(shape.cells(), t.rotated_left().cells());
        assert_eq!(anchor, spawn);
    }

    #[test]
    fn idle_is_idle() {
        let board = open_board();
        let z = Shape::canonical(Piece::Z);
        let (shape, anchor) = Action::Idle.apply(z, Anchor::new(2, 1), &board);
        assert_eq!(shape.cells(), z.cells());
        assert_eq!(anchor, Anchor::new(2, 1));
    }
}
