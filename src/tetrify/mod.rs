/*
 *  The Tetrify placement domain: pieces, boards, and elementary actions.
 */

pub(crate) mod action;
pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub(crate) mod piece;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        action::Action,
        board::{Animation, Board, Frame},
        board::cell::{Cell, CellState},
        consts::*,
        coords::{self, *},
        piece::{Shape, ShapeGrid}
    };
}
