//! Collision module - legality checks against walls, floor and settled blocks
//!
//! Every check evaluates the *candidate* placement before any state is
//! mutated, so callers never need to roll back.

use crate::board::Board;
use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Can `shape` occupy the board with its top-left corner at (x, y)?
///
/// Legal iff every filled cell lies in `x ∈ [0, 10)`, `y < 20`, and lands on
/// an empty cell. Cells above the top edge count as empty.
pub fn fits(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.filled().iter().all(|&(dx, dy)| {
        let cx = i16::from(x) + i16::from(dx);
        let cy = i16::from(y) + i16::from(dy);
        if cx < 0 || cx >= i16::from(BOARD_WIDTH) || cy >= i16::from(BOARD_HEIGHT) {
            return false;
        }
        // cx is in [0, 10) and cy in [-128, 20), so both narrow back to i8.
        !board.is_occupied(cx as i8, cy as i8)
    })
}

/// Whether `piece` fits where it currently is
pub fn piece_fits(board: &Board, piece: &Piece) -> bool {
    fits(board, &piece.shape, piece.x, piece.y)
}

/// Blocked by the floor (row 20) or a settled cell directly below
pub fn can_move_down(board: &Board, piece: &Piece) -> bool {
    fits(board, &piece.shape, piece.x, piece.y.saturating_add(1))
}

/// Blocked by the left wall or a settled cell to the left
pub fn can_move_left(board: &Board, piece: &Piece) -> bool {
    fits(board, &piece.shape, piece.x.saturating_sub(1), piece.y)
}

/// Blocked by the right wall or a settled cell to the right
pub fn can_move_right(board: &Board, piece: &Piece) -> bool {
    fits(board, &piece.shape, piece.x.saturating_add(1), piece.y)
}

/// The rotated shape must fit at the current anchor. No kick offsets are tried.
pub fn can_rotate_cw(board: &Board, piece: &Piece) -> bool {
    fits(board, &piece.shape.rotate_cw(), piece.x, piece.y)
}
