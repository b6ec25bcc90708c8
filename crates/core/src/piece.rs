//! Active falling piece

use arrayvec::ArrayVec;

use crate::shape::{Shape, MAX_SIDE};
use crate::types::PieceKind;

/// Board cells covered by a piece.
pub type PieceCells = ArrayVec<(i8, i8), { MAX_SIDE * MAX_SIDE }>;

/// A shape instance anchored on the board by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece with its spawn template at (x, y)
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: Shape::template(kind),
            x,
            y,
        }
    }

    /// Absolute board coordinates of every filled cell
    pub fn cells(&self) -> PieceCells {
        self.shape
            .filled()
            .iter()
            .map(|&(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
            .collect()
    }

    /// Copy moved by (dx, dy), saturating at the `i8` range
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Copy rotated clockwise about the same anchor
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }
}
