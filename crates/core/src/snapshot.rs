//! Copyable per-frame view of the game for renderers

use crate::piece::{Piece, PieceCells};
use crate::shape::Shape;
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board cells covered by the active piece
    pub fn cells(&self) -> PieceCells {
        Piece::from(*self).cells()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<ActiveSnapshot> for Piece {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, otherwise [`PieceKind::to_u8`] of the committed block
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub piece_id: u32,
    pub score: u32,
    pub high_score: u32,
    pub lines: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            phase: Phase::Idle,
            piece_id: 0,
            score: 0,
            high_score: 0,
            lines: 0,
        }
    }
}
