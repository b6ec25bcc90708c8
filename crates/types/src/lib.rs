//! Shared constants and plain data types.
//!
//! Dependency-free so the core, input and terminal crates can all use them.
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DESCENT_INTERVAL_MS` | 1000 | Gravity: one row per interval |
//! | `FRAME_MS` | 16 | Render/input poll interval of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_u8(PieceKind::T.to_u8()), Some(PieceKind::T));
//! assert_eq!(PieceKind::L.to_string(), "L");
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Automatic descent interval (1000ms = 1 second per row)
pub const DESCENT_INTERVAL_MS: u32 = 1000;

/// Terminal loop frame interval (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points awarded per cleared row. Flat, no multi-line bonus.
pub const LINE_CLEAR_POINTS: u32 = 10;

/// The seven tetromino piece kinds
///
/// The discriminant order is the canonical order of [`PieceKind::ALL`] and
/// the 1-based byte encoding used by render grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single-letter name (used in logs)
    pub fn as_str(&self) -> &'static str {
        ["I", "O", "T", "S", "Z", "J", "L"][*self as usize]
    }

    /// Non-zero byte for compact grids; 0 is reserved for empty.
    pub fn to_u8(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::to_u8`].
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v).checked_sub(1)?).copied()
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player and control-surface actions
///
/// Movement actions only have an effect while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// One row down; lands the piece when blocked
    SoftDrop,
    /// 90° clockwise in place, no kicks
    RotateCw,
    /// From idle or after game over
    Start,
    /// After game over only
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle phase of a game session
///
/// `Idle` → `Running` → `GameOver` → (restart) → `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Before the first start
    #[default]
    Idle,
    /// A piece is falling and input is live
    Running,
    /// Top-out happened; waiting for restart
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Core-side event emitted after a piece is committed.
///
/// Consumed by the session to drive persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreEvent {
    pub locked: bool,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub game_over: bool,
    /// Set when the game ended with a score above the previous high score.
    pub new_high_score: Option<u32>,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Occupied by a committed block of that kind
pub type Cell = Option<PieceKind>;
