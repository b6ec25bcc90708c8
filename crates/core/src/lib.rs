//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O (it only emits `tracing` events), making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Time is fed in explicitly; tests can tick without a clock
//! - **Portable**: Can run in any environment (terminal, headless harness)
//! - **Allocation-free**: Fixed-size board and stack-only piece cells
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of committed cells, row clearing and shifting
//! - [`shape`]: Tetromino templates and 90° clockwise matrix rotation
//! - [`piece`]: The active falling piece (shape + anchor)
//! - [`collision`]: Pure legality predicates for moves and rotation
//! - [`scoring`]: Bottom-up line clearing with a flat 10 points per row
//! - [`rng`]: Uniform random spawns from a seeded LCG
//! - [`timer`]: Fixed-interval descent scheduling
//! - [`game_state`]: Lifecycle, input actions, commit → clear → spawn
//! - [`snapshot`]: Copyable view of the state for renderers
//!
//! # Game Rules
//!
//! - **Spawning**: Uniformly random kind and column, always at row 0
//! - **Rotation**: Clockwise only, rejected in place when it does not fit (no wall kicks)
//! - **Gravity**: One row every 1000ms; a blocked descent commits the piece
//! - **Scoring**: 10 points per cleared row
//! - **Top-out**: A spawn that overlaps settled blocks ends the game
//!
//! # Example
//!
//! ```
//! use blocktris_core::GameState;
//! use blocktris_types::{GameAction, Phase, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! // Script a piece and push it around.
//! game.spawn_piece_at(PieceKind::T, 3);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! assert_eq!(game.active().unwrap().x, 4);
//!
//! // One second of gravity.
//! assert_eq!(game.advance(1000), 1);
//! assert_eq!(game.active().unwrap().y, 1);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod timer;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{can_move_down, can_move_left, can_move_right, can_rotate_cw, fits};
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::{SimpleRng, Spawn, Spawner};
pub use scoring::{clear_lines, LineClear};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::DescentTimer;
