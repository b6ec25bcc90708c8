//! Game state module - manages the complete game state
//!
//! This module ties together the board, the active piece, spawning, scoring and
//! the descent timer. It owns the `Idle → Running → GameOver` lifecycle.
//!
//! Every handler runs to completion: a descent that lands the piece commits
//! it, clears lines and spawns the next piece before returning, so two pieces
//! are never active at once.

use tracing::{debug, info};

use crate::collision::{can_move_down, can_move_left, can_move_right, can_rotate_cw, piece_fits};
use crate::rng::{Spawn, Spawner};
use crate::scoring::clear_lines;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timer::DescentTimer;
use crate::types::*;
use crate::{Board, Piece};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    spawner: Spawner,
    timer: DescentTimer,
    phase: Phase,
    score: u32,
    high_score: u32,
    lines: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    /// Last commit/game-over event (consumed by the session).
    last_event: Option<CoreEvent>,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            spawner: Spawner::new(seed),
            timer: DescentTimer::new(DESCENT_INTERVAL_MS),
            phase: Phase::Idle,
            score: 0,
            high_score: 0,
            lines: 0,
            piece_id: 0,
            last_event: None,
        }
    }

    /// Seed the high score loaded from persistence
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> u32 {
        self.spawner.seed()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn timer(&self) -> &DescentTimer {
        &self.timer
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.score = self.score;
        out.high_score = self.high_score;
        out.lines = self.lines;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start a game from `Idle` or `GameOver`.
    ///
    /// Returns false (and does nothing) while a game is already running.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        self.reset();
        true
    }

    /// Restart after game over. A no-op in any other phase.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        self.reset();
        true
    }

    /// Shared start/restart routine
    fn reset(&mut self) {
        // Any pending descent must be cancelled before the new schedule is armed.
        self.timer.cancel();
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.last_event = None;
        self.phase = Phase::Running;

        info!(high_score = self.high_score, "game started");

        self.spawn_piece();
    }

    /// Spawn a random piece at row 0
    pub fn spawn_piece(&mut self) -> bool {
        let Spawn { kind, x } = self.spawner.next_spawn();
        self.spawn_piece_at(kind, x)
    }

    /// Spawn `kind` with its template orientation at (x, 0), replacing any active piece.
    ///
    /// A column that puts the template past either wall is refused and the
    /// game keeps running. An in-width placement that overlaps the stack tops
    /// the game out instead.
    pub fn spawn_piece_at(&mut self, kind: PieceKind, x: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        let piece = Piece::new(kind, x, 0);
        let max_x = BOARD_WIDTH as i8 - piece.shape.cols() as i8;
        if !(0..=max_x).contains(&x) {
            debug!(kind = kind.as_str(), x, "spawn column out of range");
            return false;
        }
        if !piece_fits(&self.board, &piece) {
            debug!(kind = kind.as_str(), x, "spawn blocked");
            self.top_out();
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        // Each new piece gets a full descent interval.
        self.timer.arm();
        debug!(kind = kind.as_str(), x, piece_id = self.piece_id, "spawned");
        true
    }

    fn top_out(&mut self) {
        self.phase = Phase::GameOver;
        self.active = None;
        self.timer.cancel();

        let new_high_score = if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.score)
        } else {
            None
        };

        let event = self.last_event.get_or_insert_with(CoreEvent::default);
        event.game_over = true;
        event.new_high_score = new_high_score;

        info!(
            score = self.score,
            high_score = self.high_score,
            improved = new_high_score.is_some(),
            "game over"
        );
    }

    /// Try to move the active piece sideways
    pub(crate) fn try_shift(&mut self, dx: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let legal = if dx < 0 {
            can_move_left(&self.board, &active)
        } else {
            can_move_right(&self.board, &active)
        };

        if legal {
            self.active = Some(active.translated(dx, 0));
        }
        legal
    }

    /// Try to rotate the active piece clockwise in place
    pub(crate) fn try_rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if can_rotate_cw(&self.board, &active) {
            self.active = Some(active.rotated_cw());
            return true;
        }
        false
    }

    /// Move the active piece down one row, or land it if blocked.
    ///
    /// Returns false only when nothing is falling.
    pub(crate) fn descend(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if can_move_down(&self.board, &active) {
            self.active = Some(active.translated(0, 1));
        } else {
            self.lock_piece();
        }
        true
    }

    /// Commit the active piece, clear lines, then spawn the next piece
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let cells = active.cells();
        self.board.commit(&cells, active.kind);

        let cleared = clear_lines(&mut self.board);
        self.score += cleared.points;
        self.lines += cleared.rows;

        debug!(
            kind = active.kind.as_str(),
            x = active.x,
            y = active.y,
            lines = cleared.rows,
            score = self.score,
            "locked"
        );

        self.last_event = Some(CoreEvent {
            locked: true,
            lines_cleared: cleared.rows,
            line_clear_score: cleared.points,
            game_over: false,
            new_high_score: None,
        });

        self.spawn_piece();
    }

    /// Take and clear the last lock/game-over event.
    pub fn take_last_event(&mut self) -> Option<CoreEvent> {
        self.last_event.take()
    }

    /// One gravity step. Usable directly by harnesses that bypass the timer.
    pub fn tick(&mut self) -> bool {
        self.descend()
    }

    /// Feed elapsed time to the descent timer and run the ticks that fell due.
    ///
    /// Stops early when a piece lands: the new piece starts a fresh interval.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.phase != Phase::Running {
            return 0;
        }

        let due = self.timer.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            let piece_before = self.piece_id;
            if !self.tick() {
                break;
            }
            ran += 1;
            if self.piece_id != piece_before || self.phase != Phase::Running {
                break;
            }
        }
        ran
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::SoftDrop => self.descend(),
            GameAction::RotateCw => self.try_rotate(),
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
