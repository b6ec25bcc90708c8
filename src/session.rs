//! Play session: a `GameState` plus the high-score store behind it.
//!
//! The session loads the stored high score once, feeds input and elapsed time
//! to the game, and writes the high score back when a game ends with a new
//! best. A failed write is logged and the session carries on with the value
//! in memory.

use tracing::{debug, info, trace, warn};

use crate::core::{GameSnapshot, GameState};
use crate::store::HighScoreStore;
use crate::types::{CoreEvent, GameAction};

pub struct Session<S: HighScoreStore> {
    game: GameState,
    store: S,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(seed: u32, store: S) -> Self {
        let high_score = store.load();
        info!(seed, high_score, "session created");
        Self {
            game: GameState::new(seed).with_high_score(high_score),
            store,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Direct access for scripted scenarios.
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    /// Apply one input action. Returns whether the game changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = self.game.apply_action(action);
        trace!(
            action = action.as_str(),
            changed,
            phase = self.game.phase().as_str(),
            "action"
        );
        self.flush_events();
        changed
    }

    /// Feed elapsed wall-clock time. Returns the number of descent ticks run.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let ticks = self.game.advance(elapsed_ms);
        self.flush_events();
        ticks
    }

    /// Drain the pending game event, persisting a new high score if there is one.
    pub fn flush_events(&mut self) -> Option<CoreEvent> {
        let event = self.game.take_last_event()?;

        if event.lines_cleared > 0 {
            debug!(
                lines = event.lines_cleared,
                points = event.line_clear_score,
                score = self.game.score(),
                "lines cleared"
            );
        }

        if let Some(high_score) = event.new_high_score {
            match self.store.save(high_score) {
                Ok(()) => info!(high_score, "high score saved"),
                Err(e) => warn!(error = %e, high_score, "failed to save high score"),
            }
        }

        Some(event)
    }
}
