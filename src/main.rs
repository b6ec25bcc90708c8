//! Terminal Blocktris runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `blocktris::term`. Gravity runs off measured frame time.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blocktris::config::Config;
use blocktris::core::GameSnapshot;
use blocktris::input::{handle_key_event, should_quit};
use blocktris::logging;
use blocktris::session::Session;
use blocktris::store::{HighScoreStore, JsonFileStore, MemoryStore};
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blocktris::types::FRAME_MS;

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    let store: Box<dyn HighScoreStore> = if config.no_persist {
        Box::new(MemoryStore::default())
    } else {
        Box::new(JsonFileStore::new(&config.high_score_file))
    };
    let mut session = Session::new(config.resolve_seed(), store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        phase = session.game().phase().as_str(),
        score = session.game().score(),
        high_score = session.game().high_score(),
        "exiting"
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session<Box<dyn HighScoreStore>>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity. Only whole milliseconds are consumed so nothing drifts.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            last_frame += Duration::from_millis(ms as u64);
            session.advance(ms);
        }
    }
}
