//! High-score persistence.
//!
//! The game reads the high score once at startup and writes it once per game,
//! only when it improved. Storage problems never end a session: a missing or
//! unreadable file loads as 0, and save errors are returned for the caller to
//! log while it keeps the value in memory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default file name used by the binary.
pub const DEFAULT_HIGH_SCORE_FILE: &str = "blocktris_highscore.json";

/// Where the high score lives between sessions
pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing usable is stored.
    fn load(&self) -> u32;

    /// Persist a new high score.
    fn save(&mut self, high_score: u32) -> Result<()>;
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Box<T> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        (**self).save(high_score)
    }
}

/// On-disk record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

/// JSON file store: `{"high_score": 120}`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<HighScoreRecord>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let record = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(record))
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(Some(record)) => {
                debug!(path = %self.path.display(), high_score = record.high_score, "loaded high score");
                record.high_score
            }
            Ok(None) => 0,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable high score file");
                0
            }
        }
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        let json = serde_json::to_string_pretty(&HighScoreRecord { high_score })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        debug!(path = %self.path.display(), high_score, "saved high score");
        Ok(())
    }
}

/// In-memory store, used with `--no-persist` and in tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    high_score: u32,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.high_score
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        self.high_score = high_score;
        Ok(())
    }
}
