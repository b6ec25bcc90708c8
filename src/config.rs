//! Command-line configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::Level;

use crate::store::DEFAULT_HIGH_SCORE_FILE;

#[derive(Debug, Clone, Parser)]
#[command(name = "blocktris", version, about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    #[arg(long, help = "RNG seed for piece spawns (defaults to the current time)")]
    pub seed: Option<u32>,

    #[arg(
        long,
        default_value = DEFAULT_HIGH_SCORE_FILE,
        help = "Path of the JSON file holding the high score"
    )]
    pub high_score_file: PathBuf,

    #[arg(long, help = "Keep the high score in memory only")]
    pub no_persist: bool,

    #[arg(long, help = "Write logs to this file (the terminal is used by the game)")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,
}

impl Config {
    /// Explicit seed, or one derived from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
