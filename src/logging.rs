//! Logging setup.
//!
//! The terminal belongs to the game, so logs only go to a file and only when
//! one is configured. Without it no subscriber is installed and `tracing`
//! events are discarded.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Install the global subscriber. Returns whether logging is enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(config.log_level()))
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(path = %path.display(), level = %config.log_level(), "logging initialized");
    Ok(true)
}
