//! Optional file-backed logging.
//!
//! The game draws on the terminal, so log lines never go to stdout or stderr.
//! Without a log file no subscriber is installed and every `tracing` event is
//! dropped.

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` if set, otherwise `default_level`
pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log level '{default_level}'")),
    }
}

/// Install the global subscriber writing to `log_file`, if one is given
pub fn init(log_file: Option<&Path>, default_level: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = build_filter(default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("Failed to install log subscriber")?;

    Ok(())
}
