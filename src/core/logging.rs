/// Tracing setup. The terminal belongs to the games, so logs only go to a file.
use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Mutex;

/// Install the global subscriber when a log file is configured.
/// Returns whether logging was enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let level = config.log_level()?;
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {}", e))?;

    Ok(true)
}
