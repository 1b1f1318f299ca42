//! Sliding-tile puzzle played over console prompts.

pub mod board;
pub mod input;
pub mod session;

pub use board::{Board, Move, MoveError};
pub use input::{BoardChoice, InputError, KeyBindings};
pub use session::PuzzleSession;

use crate::config::Config;
use crate::core::terminal::Console;
use anyhow::{Context, Result};
use tracing::info;

/// Game runner for the sliding puzzle. Console I/O blocks, so the
/// session lives on the blocking pool.
pub async fn run_game(config: Config) -> Result<()> {
    let rng = config.rng();
    let solved = tokio::task::spawn_blocking(move || -> Result<u32> {
        let stdin = std::io::stdin();
        let console = Console::new(stdin.lock(), std::io::stdout());
        let mut session = PuzzleSession::new(console, rng);
        session.run().context("console session failed")?;
        Ok(session.solved())
    })
    .await
    .context("puzzle session panicked")??;

    info!(solved, "puzzle session finished");
    Ok(())
}
