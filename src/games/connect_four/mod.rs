//! Two-player Connect Four on an 8x8 board, mouse or keyboard driven.

pub mod board;
pub mod game;
pub mod renderer;

pub use board::{Board, MoveError, Outcome, Player};
pub use game::{ConnectFourGame, ConnectFourState};
pub use renderer::ConnectFourRenderer;

use crate::config::Config;
use crate::core::engine::run_tui;
use anyhow::Result;
use tracing::info;

/// Game runner for Connect Four
pub async fn run_game(_config: Config) -> Result<()> {
    let game = run_tui(ConnectFourGame::new()).await?;
    info!(outcome = ?game.state().outcome, "connect four closed");
    Ok(())
}
