//! Snake versus monster, a timer-driven arcade game.

pub mod arena;
pub mod game;
pub mod renderer;
pub mod world;

pub use arena::{Direction, Point};
pub use game::SnakeGame;
pub use renderer::SnakeRenderer;
pub use world::{Phase, SnakeWorld, Steer};

use crate::config::Config;
use crate::core::engine::run_tui;
use anyhow::Result;
use tracing::info;

/// Game runner for the snake game
pub async fn run_game(config: Config) -> Result<()> {
    let game = SnakeGame::new(config.snake.clone(), config.rng());
    let game = run_tui(game).await?;
    let world = game.world();
    info!(
        phase = ?world.phase,
        contacts = world.contacts,
        seconds = world.elapsed_secs,
        "snake game closed"
    );
    Ok(())
}
