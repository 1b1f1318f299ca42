pub mod macros;
pub mod connect_four;
pub mod puzzle;
pub mod snake;

use std::pin::Pin;
use anyhow::Result;
use crate::config::Config;
use crate::register_games;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

/// Game initializer function - creates and runs the game
pub type GameInitializer =
    fn(Config) -> Pin<Box<dyn std::future::Future<Output = Result<()>> + Send>>;

/// Registry entry containing metadata and initializer
pub struct GameRegistry {
    pub info: GameInfo,
    pub initializer: GameInitializer,
}

// Register all games here - developers only need to add a new entry
register_games! {
    puzzle => {
        id: "puzzle",
        name: "Sliding Puzzle",
        description: "Slide the tiles back into order - 8 or 15 puzzle",
        author: "Arcade Trio Team"
    },
    connect_four => {
        id: "connect-four",
        name: "Connect Four",
        description: "Four in a row on an 8x8 board - local two player",
        author: "Arcade Trio Team"
    },
    snake => {
        id: "snake",
        name: "Snake",
        description: "Eat every food item before the monster catches you",
        author: "Arcade Trio Team"
    }
}
