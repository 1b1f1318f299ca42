use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::core::menu::{MenuManager, MenuResult};
use crate::games::{get_all_games, get_game, GameInfo};

#[derive(Parser, Debug)]
#[command(name = "arcade-trio")]
#[command(about = "Three small terminal games: sliding puzzle, Connect Four and Snake")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for every random choice, for repeatable games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Sliding-tile puzzle (8 or 15) played at the prompt
    Puzzle,
    /// Two player Connect Four on an 8x8 board
    ConnectFour,
    /// Snake versus monster
    Snake,
    /// List available games
    List,
}

impl Commands {
    /// Registry id of the game this subcommand launches
    pub fn game_id(&self) -> Option<&'static str> {
        match self {
            Commands::Puzzle => Some("puzzle"),
            Commands::ConnectFour => Some("connect-four"),
            Commands::Snake => Some("snake"),
            Commands::List => None,
        }
    }
}

impl Cli {
    /// Load the config file and apply flag overrides on top
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

pub async fn run_cli(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Some(Commands::List) => {
            println!("Available games:");
            println!();
            for game in get_all_games() {
                print_game(&game.info);
            }
        }
        Some(command) => {
            let id = command
                .game_id()
                .ok_or_else(|| anyhow!("'{:?}' does not launch a game", command))?;
            launch(id, config).await?;
        }
        None => show_main_menu(config).await?,
    }

    Ok(())
}

fn print_game(info: &GameInfo) {
    println!("  {:<14} {}", info.id, info.name);
    println!("  {:<14} {}", "", info.description);
    println!();
}

async fn launch(id: &str, config: Config) -> Result<()> {
    let game = get_game(id).ok_or_else(|| anyhow!("Game '{}' not found in registry!", id))?;
    tracing::info!(game = id, "launching");
    (game.initializer)(config).await
}

/// Menu, game, menu again until the player quits
async fn show_main_menu(config: Config) -> Result<()> {
    let games: Vec<GameInfo> = get_all_games().into_iter().map(|g| g.info).collect();
    let mut menu = MenuManager::new();

    loop {
        let mut terminal = ratatui::init();
        let choice = menu.run(&mut terminal, &games);
        ratatui::restore();

        match choice? {
            MenuResult::Play(id) => launch(id, config.clone()).await?,
            MenuResult::Quit => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcommands_map_to_games() {
        let cli = Cli::try_parse_from(["arcade-trio", "connect-four"]).unwrap();
        assert_eq!(cli.command, Some(Commands::ConnectFour));
        assert_eq!(cli.command.and_then(|c| c.game_id()), Some("connect-four"));
        assert_eq!(Commands::List.game_id(), None);
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["arcade-trio"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["arcade-trio", "snake", "--seed", "9", "--log-level", "debug"])
            .unwrap();
        assert_eq!(cli.seed, Some(9));
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_flag_values_are_rejected() {
        assert!(Cli::try_parse_from(["arcade-trio", "--seed", "many"]).is_err());
        assert!(Cli::try_parse_from(["arcade-trio", "tetris"]).is_err());

        let cli = Cli::try_parse_from(["arcade-trio", "--log-level", "loud"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }
}
