//! Runtime configuration, loaded from an optional JSON file.

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed seed for every random choice the games make
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub snake: SnakeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: None,
            log_level: "info".to_string(),
            snake: SnakeConfig::default(),
        }
    }
}

/// Snake timer periods, all in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub tick_ms: u32,
    pub move_ms: u32,
    pub extend_ms: u32,
    pub monster_start_ms: u32,
    pub monster_min_ms: u32,
    pub monster_max_ms: u32,
    pub food_toggle_ms: u32,
    pub clock_ms: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            move_ms: 200,
            extend_ms: 300,
            monster_start_ms: 300,
            monster_min_ms: 180,
            monster_max_ms: 380,
            food_toggle_ms: 5000,
            clock_ms: 1000,
        }
    }
}

impl SnakeConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }

    fn validate(&self) -> Result<()> {
        let periods = [
            ("tick_ms", self.tick_ms),
            ("move_ms", self.move_ms),
            ("extend_ms", self.extend_ms),
            ("monster_start_ms", self.monster_start_ms),
            ("monster_min_ms", self.monster_min_ms),
            ("monster_max_ms", self.monster_max_ms),
            ("food_toggle_ms", self.food_toggle_ms),
            ("clock_ms", self.clock_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                bail!("snake.{} must be greater than zero", name);
            }
        }
        if self.monster_min_ms > self.monster_max_ms {
            bail!(
                "snake.monster_min_ms ({}) exceeds snake.monster_max_ms ({})",
                self.monster_min_ms,
                self.monster_max_ms
            );
        }
        Ok(())
    }
}

impl Config {
    /// Read the file when given, otherwise start from defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.log_level()?;
        self.snake.validate()
    }

    pub fn log_level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown log level '{}'", self.log_level))
    }

    /// Seeded when a seed is configured, otherwise from the OS
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.snake.move_ms, 200);
        assert_eq!(config.log_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn partial_snake_section_keeps_other_defaults() {
        let config = Config::from_json(r#"{"seed": 7, "snake": {"move_ms": 150}}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.snake.move_ms, 150);
        assert_eq!(config.snake.extend_ms, 300);
    }

    #[test]
    fn rejects_inverted_monster_range() {
        let err = Config::from_json(r#"{"snake": {"monster_min_ms": 500, "monster_max_ms": 200}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("monster_min_ms"));
    }

    #[test]
    fn rejects_zero_period() {
        assert!(Config::from_json(r#"{"snake": {"clock_ms": 0}}"#).is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Config::from_json(r#"{"log_level": "chatty"}"#).is_err());
    }

    #[test]
    fn seeded_rng_is_repeatable() {
        let config = Config { seed: Some(42), ..Config::default() };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("reading config file"));
    }
}
