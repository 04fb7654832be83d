//! Game settings loaded from TOML.

use std::path::{Path, PathBuf};

use chess_core::Color;
use minimax_engine::Difficulty;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

pub const DEFAULT_CONFIG_PATH: &str = "chess.toml";
pub const DEFAULT_SAVE_PATH: &str = "chess_save.json";

/// Settings for one game. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side the human plays
    pub human_color: Color,
    /// 1 (easiest) to 4 (hardest)
    pub difficulty: u8,
    /// Where the board is saved after every turn
    pub save_path: PathBuf,
    /// Fixed seed for the engine's random choices
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_color: Color::White,
            difficulty: Difficulty::default().level(),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> GameResult<()> {
        if self.human_color.is_empty() {
            return Err(GameError::Parse(
                "human_color must be \"white\" or \"black\"".into(),
            ));
        }
        Difficulty::new(self.difficulty)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
