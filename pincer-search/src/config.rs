//! Search settings: difficulty presets and TOML configuration.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named search depths for a computer opponent.
///
/// The presets are odd so that the search horizon ends on a reply by the
/// searching player.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Search depth in plies.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        }
    }

    /// Map a numeric level to a preset: 1 is Easy, 2 is Medium and any other
    /// level, 0 included, is Hard.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "unknown difficulty `{}`", name)]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let preset = match s.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            level => level.parse().ok().map(Difficulty::from_level),
        };
        preset.ok_or_else(|| ParseDifficultyError {
            name: s.to_string(),
        })
    }
}

/// How deep the engine searches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    /// Overrides the difficulty preset when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Display, Error)]
#[display(fmt = "invalid search config: {}", source)]
pub struct ConfigError {
    source: toml::de::Error,
}

impl SearchConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            depth: None,
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self {
            difficulty: Difficulty::default(),
            depth: Some(depth),
        }
    }

    /// Parse a config such as `difficulty = "hard"` or `depth = 4`.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError { source })
    }

    /// The search depth in plies.
    pub fn depth(self) -> u8 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }
}
