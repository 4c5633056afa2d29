//! The two sides of an Othello game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        !self
    }
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "unknown player `{}`", name)]
pub struct ParsePlayerError {
    name: String,
}

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Player::Black),
            "white" | "w" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError {
                name: s.to_string(),
            }),
        }
    }
}
