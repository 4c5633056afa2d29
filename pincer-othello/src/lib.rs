//! `pincer-othello` implements the rules of Othello for engines and UIs.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with Othello boards.
//!    These are fast, but may result in inconsistent state if their contracts are not manually checked.
//!  - [`Board`] is an immutable value holding both players' discs. It validates moves,
//!    applies captures, scores positions and detects the end of the game.
//!  - [`Game`] adds turn bookkeeping on top of [`Board`]: whose turn it is, skipped turns,
//!    and the final outcome.

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod player;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use player::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
