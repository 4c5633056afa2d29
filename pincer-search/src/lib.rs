//! `pincer-search` picks moves for a computer Othello player.
//!
//! The engine is a fixed-depth minimax search with alpha-beta pruning over the
//! positional evaluation in [`evaluation`]. Each call is self-contained: no state
//! is kept between searches, and every branch works on its own copy of the board.
//! [`opponent`] runs searches on a background thread for interactive callers.

pub mod config;
pub mod evaluation;
pub mod opponent;
pub mod search;

pub use config::{Difficulty, SearchConfig};
pub use evaluation::evaluate;
pub use opponent::{find_best_move_async, MinimaxOpponent, Opponent, RandomOpponent};
pub use search::{search, SearchResult, SearchStats};

use pincer_othello::{Board, Location, Player};

/// Find the best move for `player`, looking `depth` plies ahead.
/// Returns None if `player` has no legal move, in which case the turn passes.
pub fn find_best_move(board: Board, player: Player, depth: u8) -> Option<Location> {
    search::search(board, player, depth).best_move
}
