//! Computer opponents, run off the caller's thread.

use crate::config::SearchConfig;
use crate::search;
use async_std::task;
use async_trait::async_trait;
use pincer_othello::{Board, Game, Location, Player};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

/// Run [`search::search`] on the blocking thread pool and resolve to its move.
/// The board is copied in and only the chosen move comes back.
pub async fn find_best_move_async(board: Board, player: Player, depth: u8) -> Option<Location> {
    task::spawn_blocking(move || search::search(board, player, depth).best_move).await
}

/// A player that picks its own moves.
#[async_trait]
pub trait Opponent {
    /// Which side this opponent plays.
    fn player(&self) -> Player;

    /// Choose a move for the current position, or None if there is no legal move.
    /// Only called when it is this opponent's turn.
    async fn choose_move(&mut self, game: &Game) -> Option<Location>;
}

/// Plays the move chosen by a fixed-depth minimax search.
#[derive(Clone, Copy, Debug)]
pub struct MinimaxOpponent {
    player: Player,
    config: SearchConfig,
}

impl MinimaxOpponent {
    pub fn new(player: Player, config: SearchConfig) -> Self {
        Self { player, config }
    }
}

#[async_trait]
impl Opponent for MinimaxOpponent {
    fn player(&self) -> Player {
        self.player
    }

    async fn choose_move(&mut self, game: &Game) -> Option<Location> {
        find_best_move_async(game.board, self.player, self.config.depth()).await
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    player: Player,
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[async_trait]
impl Opponent for RandomOpponent {
    fn player(&self) -> Player {
        self.player
    }

    async fn choose_move(&mut self, game: &Game) -> Option<Location> {
        game.board.get_moves(self.player).choose(&mut self.rng)
    }
}
