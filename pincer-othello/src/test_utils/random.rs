//! Random playouts for property tests and benchmarks.

use crate::Game;
use log::trace;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Play up to `plies` uniformly random legal moves from the starting position.
/// Stops early if the game ends. Forced passes are applied by [`Game`].
pub fn random_game<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> Game {
    let mut game = Game::new();

    for _ in 0..plies {
        let mv = match game.get_moves().choose(rng) {
            Some(mv) => mv,
            None => break,
        };
        game = match game.apply_move(mv) {
            Ok(next) => next,
            Err(err) => unreachable!("enumerated move rejected: {}", err),
        };
    }

    trace!("random game after {} plies:\n{}", plies, game);
    game
}
