//! Static positional evaluation.

use pincer_othello::{Board, Location, Player, EDGE_LENGTH};

/// Positional weights, indexed `[y][x]`. Corners are stable and worth the most;
/// the cells that hand the opponent a corner are the most dangerous.
pub const WEIGHTS: [[i32; EDGE_LENGTH]; EDGE_LENGTH] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Weight of a single disc at `loc`. Offset by one so that no disc is worth zero.
#[inline]
fn disc_value(loc: Location) -> i32 {
    let (x, y) = loc.to_coords();
    WEIGHTS[y][x] + 1
}

/// Score `board` from `player`'s point of view: the weights of `player`'s discs
/// minus the weights of the opponent's discs. Higher is better for `player`.
pub fn evaluate(board: Board, player: Player) -> i32 {
    let mine: i32 = board.get_discs(player).map(disc_value).sum();
    let theirs: i32 = board.get_discs(!player).map(disc_value).sum();
    mine - theirs
}
