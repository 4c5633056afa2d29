//! "Perft" performance test: count the number of leaves at a given depth.
//! Passes count as a ply; a leaf is also reached when both players pass.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::Black, depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.get_moves(player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .map(|mv| leaves_below(board.play_unchecked(mv, player), !player, depth - 1, false))
        .sum()
}
