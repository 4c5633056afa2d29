//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Every node is scored from the root player's point of view. Nodes where the
//! root player moves maximize; nodes where the opponent moves minimize. A player
//! with no legal move passes: the same board is searched one ply deeper with
//! the other player to move.

use crate::evaluation::evaluate;
use log::{debug, trace};
use pincer_othello::{Board, Location, Player};

/// Larger than any evaluation.
pub const INFINITY: i32 = 1_000_000;

/// Work done by one search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Positions visited below the root.
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,
}

/// The outcome of a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// The chosen move, or None if the player has no legal move.
    pub best_move: Option<Location>,
    /// The evaluation of `best_move` for the root player.
    pub score: i32,
    pub stats: SearchStats,
}

/// Search `depth` plies ahead and return the best move for `player`.
///
/// The root always tries every legal move, so a depth of 0 behaves like a depth
/// of 1: each move is judged by the static evaluation of the board it produces.
/// Ties go to the earliest move in row-major order.
pub fn search(board: Board, player: Player, depth: u8) -> SearchResult {
    let mut stats = SearchStats::default();
    let mut best_move = None;
    let mut best_score = -INFINITY;
    let child_depth = depth.saturating_sub(1);

    for mv in board.get_moves(player) {
        let child = board.play_unchecked(mv, player);
        let score = minimax(
            child,
            child_depth,
            best_score,
            INFINITY,
            false,
            player,
            &mut stats,
        );
        trace!("{} {}: {}", player, mv, score);

        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    if best_move.is_none() {
        best_score = evaluate(board, player);
    }

    debug!(
        "depth {} search for {}: move {:?}, score {}, {} nodes, {} cutoffs",
        depth,
        player,
        best_move.map(|mv| mv.to_string()),
        best_score,
        stats.nodes,
        stats.cutoffs
    );

    SearchResult {
        best_move,
        score: best_score,
        stats,
    }
}

/// Score `board` for `root` by searching `depth` more plies.
/// `maximizing` is true when `root` is the player to move.
fn minimax(
    board: Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    root: Player,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 || board.is_game_over() {
        return evaluate(board, root);
    }

    let to_move = if maximizing { root } else { !root };
    let moves = board.get_moves(to_move);

    // Pass: the other player moves on the same board.
    if moves.is_empty() {
        return minimax(board, depth - 1, alpha, beta, !maximizing, root, stats);
    }

    if maximizing {
        let mut best = -INFINITY;
        for mv in moves {
            let child = board.play_unchecked(mv, to_move);
            best = best.max(minimax(child, depth - 1, alpha, beta, false, root, stats));
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let child = board.play_unchecked(mv, to_move);
            best = best.min(minimax(child, depth - 1, alpha, beta, true, root, stats));
            beta = beta.min(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
