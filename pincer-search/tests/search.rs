//! Search properties over random positions.

use pincer_othello::test_utils::random_game;
use pincer_othello::{Board, Location, Player};
use pincer_search::{evaluate, find_best_move, search, Difficulty, SearchConfig};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Unpruned minimax with the same pass and reference-frame rules as the engine.
fn minimax(board: Board, depth: u8, maximizing: bool, root: Player) -> i32 {
    if depth == 0 || board.is_game_over() {
        return evaluate(board, root);
    }

    let to_move = if maximizing { root } else { !root };
    let moves = board.get_moves(to_move);
    if moves.is_empty() {
        return minimax(board, depth - 1, !maximizing, root);
    }

    let scores = moves.map(|mv| {
        let child = board.play_unchecked(mv, to_move);
        minimax(child, depth - 1, !maximizing, root)
    });
    if maximizing {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

fn unpruned_best_move(board: Board, player: Player, depth: u8) -> Option<(Location, i32)> {
    let mut best: Option<(Location, i32)> = None;
    for mv in board.get_moves(player) {
        let child = board.play_unchecked(mv, player);
        let score = minimax(child, depth.saturating_sub(1), false, player);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    best
}

fn player_for(seed: u64) -> Player {
    if seed % 2 == 0 {
        Player::Black
    } else {
        Player::White
    }
}

#[test]
fn opening_reply_is_legal_at_every_preset() {
    let board = Board::new();
    for &difficulty in &[Difficulty::Easy, Difficulty::Medium] {
        let depth = SearchConfig::new(difficulty).depth();
        let mv = find_best_move(board, Player::Black, depth).unwrap();
        assert!(board.is_valid_move(mv, Player::Black));
    }
}

#[test]
fn finished_game_has_no_move() {
    let board = Board::empty().with_cell(Location::from_coords(4, 4).unwrap(), Some(Player::White));
    assert_eq!(find_best_move(board, Player::White, 3), None);
    assert_eq!(find_best_move(board, Player::Black, 3), None);
}

#[test]
fn pruning_saves_work() {
    let board = Board::new();
    let result = search(board, Player::Black, 5);
    assert!(result.stats.cutoffs > 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn search_returns_a_legal_move(seed in any::<u64>(), plies in 0usize..56, depth in 1u8..4) {
        let board = random_game(&mut StdRng::seed_from_u64(seed), plies).board;
        let player = player_for(seed);

        match find_best_move(board, player, depth) {
            Some(mv) => {
                prop_assert!(board.get_moves(player).contains(mv));
            }
            None => {
                prop_assert!(!board.has_moves(player));
            }
        }
    }

    #[test]
    fn pruning_does_not_change_the_choice(seed in any::<u64>(), plies in 0usize..56, depth in 0u8..4) {
        let board = random_game(&mut StdRng::seed_from_u64(seed), plies).board;
        let player = player_for(seed);

        let pruned = search(board, player, depth);
        let unpruned = unpruned_best_move(board, player, depth);
        prop_assert_eq!(pruned.best_move, unpruned.map(|(mv, _)| mv));
        if let Some((_, score)) = unpruned {
            prop_assert_eq!(pruned.score, score);
        }
    }

    #[test]
    fn search_leaves_the_board_alone(seed in any::<u64>(), plies in 0usize..56) {
        let board = random_game(&mut StdRng::seed_from_u64(seed), plies).board;
        let copy = board;
        let _ = search(board, player_for(seed), 3);
        prop_assert_eq!(board, copy);
    }
}
