//! Implements game-level Othello logic: whose turn it is and how the game ends.
//!
//! [`Board`] knows nothing about turns. [`Game`] tracks the player to move and
//! applies the pass rule: when the opponent has no legal reply, the player who
//! just moved goes again.

use crate::board::{Board, MoveError, Score};
use crate::{Location, LocationList, Player};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Whether a game is still being played.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Completed(Outcome),
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub turn: Player,
}

impl Default for Game {
    /// The starting board with Black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub const fn new() -> Self {
        Self::from_parts(Board::new(), Player::Black)
    }

    pub const fn from_parts(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    /// Get the legal moves for the player to move.
    #[inline]
    pub fn get_moves(self) -> LocationList {
        self.board.get_moves(self.turn)
    }

    /// Play `loc` for the player to move.
    ///
    /// The turn then passes to the opponent, unless the opponent cannot move, in
    /// which case it stays with the current player. This includes the move that
    /// ends the game. Illegal moves are returned as errors and never change the
    /// game.
    pub fn apply_move(self, loc: Location) -> Result<Self, MoveError> {
        let board = self.board.apply_move(loc, self.turn)?;

        let turn = if board.has_moves(!self.turn) {
            !self.turn
        } else {
            if !board.is_game_over() {
                debug!("{} has no legal move, {} plays again", !self.turn, self.turn);
            }
            self.turn
        };

        Ok(Self { board, turn })
    }

    /// Returns true if neither player can move.
    #[inline]
    pub fn is_finished(self) -> bool {
        self.board.is_game_over()
    }

    /// Count the discs of each player.
    #[inline]
    pub fn score(self) -> Score {
        self.board.score()
    }

    /// Whether the game is over, and if so who won.
    pub fn status(self) -> GameStatus {
        if !self.is_finished() {
            return GameStatus::InProgress;
        }

        match self.score().leader() {
            Some(player) => GameStatus::Completed(Outcome::Winner(player)),
            None => GameStatus::Completed(Outcome::Draw),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f, "{}", self.score())?;
        match self.status() {
            GameStatus::InProgress => write!(f, "{} to move", self.turn),
            GameStatus::Completed(Outcome::Winner(player)) => write!(f, "{} wins", player),
            GameStatus::Completed(Outcome::Draw) => f.write_str("Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: usize, y: usize) -> Location {
        Location::from_coords(x, y).unwrap()
    }

    #[test]
    fn turns_alternate() {
        let game = Game::new();
        assert_eq!(game.turn, Player::Black);
        let game = game.apply_move(loc(2, 3)).unwrap();
        assert_eq!(game.turn, Player::White);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn illegal_move_leaves_game_untouched() {
        let game = Game::new();
        assert!(game.apply_move(loc(0, 0)).is_err());
        // White's opening squares are not legal for Black.
        assert!(game.apply_move(loc(4, 2)).is_err());
        assert_eq!(game, Game::new());
    }

    #[test]
    fn opponent_without_reply_is_skipped() {
        // Both white discs sit between a black disc on the edge and an empty cell,
        // so White can never bracket anything.
        let board = Board::empty()
            .with_cell(loc(0, 0), Some(Player::Black))
            .with_cell(loc(1, 0), Some(Player::White))
            .with_cell(loc(0, 7), Some(Player::Black))
            .with_cell(loc(1, 7), Some(Player::White));
        let game = Game::from_parts(board, Player::Black).apply_move(loc(2, 0)).unwrap();

        assert!(!game.board.has_moves(Player::White));
        assert!(game.board.has_moves(Player::Black));
        assert_eq!(game.turn, Player::Black);
    }

    #[test]
    fn finished_game_reports_winner() {
        // Black captures the last white disc; nobody can move afterwards.
        let board = Board::empty()
            .with_cell(loc(0, 0), Some(Player::Black))
            .with_cell(loc(1, 0), Some(Player::White));
        let game = Game::from_parts(board, Player::Black).apply_move(loc(2, 0)).unwrap();

        assert!(game.is_finished());
        assert_eq!(game.turn, Player::Black);
        assert_eq!(
            game.status(),
            GameStatus::Completed(Outcome::Winner(Player::Black))
        );
    }

    #[test]
    fn equal_discs_is_a_draw() {
        let board = Board::empty()
            .with_cell(loc(0, 0), Some(Player::Black))
            .with_cell(loc(7, 7), Some(Player::White));
        let game = Game::from_parts(board, Player::White);
        assert_eq!(game.status(), GameStatus::Completed(Outcome::Draw));
    }
}
