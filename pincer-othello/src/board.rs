//! The Othello rules engine.
//!
//! A [`Board`] is a small `Copy` value: every operation that changes the board
//! returns a new one and leaves its input untouched.

use crate::bitboard::{self, Bitboard};
use crate::{utils, Location, LocationList, Player, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The serialized form of a [`Board`]: rows indexed by `y`, each holding the
/// cells of that row indexed by `x`. `None` marks an empty cell.
pub type Grid = [[Option<Player>; EDGE_LENGTH]; EDGE_LENGTH];

/// The discs of both players.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "Grid", from = "Grid")]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

/// Disc counts for both players.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// Reasons a move cannot be applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum MoveError {
    #[display(fmt = "({}, {}) is off the board", x, y)]
    OffBoard { x: usize, y: usize },
    #[display(fmt = "{} is already occupied", location)]
    Occupied { location: Location },
    #[display(fmt = "{} captures nothing for {}", location, player)]
    NoCapture { location: Location, player: Player },
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: White on `(3, 3)` and `(4, 4)`,
    /// Black on `(4, 3)` and `(3, 4)`.
    pub const fn new() -> Self {
        Self {
            black: bitboard::BLACK_START,
            white: bitboard::WHITE_START,
        }
    }

    /// A board with nothing on it.
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    /// Build a board from each player's discs.
    /// Panics if the two bitboards overlap.
    pub fn from_bitboards(black: Bitboard, white: Bitboard) -> Self {
        assert!((black & white).is_empty(), "players overlap");
        Self { black, white }
    }

    /// Get the discs belonging to `player`.
    #[inline]
    pub fn bitboard(self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Get the locations of `player`'s discs.
    #[inline]
    pub fn get_discs(self, player: Player) -> LocationList {
        self.bitboard(player).into()
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.black | self.white
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    /// Get the owner of the disc at `loc`, if any.
    pub fn cell(self, loc: Location) -> Option<Player> {
        let mask: Bitboard = loc.into();
        if !(self.black & mask).is_empty() {
            Some(Player::Black)
        } else if !(self.white & mask).is_empty() {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Get the owner of the disc at `(x, y)`. Off-board cells are empty.
    pub fn cell_at(self, x: usize, y: usize) -> Option<Player> {
        Location::from_coords(x, y).and_then(|loc| self.cell(loc))
    }

    /// Return a copy of this board with the cell at `loc` set to `cell`, without
    /// any captures. Intended for setting up positions.
    pub fn with_cell(self, loc: Location, cell: Option<Player>) -> Self {
        let mask: Bitboard = loc.into();
        let mut board = Self {
            black: self.black & !mask,
            white: self.white & !mask,
        };
        match cell {
            Some(Player::Black) => board.black |= mask,
            Some(Player::White) => board.white |= mask,
            None => {}
        }
        board
    }

    /// Get the legal moves for `player`, in row-major order.
    #[inline]
    pub fn get_moves(self, player: Player) -> LocationList {
        let active = self.bitboard(player);
        let opponent = self.bitboard(!player);
        bitboard::get_move_mask(active, opponent).into()
    }

    /// Returns whether `player` has at least one legal move.
    #[inline]
    pub fn has_moves(self, player: Player) -> bool {
        !self.get_moves(player).is_empty()
    }

    /// Returns whether `player` may place a disc at `loc`: the cell must be empty
    /// and the disc must bracket at least one contiguous run of opponent discs.
    pub fn is_valid_move(self, loc: Location, player: Player) -> bool {
        self.check_move(loc, player).is_ok()
    }

    /// Like [`Board::is_valid_move`], addressing the cell by coordinates.
    /// Coordinates off the board are never valid.
    pub fn is_valid_move_at(self, x: usize, y: usize, player: Player) -> bool {
        Location::from_coords(x, y).map_or(false, |loc| self.is_valid_move(loc, player))
    }

    /// Place a disc for `player` at `loc` and flip every captured run.
    /// Fails without side effects if the move is illegal.
    pub fn apply_move(self, loc: Location, player: Player) -> Result<Self, MoveError> {
        let flips = self.check_move(loc, player).map_err(|err| {
            debug!("rejected move for {}: {}", player, err);
            err
        })?;
        Ok(self.place(loc, player, flips))
    }

    /// Like [`Board::apply_move`], addressing the cell by coordinates.
    pub fn apply_move_at(self, x: usize, y: usize, player: Player) -> Result<Self, MoveError> {
        let loc = Location::from_coords(x, y).ok_or(MoveError::OffBoard { x, y })?;
        self.apply_move(loc, player)
    }

    /// Make a move for `player` without checking that it is legal.
    /// Results in an inconsistent board if `loc` is occupied; an empty `loc`
    /// that captures nothing just gains a disc.
    #[inline]
    pub fn play_unchecked(self, loc: Location, player: Player) -> Self {
        let flips =
            bitboard::get_flip_mask(self.bitboard(player), self.bitboard(!player), loc.into());
        self.place(loc, player, flips)
    }

    /// Count the discs of each player.
    #[inline]
    pub fn score(self) -> Score {
        Score {
            black: self.black.count_occupied(),
            white: self.white.count_occupied(),
        }
    }

    /// The game is over when neither player can move.
    pub fn is_game_over(self) -> bool {
        !self.has_moves(Player::Black) && !self.has_moves(Player::White)
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Option<Player>> {
        (0..NUM_SPACES as u8).map(move |index| self.cell(Location::from_index(index)))
    }

    /// Compute the discs flipped by a legal move, or why the move is illegal.
    fn check_move(self, loc: Location, player: Player) -> Result<Bitboard, MoveError> {
        let mask: Bitboard = loc.into();
        if !(self.occupied_mask() & mask).is_empty() {
            return Err(MoveError::Occupied { location: loc });
        }

        let flips = bitboard::get_flip_mask(self.bitboard(player), self.bitboard(!player), mask);
        if flips.is_empty() {
            return Err(MoveError::NoCapture {
                location: loc,
                player,
            });
        }
        Ok(flips)
    }

    fn place(self, loc: Location, player: Player, flips: Bitboard) -> Self {
        let mask: Bitboard = loc.into();
        let active = self.bitboard(player) | flips | mask;
        let opponent = self.bitboard(!player) & !flips;

        match player {
            Player::Black => Self {
                black: active,
                white: opponent,
            },
            Player::White => Self {
                black: opponent,
                white: active,
            },
        }
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        let mut board = Self::empty();
        for (y, row) in grid.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if let Some(loc) = Location::from_coords(x, y) {
                    board = board.with_cell(loc, cell);
                }
            }
        }
        board
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        let mut grid: Grid = [[None; EDGE_LENGTH]; EDGE_LENGTH];
        for (index, cell) in board.cells().enumerate() {
            grid[index / EDGE_LENGTH][index % EDGE_LENGTH] = cell;
        }
        grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells().map(|cell| match cell {
                Some(Player::Black) => 'X',
                Some(Player::White) => 'O',
                None => '.',
            }),
            f,
        )
    }
}

impl Score {
    /// The number of discs `player` has.
    #[inline]
    pub fn get(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// The number of empty cells.
    #[inline]
    pub fn empty(self) -> u8 {
        NUM_SPACES as u8 - self.black - self.white
    }

    /// The player with more discs, or None on a tie.
    pub fn leader(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - {} White", self.black, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: usize, y: usize) -> Location {
        Location::from_coords(x, y).unwrap()
    }

    fn coords(moves: LocationList) -> Vec<(usize, usize)> {
        moves.map(Location::to_coords).collect()
    }

    #[test]
    fn initial_layout() {
        let board = Board::new();
        assert_eq!(board.cell_at(3, 3), Some(Player::White));
        assert_eq!(board.cell_at(3, 4), Some(Player::Black));
        assert_eq!(board.cell_at(4, 3), Some(Player::Black));
        assert_eq!(board.cell_at(4, 4), Some(Player::White));
        assert_eq!(board.cells().filter(Option::is_some).count(), 4);
        assert_eq!(board.score(), Score { black: 2, white: 2 });
    }

    #[test]
    fn opening_moves_in_scan_order() {
        let board = Board::new();
        assert_eq!(
            coords(board.get_moves(Player::Black)),
            vec![(3, 2), (2, 3), (5, 4), (4, 5)]
        );
        assert_eq!(
            coords(board.get_moves(Player::White)),
            vec![(4, 2), (5, 3), (2, 4), (3, 5)]
        );
    }

    #[test]
    fn opening_capture() {
        let board = Board::new().apply_move_at(2, 3, Player::Black).unwrap();
        assert_eq!(board.cell_at(2, 3), Some(Player::Black));
        assert_eq!(board.cell_at(3, 3), Some(Player::Black));
        assert_eq!(board.cell_at(4, 3), Some(Player::Black));
        assert_eq!(board.score(), Score { black: 4, white: 1 });
    }

    #[test]
    fn captures_in_several_directions() {
        // Black at (2, 2) brackets white runs to the east and to the south.
        let board = Board::empty()
            .with_cell(loc(0, 2), Some(Player::Black))
            .with_cell(loc(1, 2), Some(Player::White))
            .with_cell(loc(3, 2), Some(Player::White))
            .with_cell(loc(4, 2), Some(Player::Black))
            .with_cell(loc(2, 3), Some(Player::White))
            .with_cell(loc(2, 4), Some(Player::White))
            .with_cell(loc(2, 5), Some(Player::Black))
            .with_cell(loc(3, 3), Some(Player::White));

        let next = board.apply_move_at(2, 2, Player::Black).unwrap();
        for &(x, y) in &[(1, 2), (3, 2), (2, 3), (2, 4)] {
            assert_eq!(next.cell_at(x, y), Some(Player::Black), "({}, {})", x, y);
        }
        // Nothing closes the diagonal run.
        assert_eq!(next.cell_at(3, 3), Some(Player::White));
        assert_eq!(next.score(), Score { black: 8, white: 1 });
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let board = Board::new();
        assert!(!board.is_valid_move_at(3, 3, Player::Black));
        assert_eq!(
            board.apply_move_at(3, 3, Player::Black),
            Err(MoveError::Occupied { location: loc(3, 3) })
        );
    }

    #[test]
    fn move_without_capture_is_rejected() {
        let board = Board::new();
        assert!(!board.is_valid_move_at(0, 0, Player::Black));
        assert_eq!(
            board.apply_move_at(0, 0, Player::Black),
            Err(MoveError::NoCapture {
                location: loc(0, 0),
                player: Player::Black
            })
        );
        // The original board is unchanged.
        assert_eq!(board, Board::new());
    }

    #[test]
    fn off_board_is_rejected() {
        let board = Board::new();
        assert!(!board.is_valid_move_at(8, 3, Player::Black));
        assert_eq!(
            board.apply_move_at(3, 8, Player::White),
            Err(MoveError::OffBoard { x: 3, y: 8 })
        );
    }

    #[test]
    fn run_ending_in_empty_cell_is_not_a_capture() {
        let board = Board::empty()
            .with_cell(loc(1, 0), Some(Player::White))
            .with_cell(loc(2, 0), Some(Player::White));
        assert!(!board.is_valid_move_at(0, 0, Player::Black));
        assert!(!board.is_valid_move_at(3, 0, Player::Black));
    }

    #[test]
    fn one_stuck_player_is_not_game_over() {
        // White has no disc to bracket with, but Black can capture at (2, 0).
        let board = Board::empty()
            .with_cell(loc(0, 0), Some(Player::Black))
            .with_cell(loc(1, 0), Some(Player::White));
        assert!(!board.has_moves(Player::White));
        assert!(board.has_moves(Player::Black));
        assert!(!board.is_game_over());
    }

    #[test]
    fn game_over_when_both_players_are_stuck() {
        let board = Board::empty().with_cell(loc(0, 0), Some(Player::Black));
        assert!(board.is_game_over());
        assert!(!Board::new().is_game_over());
    }

    #[test]
    fn score_helpers() {
        let score = Score { black: 10, white: 7 };
        assert_eq!(score.empty(), 47);
        assert_eq!(score.get(Player::White), 7);
        assert_eq!(score.leader(), Some(Player::Black));
        assert_eq!(Score { black: 3, white: 3 }.leader(), None);
    }

    #[test]
    fn grid_round_trip() {
        let board = Board::new().apply_move_at(2, 3, Player::Black).unwrap();
        let grid = Grid::from(board);
        assert_eq!(grid[3][2], Some(Player::Black));
        assert_eq!(grid[4][4], Some(Player::White));
        assert_eq!(Board::from(grid), board);
    }

    #[test]
    fn display() {
        let expected = "  A B C D E F G H\n\
                        1 . . . . . . . .\n\
                        2 . . . . . . . .\n\
                        3 . . . . . . . .\n\
                        4 . . . O X . . .\n\
                        5 . . . X O . . .\n\
                        6 . . . . . . . .\n\
                        7 . . . . . . . .\n\
                        8 . . . . . . . .";
        assert_eq!(Board::new().to_string(), expected);
    }
}
