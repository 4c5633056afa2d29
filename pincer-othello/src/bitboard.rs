//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] operations are unchecked and may produce an
//! inconsistent board if invalid data is passed.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left cell `(0, 0)`, and bits proceed in row-major order,
//! so cell `(x, y)` is bit `63 - (8 * y + x)`.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: `(4, 3)` and `(3, 4)`.
pub const BLACK_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

/// Starting bitboard for White: `(3, 3)` and `(4, 4)`.
pub const WHITE_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// Every cell except the leftmost column (`x == 0`).
const NOT_FIRST_COLUMN: u64 = 0x7f7f_7f7f_7f7f_7f7f;

/// Every cell except the rightmost column (`x == 7`).
const NOT_LAST_COLUMN: u64 = 0xfefe_fefe_fefe_fefe;

/// The eight compass directions as `(dx, dy)` offsets.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// A bitboard with no locations set.
    pub const EMPTY: Self = Self(0);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Move every bit one cell along `(dx, dy)`, dropping bits that leave the board.
    #[inline]
    pub fn shift(self, (dx, dy): (i8, i8)) -> Self {
        let amount = 8 * i32::from(dy) + i32::from(dx);
        let shifted = if amount >= 0 {
            self.0 >> amount
        } else {
            self.0 << -amount
        };

        // Bits that crossed a row boundary land in the opposite edge column.
        match dx {
            1 => Self(shifted & NOT_FIRST_COLUMN),
            -1 => Self(shifted & NOT_LAST_COLUMN),
            _ => Self(shifted),
        }
    }
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
/// Undefined behavior if an invalid Othello board is specified.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active | opponent);
    let mut moves = Bitboard::EMPTY;

    for &direction in DIRECTIONS.iter() {
        // Smear our pieces across contiguous opponent runs. A run is at most six long.
        let mut run = active.shift(direction) & opponent;
        for _ in 0..5 {
            run |= run.shift(direction) & opponent;
        }

        // One step past the end of a run, an empty cell brackets it.
        moves |= run.shift(direction) & empties;
    }

    moves
}

/// Compute the mask of opponent pieces captured by placing a piece at `move_mask`.
/// `move_mask` must be a one-hot bitboard. Returns an empty mask if the move
/// captures nothing; does not check that the target cell is empty.
#[inline]
pub fn get_flip_mask(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    let mut flips = Bitboard::EMPTY;

    for &direction in DIRECTIONS.iter() {
        let mut run = Bitboard::EMPTY;
        let mut cursor = move_mask.shift(direction);

        while !(cursor & opponent).is_empty() {
            run |= cursor;
            cursor = cursor.shift(direction);
        }

        // The run only flips when it is closed by one of our own pieces.
        if !(cursor & active).is_empty() {
            flips |= run;
        }
    }

    flips
}

/// Compute an updated board after a given move is made, returning new bitboards
/// for the active player and the opponent. `move_mask` must be a one-hot bitboard
/// indicating the move location. Undefined behavior if an invalid Othello board
/// or `move_mask` is provided.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let flip_mask = get_flip_mask(active, opponent, move_mask);

    let new_active = active | flip_mask | move_mask;
    let new_opponent = opponent ^ flip_mask;

    (new_active, new_opponent)
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = !(self.bitboard & bitmask).is_empty();
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}
