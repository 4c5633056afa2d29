//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, addressed as `(x, y)`: `x` is the column and
/// `y` the row, both in `0..8`, with `(0, 0)` in the upper-left corner.
/// In the context of a board and a player, a location is also a move.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into, Serialize, Deserialize)]
#[serde(into = "Coords", try_from = "Coords")]
pub struct Location(Bitboard);

/// A list of locations on the Othello board, which can be iterated to retrieve them.
/// Iteration is in row-major order: top row first, left to right within a row.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

/// Plain `(x, y)` coordinates, the serialized form of a [`Location`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coords {
    pub x: usize,
    pub y: usize,
}

impl Location {
    /// Convert from a one-hot [`Bitboard`].
    #[inline]
    pub fn from_onehot(bitboard: Bitboard) -> Self {
        assert_eq!(bitboard.count_occupied(), 1);
        Self::from_onehot_unchecked(bitboard)
    }

    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` has more than one location set.
    #[inline]
    pub fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from a row-major square index (`8 * y + x`).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < EDGE_LENGTH * EDGE_LENGTH);
        Self(Bitboard::from(1u64 << (63 - index)))
    }

    /// Convert into a row-major square index (`8 * y + x`).
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.leading_zeros() as u8
    }

    /// Convert from column and row coordinates.
    /// Returns None if the coordinates are off the board.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x >= EDGE_LENGTH || y >= EDGE_LENGTH {
            return None;
        }
        Some(Self::from_index((y * EDGE_LENGTH + x) as u8))
    }

    /// Get the column and row coordinates as `(x, y)`.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index() as usize;
        (index % EDGE_LENGTH, index / EDGE_LENGTH)
    }

    /// The column of this location.
    #[inline]
    pub fn x(self) -> usize {
        self.to_coords().0
    }

    /// The row of this location.
    #[inline]
    pub fn y(self) -> usize {
        self.to_coords().1
    }
}

impl From<Location> for Coords {
    fn from(loc: Location) -> Self {
        let (x, y) = loc.to_coords();
        Coords { x, y }
    }
}

impl TryFrom<Coords> for Location {
    type Error = ParseLocationError;

    fn try_from(coords: Coords) -> Result<Self, Self::Error> {
        Location::from_coords(coords.x, coords.y).ok_or(ParseLocationError)
    }
}

/// Convert this [`Location`] into string notation ("C4" is `(2, 3)`).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_coords();
        let col_str = "ABCDEFGH".chars().nth(x).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(y).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        !(loc.0 & self.0).is_empty()
    }

    /// Returns whether this list has no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("C4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let x = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let y = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if y == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(x, y - 1).ok_or(ParseLocationError)
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.is_empty() {
            return None;
        }

        // The most significant set bit is the earliest cell in row-major order.
        let bitboard: u64 = self.0.into();
        let next_move: Bitboard = (1u64 << (63 - bitboard.leading_zeros())).into();
        self.0 ^= next_move;

        Some(Location::from_onehot_unchecked(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
