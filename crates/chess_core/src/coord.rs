//! Board coordinates.
//!
//! A [`Coordinate`] is a validated (file, rank) pair. File 0 is the a-file and
//! rank 0 is White's home rank, so `e2` is `(4, 1)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChessError, ChessResult};

/// Number of files and ranks on the board.
pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    // Ordered rank-first so sorted sets read a1, b1, .., h8.
    rank: u8,
    file: u8,
}

impl Coordinate {
    /// Builds a coordinate, failing with `OutOfBounds` outside `[0, 8)`.
    pub fn new(file: i8, rank: i8) -> ChessResult<Self> {
        if in_bounds(file, rank) {
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessError::OutOfBounds { file, rank })
        }
    }

    /// Const constructor for squares known to be on the board.
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square off the board");
        Self { file, rank }
    }

    pub(crate) const fn from_index(idx: usize) -> Self {
        Self::at((idx % 8) as u8, (idx / 8) as u8)
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Square index 0..64 with a1 = 0 and h8 = 63.
    #[inline]
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The coordinate `dx` files and `dy` ranks away from `self`.
    pub fn from_offset(self, dx: i8, dy: i8) -> ChessResult<Self> {
        Self::new(self.file as i8 + dx, self.rank as i8 + dy)
    }

    /// True if stepping `(dx, dy)` from `self` stays on the board.
    #[inline]
    pub fn is_offset_within_board(self, dx: i8, dy: i8) -> bool {
        in_bounds(self.file as i8 + dx, self.rank as i8 + dy)
    }

    /// Infallible stepping used by the generators once the bounds check passed.
    #[inline]
    pub(crate) fn step(self, dx: i8, dy: i8) -> Option<Self> {
        if self.is_offset_within_board(dx, dy) {
            Some(Self {
                file: (self.file as i8 + dx) as u8,
                rank: (self.rank as i8 + dy) as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..64).map(Self::from_index)
    }
}

#[inline]
fn in_bounds(file: i8, rank: i8) -> bool {
    (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        let rank = (b'1' + self.rank) as char;
        write!(f, "{file}{rank}")
    }
}

/// Wire form so deserialized coordinates go through the bounds check.
#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    file: i8,
    rank: i8,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = ChessError;

    fn try_from(raw: RawCoordinate) -> ChessResult<Self> {
        Coordinate::new(raw.file, raw.rank)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        RawCoordinate {
            file: c.file as i8,
            rank: c.rank as i8,
        }
    }
}

#[cfg(test)]
#[path = "coord_tests.rs"]
mod coord_tests;
