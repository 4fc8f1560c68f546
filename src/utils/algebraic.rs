//! Square type and conversions between algebraic labels and grid addresses.
//!
//! A `Square` is stored as its zero-based grid address. Rank indexing is
//! inverted from the printed rank number (`'8' -> 0`, `'1' -> 7`) so that
//! walking the grid top-to-bottom yields a board as seen from White's side.
//! Legality logic only ever looks at rank/file deltas, so this convention
//! matters for text dumps and nothing else.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessErrors, ChessResult};

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

const FILE_CHARS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A board square. Only constructible through validated paths, so every
/// `Square` value is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank_index: u8,
    file_index: u8,
}

impl Square {
    /// Parse an algebraic label such as `"e4"`.
    pub fn parse(label: &str) -> ChessResult<Self> {
        let bytes = label.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessErrors::InvalidSquare(label.to_owned()));
        }

        let file = bytes[0];
        let rank = bytes[1];

        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessErrors::InvalidSquare(label.to_owned()));
        }

        Ok(Self {
            rank_index: b'8' - rank,
            file_index: file - b'a',
        })
    }

    /// Build a square from a grid address, or `None` when either index is
    /// outside `0..8`.
    #[inline]
    pub const fn from_grid(rank_index: usize, file_index: usize) -> Option<Self> {
        if rank_index >= BOARD_SIZE || file_index >= BOARD_SIZE {
            return None;
        }
        Some(Self {
            rank_index: rank_index as u8,
            file_index: file_index as u8,
        })
    }

    /// Grid address as `(rank_index, file_index)`.
    #[inline]
    pub const fn to_grid(self) -> (usize, usize) {
        (self.rank_index as usize, self.file_index as usize)
    }

    #[inline]
    pub const fn rank_index(self) -> usize {
        self.rank_index as usize
    }

    #[inline]
    pub const fn file_index(self) -> usize {
        self.file_index as usize
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub const fn file_char(self) -> char {
        FILE_CHARS[self.file_index as usize]
    }

    /// Printed rank digit, `'1'..='8'`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.rank_index) as char
    }

    /// Step by a `(rank_delta, file_delta)` offset. Returns `None` when the
    /// result walks off the board.
    #[inline]
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank_index as i16 + rank_delta as i16;
        let file = self.file_index as i16 + file_delta as i16;
        if !(0..BOARD_SIZE as i16).contains(&rank) || !(0..BOARD_SIZE as i16).contains(&file) {
            return None;
        }
        Self::from_grid(rank as usize, file as usize)
    }

    /// All 64 squares in grid order: a8, b8, ... h8, a7, ... h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| {
            (0..BOARD_SIZE).map(move |file| Square {
                rank_index: rank as u8,
                file_index: file as u8,
            })
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::parse(label)
    }
}
