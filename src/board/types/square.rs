//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, stored as (row, col).
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1; col 0 is file a.
/// Deserialization rejects coordinates outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SquareRepr", into = "SquareRepr")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from in-range coordinates.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not in `0..8`.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < 8 && col < 8, "square out of range");
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Row index (0-7, 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-7, 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Chess rank number (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.row as usize
    }

    /// File letter ('a'-'h')
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Index 0-63 in row-major order (a8=0, h1=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Inverse of [`Square::index`]; `None` if `idx >= 64`
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        Square::new(idx / 8, idx % 8)
    }

    /// The square displaced by (`dr`, `dc`), if it stays on the board
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let r = self.row as isize + dr;
        let c = self.col as isize + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

/// Serialized form of a square, checked on the way in
#[derive(Serialize, Deserialize)]
struct SquareRepr {
    row: u8,
    col: u8,
}

impl From<Square> for SquareRepr {
    fn from(sq: Square) -> Self {
        SquareRepr {
            row: sq.row,
            col: sq.col,
        }
    }
}

impl TryFrom<SquareRepr> for Square {
    type Error = SquareError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::try_from((usize::from(repr.row), usize::from(repr.col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square::at(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank {
            '1'..='8' => rank as usize - '0' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square::at(8 - rank, col))
    }
}
