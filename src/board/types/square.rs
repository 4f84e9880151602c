//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is First's back row, row 7 is Second's. Columns are lettered
/// `a`..`h` in text form, rows `1`..`8`, so `Square(0, 1)` prints as `b1`.
///
/// Both fields must be below 8. `Square::new` and `TryFrom` check this; the
/// tuple constructor does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 * 8 + self.1
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// The square `(row + dr, col + dc)`, or `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Playable squares are the ones with odd `row + col`.
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }

    /// `|row - 3.5| + |col - 3.5|`. Each half-integer term is odd when
    /// doubled, so the doubled sum is even and the result is exact.
    #[inline]
    #[must_use]
    pub const fn centre_distance(self) -> i32 {
        let dr = (2 * self.0 as i32 - 7).abs();
        let dc = (2 * self.1 as i32 - 7).abs();
        (dr + dc) / 2
    }

    #[inline]
    #[must_use]
    pub const fn manhattan(self, other: Square) -> i32 {
        (self.0 as i32 - other.0 as i32).abs() + (self.1 as i32 - other.1 as i32).abs()
    }

    #[inline]
    #[must_use]
    pub const fn on_row_edge(self) -> bool {
        self.0 == 0 || self.0 == 7
    }

    #[inline]
    #[must_use]
    pub const fn on_col_edge(self) -> bool {
        self.1 == 0 || self.1 == 7
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
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
        Ok(Square(row, col))
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
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        let col = file as usize - 'a' as usize;
        let row = rank as usize - '1' as usize;
        Ok(Square(row, col))
    }
}
