//! Side, piece and cell types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two players. `First` moves first and its men advance toward row 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Row direction a man of this side moves in.
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Row on which a man of this side becomes a king.
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Side::First => 7,
            Side::Second => 0,
        }
    }

    /// Row this side starts on; the opponent's promotion row.
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 7,
        }
    }

    /// Notation character (`w` for First, `b` for Second)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Side::First => 'w',
            Side::Second => 'b',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Side> {
        match c {
            'w' => Some(Side::First),
            'b' => Some(Side::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "First"),
            Side::Second => write!(f, "Second"),
        }
    }
}

/// Piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Man,
    King,
}

impl Piece {
    pub const ALL: [Piece; 2] = [Piece::Man, Piece::King];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Piece::Man => 0,
            Piece::King => 1,
        }
    }

    /// Value used to rank captures in move ordering and delta pruning.
    #[inline]
    #[must_use]
    pub const fn capture_value(self) -> i32 {
        match self {
            Piece::Man => 100,
            Piece::King => 300,
        }
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Man(Side),
    King(Side),
}

impl Cell {
    #[must_use]
    pub const fn occupant(self) -> Option<(Side, Piece)> {
        match self {
            Cell::Empty => None,
            Cell::Man(side) => Some((side, Piece::Man)),
            Cell::King(side) => Some((side, Piece::King)),
        }
    }

    #[must_use]
    pub const fn from_occupant(side: Side, piece: Piece) -> Cell {
        match piece {
            Piece::Man => Cell::Man(side),
            Piece::King => Cell::King(side),
        }
    }

    /// Notation character: lowercase for men, uppercase for kings, `.` for empty.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Man(side) => side.to_char(),
            Cell::King(side) => side.to_char().to_ascii_uppercase(),
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::Man(Side::First)),
            'W' => Some(Cell::King(Side::First)),
            'b' => Some(Cell::Man(Side::Second)),
            'B' => Some(Cell::King(Side::Second)),
            _ => None,
        }
    }
}
