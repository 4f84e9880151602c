//! Compact text notation for positions.
//!
//! Eight rows from row 8 down to row 1 separated by `/`, `w`/`W` for First
//! men/kings, `b`/`B` for Second men/kings, digits for runs of empty
//! squares; then the side to move and an optional move counter:
//!
//! ```text
//! b1b1b1b1/1b1b1b1b/8/8/8/8/w1w1w1w1/1w1w1w1w w 0
//! ```

use std::str::FromStr;

use super::error::{MoveParseError, NotationError};
use super::{Board, Cell, GameState, Move, Side, Square};

pub const INITIAL_NOTATION: &str = "b1b1b1b1/1b1b1b1b/8/8/8/8/w1w1w1w1/1w1w1w1w w 0";

impl GameState {
    /// Parse a position from notation.
    pub fn try_from_notation(notation: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = notation.split_whitespace().collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(NotationError::WrongFieldCount { found: parts.len() });
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(NotationError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (i, row_str) in rows.iter().enumerate() {
            let row = 7 - i;
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                let cell = Cell::from_char(c)
                    .filter(|cell| *cell != Cell::Empty)
                    .ok_or(NotationError::InvalidCell { char: c })?;
                if col >= 8 {
                    return Err(NotationError::WrongColCount { row, cols: col + 1 });
                }
                let square = Square(row, col);
                if !square.is_dark() {
                    return Err(NotationError::LightSquare { square });
                }
                if let Some((side, piece)) = cell.occupant() {
                    board.put(square, side, piece);
                }
                col += 1;
            }
            if col != 8 {
                return Err(NotationError::WrongColCount { row, cols: col });
            }
        }

        let side = match parts[1] {
            "w" => Side::First,
            "b" => Side::Second,
            other => {
                return Err(NotationError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let move_count = match parts.get(2) {
            Some(count) => count
                .parse::<u32>()
                .map_err(|_| NotationError::InvalidMoveCount {
                    found: (*count).to_string(),
                })?,
            None => 0,
        };

        Ok(GameState::from_parts(board, side, move_count))
    }

    /// Parse a position from notation.
    ///
    /// # Panics
    ///
    /// Panics if the notation is invalid. Use [`GameState::try_from_notation`]
    /// to handle errors.
    #[must_use]
    pub fn from_notation(notation: &str) -> Self {
        Self::try_from_notation(notation)
            .unwrap_or_else(|e| panic!("invalid notation {notation:?}: {e}"))
    }

    #[must_use]
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in (0..8).rev() {
            let mut empty = 0;
            for col in 0..8 {
                match self.cell(Square(row, col)) {
                    Cell::Empty => empty += 1,
                    cell => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(cell.to_char());
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(self.side_to_move.to_char());
        out.push(' ');
        out.push_str(&self.move_count.to_string());
        out
    }

    /// Parse `<from><to>` and check it against the legal moves.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let mv: Move = text.parse()?;
        if self.generate_moves().contains(mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }
}

impl FromStr for GameState {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_notation(s)
    }
}
