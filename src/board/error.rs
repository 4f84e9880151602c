//! Error types for board operations.

use std::fmt;

use super::{Side, Square};

/// Error type for position notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Notation has the wrong number of whitespace-separated fields (needs 2 or 3)
    WrongFieldCount { found: usize },
    /// Board field does not have exactly 8 rows
    WrongRowCount { found: usize },
    /// A row does not describe exactly 8 cells
    WrongColCount { row: usize, cols: usize },
    /// Invalid piece character in the board field
    InvalidCell { char: char },
    /// A piece stands on a light square
    LightSquare { square: Square },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Move counter is not a non-negative integer
    InvalidMoveCount { found: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongFieldCount { found } => {
                write!(f, "Notation must have 2 or 3 fields, found {found}")
            }
            NotationError::WrongRowCount { found } => {
                write!(f, "Board must have 8 rows, found {found}")
            }
            NotationError::WrongColCount { row, cols } => {
                write!(f, "Row {row} describes {cols} cells, expected 8")
            }
            NotationError::InvalidCell { char } => {
                write!(f, "Invalid cell character '{char}' in notation")
            }
            NotationError::LightSquare { square } => {
                write!(f, "Piece on light square {square}")
            }
            NotationError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            NotationError::InvalidMoveCount { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Squares are not one or two diagonal steps apart
    NotDiagonal { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::NotDiagonal { notation } => {
                write!(f, "Move '{notation}' is not a diagonal step or jump")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A move that cannot be applied to a position at all.
///
/// Moves produced by move generation never trigger these; they signal that
/// the caller and the rules disagree about the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    EmptySource { square: Square },
    /// The source piece belongs to the side not on move
    NotSideToMove { square: Square, side: Side },
    /// The destination square is occupied
    DestinationOccupied { square: Square },
    /// Source and destination are not one or two diagonal steps apart
    NotDiagonal { from: Square, to: Square },
    /// A man tried to move away from the promotion row
    BackwardMan { from: Square, to: Square },
    /// A jump over a square without an enemy piece
    NothingToCapture { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { square } => {
                write!(f, "No piece on source square {square}")
            }
            MoveError::NotSideToMove { square, side } => {
                write!(f, "Piece on {square} does not belong to {side}, the side to move")
            }
            MoveError::DestinationOccupied { square } => {
                write!(f, "Destination square {square} is occupied")
            }
            MoveError::NotDiagonal { from, to } => {
                write!(f, "{from}{to} is not a diagonal step or jump")
            }
            MoveError::BackwardMan { from, to } => {
                write!(f, "Man cannot move backward from {from} to {to}")
            }
            MoveError::NothingToCapture { square } => {
                write!(f, "No enemy piece to capture on {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// A search request the engine refuses to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The game is already over (a side has no pieces or the move cap passed)
    TerminalPosition { move_count: u32 },
    /// The position has the other side to move
    WrongSide { engine: Side, to_move: Side },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::TerminalPosition { move_count } => {
                write!(f, "Cannot search a finished game (move {move_count})")
            }
            SearchError::WrongSide { engine, to_move } => {
                write!(f, "Engine plays {engine} but {to_move} is to move")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_error_messages() {
        let err = NotationError::WrongRowCount { found: 7 };
        assert_eq!(err.to_string(), "Board must have 8 rows, found 7");

        let err = NotationError::InvalidCell { char: 'x' };
        assert!(err.to_string().contains("'x'"));

        let err = NotationError::LightSquare {
            square: Square(0, 0),
        };
        assert!(err.to_string().contains("a1"));
    }

    #[test]
    fn move_error_messages() {
        let err = MoveError::EmptySource {
            square: Square(2, 1),
        };
        assert_eq!(err.to_string(), "No piece on source square b3");

        let err = MoveError::NotSideToMove {
            square: Square(5, 0),
            side: Side::First,
        };
        assert!(err.to_string().contains("First"));
    }

    #[test]
    fn square_error_messages() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
        let err = SquareError::InvalidNotation {
            notation: "z9".into(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<NotationError>();
        assert_error::<MoveParseError>();
        assert_error::<SquareError>();
        assert_error::<MoveError>();
        assert_error::<SearchError>();
    }
}
