//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing notation.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Side, Square};
//!
//! let state = BoardBuilder::new()
//!     .man(Square(2, 3), Side::First)
//!     .king(Square(5, 4), Side::Second)
//!     .side_to_move(Side::Second)
//!     .build();
//! assert_eq!(state.piece_count(Side::First), 1);
//! ```

use super::{Board, GameState, Piece, Side, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Side, Piece)>,
    side_to_move: Side,
    move_count: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with First to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Side::First,
            move_count: 0,
        }
    }

    /// Create a builder starting from the initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::initial();
        let mut builder = Self::new();
        for side in Side::BOTH {
            for sq in board.men(side).iter() {
                builder.pieces.push((sq, side, Piece::Man));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever stood on the square.
    ///
    /// # Panics
    ///
    /// Panics if `square` is off the board.
    #[must_use]
    pub fn piece(mut self, square: Square, side: Side, piece: Piece) -> Self {
        assert!(
            Square::new(square.row(), square.col()).is_some(),
            "square {square:?} is off the board"
        );
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, side, piece));
        self
    }

    #[must_use]
    pub fn man(self, square: Square, side: Side) -> Self {
        self.piece(square, side, Piece::Man)
    }

    #[must_use]
    pub fn king(self, square: Square, side: Side) -> Self {
        self.piece(square, side, Piece::King)
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    #[must_use]
    pub const fn move_count(mut self, count: u32) -> Self {
        self.move_count = count;
        self
    }

    /// Build the position, computing its hash.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut board = Board::empty();
        for (sq, side, piece) in self.pieces {
            board.put(sq, side, piece);
        }
        GameState::from_parts(board, self.side_to_move, self.move_count)
    }
}
