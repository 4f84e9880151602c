use std::fmt;

use super::{Bitboard, Cell, Piece, Side, Square};
use crate::zobrist::{piece_key, side_key};

/// Once the move counter exceeds this, the game is over.
pub const MAX_MOVE_COUNT: u32 = 100;

/// Undo record returned by [`GameState::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured: Option<Piece>,
    pub(crate) promoted: bool,
    pub(crate) previous_hash: u64,
}

/// Piece placement: men and kings of each side as bitboards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    // pieces[side][piece]
    pub(crate) pieces: [[Bitboard; 2]; 2],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 2]; 2],
        }
    }

    /// The starting layout: two rows of men per side on the dark squares.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for row in 0..2 {
            for col in 0..8 {
                let sq = Square(row, col);
                if sq.is_dark() {
                    board.put(sq, Side::First, Piece::Man);
                }
                let sq = Square(7 - row, col);
                if sq.is_dark() {
                    board.put(sq, Side::Second, Piece::Man);
                }
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn men(&self, side: Side) -> Bitboard {
        self.pieces[side.index()][Piece::Man.index()]
    }

    #[inline]
    #[must_use]
    pub fn kings(&self, side: Side) -> Bitboard {
        self.pieces[side.index()][Piece::King.index()]
    }

    /// All pieces of one side.
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, side: Side) -> Bitboard {
        self.men(side) | self.kings(side)
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(Side::First) | self.occupied_by(Side::Second)
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self, side: Side) -> u32 {
        self.occupied_by(side).popcount()
    }

    #[inline]
    #[must_use]
    pub fn total_pieces(&self) -> u32 {
        self.occupied().popcount()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Side, Piece)> {
        for side in Side::BOTH {
            for piece in Piece::ALL {
                if self.pieces[side.index()][piece.index()].contains(sq) {
                    return Some((side, piece));
                }
            }
        }
        None
    }

    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        match self.piece_at(sq) {
            Some((side, piece)) => Cell::from_occupant(side, piece),
            None => Cell::Empty,
        }
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, side: Side, piece: Piece) {
        self.pieces[side.index()][piece.index()].set(sq);
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square, side: Side, piece: Piece) {
        self.pieces[side.index()][piece.index()].clear(sq);
    }
}

/// A position plus the side to move and the move counter.
///
/// The Zobrist hash is kept in step with every placement change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Side,
    pub(crate) move_count: u32,
    pub(crate) hash: u64,
}

impl GameState {
    /// The initial position with First to move.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_parts(Board::initial(), Side::First, 0)
    }

    #[must_use]
    pub fn from_parts(board: Board, side_to_move: Side, move_count: u32) -> Self {
        let mut state = GameState {
            board,
            side_to_move,
            move_count,
            hash: 0,
        };
        state.hash = state.calculate_hash();
        state
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.board.cell(sq)
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self, side: Side) -> u32 {
        self.board.piece_count(side)
    }

    /// Recompute the hash from scratch.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut hash = side_key(self.side_to_move);
        for side in Side::BOTH {
            for piece in Piece::ALL {
                for sq in self.board.pieces[side.index()][piece.index()].iter() {
                    hash ^= piece_key(side, piece, sq);
                }
            }
        }
        hash
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, side: Side, piece: Piece) {
        self.board.put(sq, side, piece);
        self.hash ^= piece_key(side, piece, sq);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square, side: Side, piece: Piece) {
        self.board.take(sq, side, piece);
        self.hash ^= piece_key(side, piece, sq);
    }

    #[inline]
    pub(crate) fn flip_side(&mut self) {
        self.hash ^= side_key(Side::Second);
        self.side_to_move = self.side_to_move.opponent();
    }

    /// True when the side to move has no moves, either side has no pieces,
    /// or the move counter passed [`MAX_MOVE_COUNT`].
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.board.piece_count(Side::First) == 0
            || self.board.piece_count(Side::Second) == 0
            || self.move_count > MAX_MOVE_COUNT
            || !self.has_moves(self.side_to_move)
    }

    /// The side that has won, if any.
    ///
    /// A side with no pieces loses; otherwise a side to move with no moves
    /// loses. Anything else, including the move cap, has no winner.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if self.board.piece_count(Side::First) == 0 {
            Some(Side::Second)
        } else if self.board.piece_count(Side::Second) == 0 {
            Some(Side::First)
        } else if !self.has_moves(self.side_to_move) {
            Some(self.side_to_move.opponent())
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Display for GameState {
    /// Diagram with row 8 at the top, followed by the side to move.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8 {
                write!(f, "{}", self.cell(Square(row, col)).to_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  abcdefgh")?;
        write!(f, "{} to move, move {}", self.side_to_move, self.move_count)
    }
}
