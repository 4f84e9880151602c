//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Side`, `Piece` and `Cell` - players, piece kinds and cell contents
//! - `Square` - (row, col) board coordinate
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList, MoveListIntoIter, ScoredMove, ScoredMoveList};
pub use piece::{Cell, Piece, Side};
pub use square::Square;
