//! Board representation, rules, evaluation and search for the checkers
//! variant.
//!
//! Uses bitboards for move generation and evaluation. Captures are single
//! jumps and mandatory; men promote on the far row and kings step one
//! square diagonally in any direction.
//!
//! # Example
//! ```
//! use checkers_engine::board::{GameState, Side};
//!
//! let state = GameState::new();
//! let moves = state.generate_moves();
//! assert_eq!(moves.len(), 7);
//! assert_eq!(state.side_to_move(), Side::First);
//! ```

mod builder;
mod error;
mod eval;
mod eval_terms;
mod make_unmake;
mod movegen;
mod notation;
mod planes;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveError, MoveParseError, NotationError, SearchError, SquareError};
pub use notation::INITIAL_NOTATION;
pub use planes::{plane_offset, PLANES_LEN, PLANE_COUNT};
pub use state::{Board, GameState, UnmakeInfo, MAX_MOVE_COUNT};
pub use types::{
    Bitboard, BitboardIter, Cell, Move, MoveList, MoveListIntoIter, Piece, ScoredMove,
    ScoredMoveList, Side, Square,
};

// Public API - evaluation
pub use eval::{evaluate, EvalBreakdown, Evaluator, Jitter};
pub use eval_terms::{edge_penalty, EvalWeights};

// Public API - search
pub use search::{SearchEngine, SearchParams, SearchResult, SearchStats};
