//! Search engine for a two-player checkers variant with mandatory single
//! captures and promotion.
//!
//! The free functions below are the minimal driver interface; everything
//! else lives in [`board`].

pub mod board;
pub mod tt;
mod zobrist;

pub use board::{
    evaluate, BoardBuilder, Cell, EvalWeights, Evaluator, GameState, Jitter, Move, MoveList,
    Piece, SearchEngine, SearchError, SearchParams, Side, Square,
};
pub use tt::TranspositionTable;

/// The starting position, First to move.
#[must_use]
pub fn new_initial_state() -> GameState {
    GameState::new()
}

/// Legal moves for the side to move.
#[must_use]
pub fn get_valid_moves(state: &GameState) -> MoveList {
    state.generate_moves()
}

/// The position after `mv`; `state` is left untouched.
///
/// # Panics
///
/// Panics when `mv` cannot be applied, e.g. its source square is empty.
#[must_use]
pub fn make_move(state: &GameState, mv: Move) -> GameState {
    state.make_move(mv)
}

#[must_use]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}

#[must_use]
pub fn get_winner(state: &GameState) -> Option<Side> {
    state.winner()
}
