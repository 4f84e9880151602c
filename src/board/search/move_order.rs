//! Move ordering utilities for search.

use super::constants::{
    ADVANCE_ORDER_WEIGHT, CAPTURE_BASE_SCORE, CENTER_ORDER_WEIGHT, KING_ORDER_BONUS,
};
use crate::board::{Board, Move, MoveList, Piece, ScoredMoveList};

/// Value of the piece a capture removes, 0 for quiet moves.
#[must_use]
pub fn captured_value(board: &Board, mv: Move) -> i32 {
    mv.captured()
        .and_then(|victim| board.piece_at(victim))
        .map_or(0, |(_, piece)| piece.capture_value())
}

/// Cheap positional guess for a quiet move.
#[must_use]
pub fn quiet_move_score(board: &Board, mv: Move) -> i32 {
    let (from, to) = (mv.from(), mv.to());
    let mut score = (7 - to.centre_distance()) * CENTER_ORDER_WEIGHT;
    if let Some((side, piece)) = board.piece_at(from) {
        let advanced = (to.row() as isize - from.row() as isize) * side.forward();
        score += advanced as i32 * ADVANCE_ORDER_WEIGHT;
        if piece == Piece::King {
            score += KING_ORDER_BONUS;
        }
    }
    score
}

#[must_use]
pub fn move_order_score(board: &Board, mv: Move) -> i32 {
    if mv.is_capture() {
        CAPTURE_BASE_SCORE + captured_value(board, mv)
    } else {
        quiet_move_score(board, mv)
    }
}

/// Captures first by captured value, then quiet moves by
/// [`quiet_move_score`]. Equal scores keep generation order.
#[must_use]
pub fn order_moves(board: &Board, moves: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        scored.push(mv, move_order_score(board, mv));
    }
    scored.sort_by_score_desc();
    scored
}

/// Captures only, most valuable victim first.
#[must_use]
pub fn order_captures(board: &Board, captures: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in captures {
        scored.push(mv, captured_value(board, mv));
    }
    scored.sort_by_score_desc();
    scored
}

/// Moves in generation order, scored 0.
#[must_use]
pub(crate) fn unordered(moves: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        scored.push(mv, 0);
    }
    scored
}
