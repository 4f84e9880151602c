//! Placement terms: centralization, edges, back row, advancement.
//!
//! All of these score only the evaluated side's own pieces.

use crate::board::{Board, Side, Square};

use super::tables::KING_CENTRALIZATION_MAX_PIECES;
use super::EvalWeights;

/// Penalty for touching the board edge, with an extra charge in corners.
#[inline]
#[must_use]
pub fn edge_penalty(sq: Square, w: &EvalWeights) -> i32 {
    let mut penalty = 0;
    if sq.on_row_edge() {
        penalty += w.edge_penalty;
    }
    if sq.on_col_edge() {
        penalty += w.edge_penalty;
    }
    if sq.on_row_edge() && sq.on_col_edge() {
        penalty += w.corner_penalty;
    }
    penalty
}

impl Board {
    /// Centre control, edge penalty and back-row bonus for own men.
    #[must_use]
    pub fn eval_men_position(&self, side: Side, w: &EvalWeights) -> i32 {
        self.men(side)
            .iter()
            .map(|sq| {
                let mut score = (7 - sq.centre_distance()) * w.center_control + edge_penalty(sq, w);
                if sq.row() == side.back_row() {
                    score += w.back_row_bonus;
                }
                score
            })
            .sum()
    }

    /// Scales with the number of rows between each own man and its
    /// promotion row.
    #[must_use]
    pub fn eval_advancement(&self, side: Side, w: &EvalWeights) -> i32 {
        self.men(side)
            .iter()
            .map(|sq| sq.row().abs_diff(side.promotion_row()) as i32 * w.advancement)
            .sum()
    }

    /// Edge penalty for own kings, plus centralization once few pieces remain.
    #[must_use]
    pub fn eval_kings(&self, side: Side, w: &EvalWeights) -> i32 {
        let centralize = self.total_pieces() <= KING_CENTRALIZATION_MAX_PIECES;
        self.kings(side)
            .iter()
            .map(|sq| {
                let mut score = edge_penalty(sq, w);
                if centralize {
                    score += (7 - sq.centre_distance()) * w.king_centralization;
                }
                score
            })
            .sum()
    }
}
