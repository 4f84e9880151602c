//! Pieces en prise.

use crate::board::{Board, Side};

use super::EvalWeights;

impl Board {
    /// Penalty for every capture the opponent would have if it were on
    /// move. The opponent is passed to move generation directly; the
    /// position is never touched.
    #[must_use]
    pub fn eval_threats(&self, side: Side, w: &EvalWeights) -> i32 {
        let ours = self.occupied_by(side);
        let threats = self
            .captures_for(side.opponent())
            .iter()
            .filter(|mv| mv.captured().is_some_and(|victim| ours.contains(victim)))
            .count();
        threats as i32 * w.piece_under_attack
    }
}
