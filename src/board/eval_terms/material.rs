//! Material balance.

use crate::board::{Board, Side};

use super::EvalWeights;

impl Board {
    /// Signed piece values, positive for `side`.
    #[must_use]
    pub fn eval_material(&self, side: Side, w: &EvalWeights) -> i32 {
        let value = |s: Side| {
            self.men(s).popcount() as i32 * w.man_value + self.kings(s).popcount() as i32 * w.king_value
        };
        value(side) - value(side.opponent())
    }
}
