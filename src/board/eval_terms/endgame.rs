//! Driving won endgames home.

use crate::board::{Board, Side};

use super::tables::ENDGAME_MAX_PIECES;
use super::EvalWeights;

impl Board {
    /// With few pieces left and more of them than the opponent, reward the
    /// lead and pull our pieces toward theirs.
    #[must_use]
    pub fn eval_endgame(&self, side: Side, w: &EvalWeights) -> i32 {
        if self.total_pieces() > ENDGAME_MAX_PIECES {
            return 0;
        }
        let ours = self.occupied_by(side);
        let theirs = self.occupied_by(side.opponent());
        let lead = ours.popcount() as i32 - theirs.popcount() as i32;
        if lead <= 0 {
            return 0;
        }

        let distance: i32 = ours
            .iter()
            .flat_map(|a| theirs.iter().map(move |b| a.manhattan(b)))
            .sum();
        w.endgame_bonus * lead - distance * w.endgame_distance_halves / 2
    }
}
