//! Evaluation constants.
//!
//! Every tuned number the evaluator reads lives in [`EvalWeights`], so a
//! caller can swap in a different table without touching global state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// PHASE THRESHOLDS
// ============================================================================

/// King centralization counts only at or below this many pieces on the board
pub const KING_CENTRALIZATION_MAX_PIECES: u32 = 6;

/// Endgame distance term applies at or below this many pieces on the board
pub const ENDGAME_MAX_PIECES: u32 = 4;

// ============================================================================
// WEIGHTS
// ============================================================================

/// Named evaluation weights. Immutable once built; shared read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalWeights {
    pub man_value: i32,
    pub king_value: i32,
    /// Per step of closeness to the centre, for men
    pub center_control: i32,
    /// Bonus for a man still on its own back row
    pub back_row_bonus: i32,
    /// Per board edge a piece touches
    pub edge_penalty: i32,
    /// Extra penalty for a corner square
    pub corner_penalty: i32,
    /// Per row of distance to the promotion row, for men
    pub advancement: i32,
    /// Per step of closeness to the centre, for kings in the endgame
    pub king_centralization: i32,
    /// Per capture the opponent could make right now
    pub piece_under_attack: i32,
    /// Per piece of lead in the endgame
    pub endgame_bonus: i32,
    /// Per step of distance between opposing pieces in a won endgame, in
    /// half points (3 = 1.5)
    pub endgame_distance_halves: i32,
    /// Score of a won position; a lost one is its negation
    pub win_score: i32,
    /// Tie-break jitter is drawn from `-jitter..=jitter`
    pub jitter: i32,
}

impl EvalWeights {
    pub const DEFAULT: EvalWeights = EvalWeights {
        man_value: 100,
        king_value: 300,
        center_control: 5,
        back_row_bonus: 10,
        edge_penalty: -8,
        corner_penalty: -15,
        advancement: 12,
        king_centralization: 20,
        piece_under_attack: -80,
        endgame_bonus: 50,
        endgame_distance_halves: 3,
        win_score: 5000,
        jitter: 2,
    };
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights::DEFAULT
    }
}
