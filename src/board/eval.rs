//! Static evaluation.
//!
//! Scores are always from the point of view of the side passed in, never
//! of the side to move.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::eval_terms::EvalWeights;
use super::{GameState, Side};

/// Source of the small random perturbation added to every non-terminal
/// evaluation to break exact ties.
#[derive(Clone, Debug)]
pub enum Jitter {
    /// No perturbation; evaluation is deterministic.
    Off,
    Rng(StdRng),
}

impl Jitter {
    /// Reproducible jitter from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Jitter::Rng(StdRng::seed_from_u64(seed))
    }

    /// Jitter seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Jitter::Rng(StdRng::from_entropy())
    }

    /// A uniform value in `-amplitude..=amplitude`, or 0 when off.
    pub fn sample(&mut self, amplitude: i32) -> i32 {
        match self {
            Jitter::Off => 0,
            Jitter::Rng(_) if amplitude <= 0 => 0,
            Jitter::Rng(rng) => rng.gen_range(-amplitude..=amplitude),
        }
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Jitter::from_entropy()
    }
}

/// The non-terminal evaluation split into its terms, without jitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub positional: i32,
    pub advancement: i32,
    pub king_position: i32,
    pub threats: i32,
    pub endgame: i32,
}

impl EvalBreakdown {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.material
            + self.positional
            + self.advancement
            + self.king_position
            + self.threats
            + self.endgame
    }
}

impl GameState {
    /// Score of a finished game for `side`, or `None` if play goes on.
    #[must_use]
    pub fn terminal_score(&self, side: Side, w: &EvalWeights) -> Option<i32> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.winner() {
            Some(winner) if winner == side => w.win_score,
            Some(_) => -w.win_score,
            None => 0,
        })
    }

    /// Heuristic terms for `side`, ignoring whether the game is over.
    #[must_use]
    pub fn eval_breakdown(&self, side: Side, w: &EvalWeights) -> EvalBreakdown {
        let b = &self.board;
        EvalBreakdown {
            material: b.eval_material(side, w),
            positional: b.eval_men_position(side, w),
            advancement: b.eval_advancement(side, w),
            king_position: b.eval_kings(side, w),
            threats: b.eval_threats(side, w),
            endgame: b.eval_endgame(side, w),
        }
    }
}

/// Evaluate `state` for `side`.
///
/// Finished games score `±win_score` or 0; anything else is the sum of the
/// heuristic terms plus one jitter sample.
pub fn evaluate(state: &GameState, side: Side, w: &EvalWeights, jitter: &mut Jitter) -> i32 {
    if let Some(score) = state.terminal_score(side, w) {
        return score;
    }
    state.eval_breakdown(side, w).total() + jitter.sample(w.jitter)
}

/// Weights and jitter bundled for the search.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    weights: EvalWeights,
    jitter: Jitter,
}

impl Evaluator {
    #[must_use]
    pub fn new(weights: EvalWeights, jitter: Jitter) -> Self {
        Evaluator { weights, jitter }
    }

    /// Default weights, no jitter.
    #[must_use]
    pub fn deterministic() -> Self {
        Evaluator::new(EvalWeights::default(), Jitter::Off)
    }

    #[must_use]
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    #[must_use]
    pub fn jitter(&self) -> &Jitter {
        &self.jitter
    }

    pub fn evaluate(&mut self, state: &GameState, side: Side) -> i32 {
        evaluate(state, side, &self.weights, &mut self.jitter)
    }
}
