use crate::board::{Move, MoveList, ScoredMoveList};
use crate::tt::BoundType;

use super::constants::{INFINITY, NO_MOVES_SCORE};
use super::extensions::search_extension;
use super::move_order::{order_moves, unordered};
use super::SearchContext;

impl SearchContext<'_> {
    /// Depth-limited alpha-beta from the root side's point of view.
    ///
    /// `maximizing` is true exactly when the root side is on move.
    pub(crate) fn minimax(&mut self, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;
        debug_assert_eq!(
            maximizing,
            self.state.side_to_move() == self.root_side,
            "maximizing flag out of step with side to move"
        );

        if self.state.is_terminal() {
            return self.evaluator.evaluate(self.state, self.root_side);
        }

        if self.params.use_tt {
            self.stats.tt_probes += 1;
            if let Some(score) = self
                .tt
                .probe(self.state, depth, maximizing)
                .and_then(|entry| entry.cutoff(depth, alpha, beta))
            {
                self.stats.tt_hits += 1;
                return score;
            }
        }

        if depth == 0 {
            // Quiescence fails hard at its stand-pat cutoffs, so only a
            // score inside the window is exact.
            let score = self.quiescence(alpha, beta, maximizing, 0);
            self.store(0, maximizing, score, BoundType::classify(score, alpha, beta));
            return score;
        }

        let moves = self.state.generate_moves();
        debug_assert!(!moves.is_empty(), "non-terminal position without moves:\n{}", self.state);
        if moves.is_empty() {
            let score = if maximizing { -NO_MOVES_SCORE } else { NO_MOVES_SCORE };
            self.store(depth, maximizing, score, BoundType::Exact);
            return score;
        }

        let (alpha0, beta0) = (alpha, beta);
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let ordered = self.order(&moves);

        for mv in ordered.moves() {
            let info = self.state.apply_unchecked(mv);
            let child_depth = depth - 1 + self.extension(mv);
            let score = self.minimax(child_depth, alpha, beta, !maximizing);
            self.state.undo(mv, info);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.store(depth, maximizing, best, BoundType::classify(best, alpha0, beta0));
        best
    }

    /// Moves of the side to move in search order.
    pub(crate) fn order(&self, moves: &MoveList) -> ScoredMoveList {
        if self.params.move_ordering {
            order_moves(self.state.board(), moves)
        } else {
            unordered(moves)
        }
    }

    /// Extension for the move just applied to `self.state`.
    pub(crate) fn extension(&self, mv: Move) -> u32 {
        if self.params.extensions {
            search_extension(self.state, mv)
        } else {
            0
        }
    }

    fn store(&mut self, depth: u32, maximizing: bool, score: i32, bound: BoundType) {
        if self.params.use_tt {
            self.stats.tt_stores += 1;
            self.tt.store(self.state, depth, maximizing, score, bound);
        }
    }
}
