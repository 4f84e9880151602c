use super::move_order::order_captures;
use super::SearchContext;

impl SearchContext<'_> {
    /// Capture-only search past the horizon.
    ///
    /// Fail-hard at the stand-pat cutoffs, fail-soft otherwise: the result
    /// starts from the stand-pat score and moves with each searched capture.
    pub(crate) fn quiescence(
        &mut self,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        qdepth: u32,
    ) -> i32 {
        self.stats.qnodes += 1;
        self.stats.max_qdepth = self.stats.max_qdepth.max(qdepth);

        let stand_pat = self.evaluator.evaluate(self.state, self.root_side);

        // Depth limit
        if qdepth >= self.params.quiescence_depth {
            return stand_pat;
        }

        if maximizing {
            if stand_pat >= beta {
                return beta;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return alpha;
            }
            beta = beta.min(stand_pat);
        }

        let captures = self.state.captures_for(self.state.side_to_move());
        if captures.is_empty() {
            return stand_pat;
        }
        let ordered = order_captures(self.state.board(), &captures);

        let margin = self.params.delta_margin;
        let mut best = stand_pat;
        for scored in ordered.as_slice() {
            let (mv, gain) = (scored.mv, scored.score);

            // Delta pruning: even winning the piece outright cannot matter
            let hopeless = if maximizing {
                stand_pat + gain + margin < alpha
            } else {
                stand_pat - gain - margin > beta
            };
            if hopeless {
                self.stats.delta_prunes += 1;
                continue;
            }

            let info = self.state.apply_unchecked(mv);
            let score = self.quiescence(alpha, beta, !maximizing, qdepth + 1);
            self.state.undo(mv, info);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
