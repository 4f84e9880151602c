//! Fixed-depth alpha-beta search.
//!
//! Features:
//! - Minimax with alpha-beta pruning, scored from the engine side's view
//! - Transposition table keyed by position, depth and node type
//! - Capture-first move ordering
//! - One-ply extensions for captures and forced recaptures
//! - Capture-only quiescence search with stand-pat and delta pruning

mod constants;
mod extensions;
mod log;
mod minimax;
mod move_order;
mod params;
mod quiescence;

use std::time::Instant;

use crate::tt::TranspositionTable;

pub use super::error::SearchError;
use super::eval::{Evaluator, Jitter};
use super::{GameState, Move, Side};

pub use constants::{INFINITY, MAX_QSEARCH_DEPTH, NO_MOVES_SCORE};
pub use extensions::search_extension;
pub use log::{LogLogger, SearchInfo, SearchLogger, SilentLogger};
pub use move_order::{captured_value, move_order_score, order_captures, order_moves, quiet_move_score};
pub use params::SearchParams;

/// Counters for one decision
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    /// Deepest quiescence ply reached (0 is the horizon node itself)
    pub max_qdepth: u32,
    pub tt_probes: u64,
    pub tt_hits: u64,
    pub tt_stores: u64,
    pub cutoffs: u64,
    pub delta_prunes: u64,
}

/// Outcome of one root search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Root score from the engine side's view; `None` for a forced or missing move
    pub score: Option<i32>,
    pub stats: SearchStats,
}

/// Everything one recursive search needs, borrowed from the engine.
pub(crate) struct SearchContext<'a> {
    pub(crate) state: &'a mut GameState,
    pub(crate) evaluator: &'a mut Evaluator,
    pub(crate) tt: &'a mut TranspositionTable,
    pub(crate) params: &'a SearchParams,
    pub(crate) stats: &'a mut SearchStats,
    pub(crate) root_side: Side,
}

/// A fixed-depth searcher playing one side.
///
/// Owns its transposition table and evaluator, so separate games need
/// separate engines and never share state.
pub struct SearchEngine {
    depth: u32,
    side: Side,
    params: SearchParams,
    evaluator: Evaluator,
    tt: TranspositionTable,
    stats: SearchStats,
    logger: Box<dyn SearchLogger + Send>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("depth", &self.depth)
            .field("side", &self.side)
            .field("params", &self.params)
            .field("evaluator", &self.evaluator)
            .field("tt_entries", &self.tt.len())
            .finish_non_exhaustive()
    }
}

impl SearchEngine {
    /// Engine with default parameters and an entropy-seeded jitter source.
    #[must_use]
    pub fn new(depth: u32, side: Side) -> Self {
        SearchEngine {
            depth,
            side,
            params: SearchParams::default(),
            evaluator: Evaluator::default(),
            tt: TranspositionTable::new(),
            stats: SearchStats::default(),
            logger: Box::new(LogLogger),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Replace only the tie-break source, keeping the weights.
    #[must_use]
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.evaluator = self.evaluator.with_jitter(jitter);
        self
    }

    #[must_use]
    pub fn with_logger(mut self, logger: impl SearchLogger + Send + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }

    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Counters of the most recent decision
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Entries left in the table by the most recent decision
    #[must_use]
    pub fn tt_len(&self) -> usize {
        self.tt.len()
    }

    /// Best move for the engine's side, or `None` when it has no moves.
    ///
    /// # Panics
    ///
    /// Panics when the position is finished but still has moves, or when the
    /// other side is to move.
    pub fn get_best_move(&mut self, state: &GameState) -> Option<Move> {
        match self.try_get_best_move(state) {
            Ok(mv) => mv,
            Err(e) => panic!("search refused: {e}"),
        }
    }

    /// Checked version of [`get_best_move`](Self::get_best_move).
    pub fn try_get_best_move(&mut self, state: &GameState) -> Result<Option<Move>, SearchError> {
        Ok(self.search(state)?.best_move)
    }

    /// Best move together with its root score.
    ///
    /// The score is `None` when the move was forced and nothing was searched.
    pub fn best_move_with_score(
        &mut self,
        state: &GameState,
    ) -> Result<Option<(Move, Option<i32>)>, SearchError> {
        let result = self.search(state)?;
        Ok(result.best_move.map(|mv| (mv, result.score)))
    }

    /// Full root search.
    pub fn search(&mut self, state: &GameState) -> Result<SearchResult, SearchError> {
        if state.side_to_move() != self.side {
            return Err(SearchError::WrongSide {
                engine: self.side,
                to_move: state.side_to_move(),
            });
        }

        let start = Instant::now();
        self.tt.clear();
        self.stats = SearchStats::default();

        let moves = state.generate_moves();
        if moves.is_empty() {
            return Ok(self.finish(start, None, None));
        }
        if state.is_terminal() {
            return Err(SearchError::TerminalPosition {
                move_count: state.move_count(),
            });
        }
        if moves.len() == 1 {
            let forced = moves[0];
            #[cfg(feature = "logging")]
            ::log::trace!("{} plays forced move {forced}", self.side);
            return Ok(self.finish(start, Some(forced), None));
        }

        let mut scratch = state.clone();
        let mut ctx = SearchContext {
            state: &mut scratch,
            evaluator: &mut self.evaluator,
            tt: &mut self.tt,
            params: &self.params,
            stats: &mut self.stats,
            root_side: self.side,
        };

        let ordered = ctx.order(&moves);
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in ordered.moves() {
            let info = ctx.state.apply_unchecked(mv);
            let child_depth = (self.depth + ctx.extension(mv)).saturating_sub(1);
            let score = ctx.minimax(child_depth, alpha, beta, false);
            ctx.state.undo(mv, info);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let best_move = best.map(|(mv, _)| mv);
        let score = best.map(|(_, score)| score);
        Ok(self.finish(start, best_move, score))
    }

    fn finish(&mut self, start: Instant, best_move: Option<Move>, score: Option<i32>) -> SearchResult {
        let info = SearchInfo {
            depth: self.depth,
            side: self.side,
            best_move,
            score,
            nodes: self.stats.nodes,
            qnodes: self.stats.qnodes,
            tt_hits: self.stats.tt_hits,
            time_ms: start.elapsed().as_millis(),
        };
        self.logger.info(&info);
        SearchResult {
            best_move,
            score,
            stats: self.stats,
        }
    }
}
