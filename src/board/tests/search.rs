//! Search algorithm tests.
//!
//! Tests for alpha-beta, quiescence, the transposition table and extensions.

use crate::board::search::{
    SearchContext, SearchEngine, SearchParams, SearchStats, SilentLogger, INFINITY,
};
use crate::board::{BoardBuilder, Evaluator, GameState, Jitter, Move, Side, Square};
use crate::tt::{BoundType, TranspositionTable};
use rand::prelude::*;

fn engine(depth: u32, side: Side) -> SearchEngine {
    SearchEngine::new(depth, side)
        .with_jitter(Jitter::Off)
        .with_logger(SilentLogger)
}

fn capped(quiescence_depth: u32) -> SearchParams {
    SearchParams {
        quiescence_depth,
        ..SearchParams::default()
    }
}

// ============================================================================
// Root search tests
// ============================================================================

#[test]
fn depth_one_opening_is_a_quiet_legal_move() {
    let state = GameState::new();
    let mv = engine(1, Side::First).get_best_move(&state).unwrap();
    assert!(state.generate_moves().contains(mv));
    assert!(!mv.is_capture());
}

#[test]
fn avoids_stepping_into_a_capture() {
    // b3-c4 walks into the d5 man's jump; b3-a4 is safe.
    let state = BoardBuilder::new()
        .man(Square(2, 1), Side::First)
        .man(Square(4, 3), Side::Second)
        .build();
    let mv = engine(2, Side::First).get_best_move(&state);
    assert_eq!(mv, Some(Move::new(Square(2, 1), Square(3, 0))));
}

#[test]
fn second_side_avoids_stepping_into_a_capture() {
    // g6-f5 walks into the e4 man's jump; g6-h5 is safe.
    let state = BoardBuilder::new()
        .man(Square(5, 6), Side::Second)
        .man(Square(3, 4), Side::First)
        .side_to_move(Side::Second)
        .build();
    let mv = engine(2, Side::Second).get_best_move(&state);
    assert_eq!(mv, Some(Move::new(Square(5, 6), Square(4, 7))));
}

#[test]
fn material_lead_scores_positive() {
    // A king and a man against a lone man.
    let state = BoardBuilder::new()
        .king(Square(3, 2), Side::First)
        .man(Square(6, 1), Side::Second)
        .man(Square(0, 7), Side::First)
        .build();
    let mut eng = engine(4, Side::First);
    let result = eng.search(&state).unwrap();
    assert!(result.best_move.is_some());
    assert!(result.score.unwrap_or_default() > 0);
}

#[test]
fn root_keeps_first_of_equal_moves() {
    // A lone king in the open has four moves; with the table and jitter off
    // the first move in search order wins any tie.
    let state = BoardBuilder::new()
        .king(Square(3, 2), Side::First)
        .king(Square(7, 0), Side::Second)
        .build();
    let params = SearchParams {
        move_ordering: false,
        ..capped(0)
    };
    let mut eng = engine(1, Side::First).with_params(params);
    let result = eng.search(&state).unwrap();
    let moves = state.generate_moves();
    let best = result.best_move.unwrap();
    assert!(moves.contains(best));

    let mut evaluator = Evaluator::deterministic();
    let best_score = moves
        .iter()
        .map(|&mv| evaluator.evaluate(&state.make_move(mv), Side::First))
        .max()
        .unwrap();
    let first_best = moves
        .iter()
        .copied()
        .find(|&mv| evaluator.evaluate(&state.make_move(mv), Side::First) == best_score)
        .unwrap();
    assert_eq!(best, first_best);
    assert_eq!(result.score, Some(best_score));
}

// ============================================================================
// Quiescence tests
// ============================================================================

#[test]
fn quiescence_at_cap_is_stand_pat() {
    let mut state = GameState::from_notation("8/1b1b1b2/8/1b1b1b2/2w1w3/8/8/8 w 10");
    let expected = Evaluator::deterministic().evaluate(&state, Side::First);

    let mut evaluator = Evaluator::deterministic();
    let mut tt = TranspositionTable::new();
    let params = capped(0);
    let mut stats = SearchStats::default();
    let mut ctx = SearchContext {
        state: &mut state,
        evaluator: &mut evaluator,
        tt: &mut tt,
        params: &params,
        stats: &mut stats,
        root_side: Side::First,
    };
    assert_eq!(ctx.quiescence(-INFINITY, INFINITY, true, 0), expected);
    assert_eq!(stats.qnodes, 1);
}

#[test]
fn quiescence_never_worse_than_stand_pat_for_mover() {
    let positions = [
        "8/1b1b1b2/8/1b1b1b2/2w1w3/8/8/8 w 10",
        "8/8/8/8/2b5/1w6/8/8 w 20",
        "b1b1b1b1/1b1b1b1b/8/8/8/8/w1w1w1w1/1w1w1w1w w 0",
    ];
    for notation in positions {
        let mut state = GameState::from_notation(notation);
        let original = state.clone();
        let stand_pat = Evaluator::deterministic().evaluate(&state, Side::First);

        let mut evaluator = Evaluator::deterministic();
        let mut tt = TranspositionTable::new();
        let params = SearchParams::default();
        let mut stats = SearchStats::default();
        let mut ctx = SearchContext {
            state: &mut state,
            evaluator: &mut evaluator,
            tt: &mut tt,
            params: &params,
            stats: &mut stats,
            root_side: Side::First,
        };
        let score = ctx.quiescence(-INFINITY, INFINITY, true, 0);
        assert!(score >= stand_pat, "{notation}: {score} < {stand_pat}");
        assert!(stats.max_qdepth <= params.quiescence_depth);
        assert_eq!(state, original);
    }
}

#[test]
fn quiescence_depth_respects_cap_during_search() {
    let state = GameState::from_notation("8/1b1b1b2/8/1b1b1b2/2w1w3/8/8/8 w 10");
    for cap in [0, 1, 2, 4] {
        let mut eng = engine(3, Side::First).with_params(capped(cap));
        let result = eng.search(&state).unwrap();
        assert!(result.stats.max_qdepth <= cap, "cap {cap}: {:?}", result.stats);
    }
}

// ============================================================================
// Transposition table tests
// ============================================================================

#[test]
fn horizon_node_is_cached_as_exact() {
    let mut state = GameState::new();
    let mut evaluator = Evaluator::deterministic();
    let mut tt = TranspositionTable::new();
    let params = capped(0);
    let mut stats = SearchStats::default();
    let mut ctx = SearchContext {
        state: &mut state,
        evaluator: &mut evaluator,
        tt: &mut tt,
        params: &params,
        stats: &mut stats,
        root_side: Side::First,
    };
    let score = ctx.minimax(0, -INFINITY, INFINITY, true);

    let entry = tt.probe(&state, 0, true).unwrap();
    assert_eq!(entry.score(), score);
    assert_eq!(entry.bound_type(), BoundType::Exact);
    assert_eq!(stats.tt_stores, 1);
}

#[test]
fn horizon_fail_high_is_cached_as_lower_bound() {
    // The start is worth far more than 0 to First, so quiescence stands pat
    // on the beta cutoff and returns beta itself.
    let mut state = GameState::new();
    let mut evaluator = Evaluator::deterministic();
    let mut tt = TranspositionTable::new();
    let params = SearchParams::default();
    let mut stats = SearchStats::default();
    let mut ctx = SearchContext {
        state: &mut state,
        evaluator: &mut evaluator,
        tt: &mut tt,
        params: &params,
        stats: &mut stats,
        root_side: Side::First,
    };
    assert_eq!(ctx.minimax(0, -INFINITY, 0, true), 0);

    let entry = tt.probe(&state, 0, true).unwrap();
    assert_eq!(entry.bound_type(), BoundType::LowerBound);
    assert_eq!(entry.cutoff(0, -INFINITY, INFINITY), None);
}

#[test]
fn table_agrees_on_played_out_positions() {
    // Random playouts reach positions where horizon scores from narrow
    // windows get reused under wider ones.
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..24 {
        let mut state = GameState::new();
        for _ in 0..rng.gen_range(8..=30) {
            if state.is_terminal() {
                break;
            }
            let moves = state.generate_moves();
            state = state.make_move(moves.as_slice()[rng.gen_range(0..moves.len())]);
        }
        if state.is_terminal() {
            continue;
        }
        let side = state.side_to_move();
        let with_tt = engine(3, side).search(&state).unwrap();
        let without_tt = engine(3, side)
            .with_params(SearchParams {
                use_tt: false,
                ..SearchParams::default()
            })
            .search(&state)
            .unwrap();
        assert_eq!(with_tt.best_move, without_tt.best_move, "\n{state}");
        assert_eq!(with_tt.score, without_tt.score, "\n{state}");
    }
}

#[test]
fn table_off_stores_nothing() {
    let params = SearchParams {
        use_tt: false,
        ..SearchParams::default()
    };
    let mut eng = engine(3, Side::First).with_params(params);
    let result = eng.search(&GameState::new()).unwrap();
    assert_eq!(eng.tt_len(), 0);
    assert_eq!(result.stats.tt_probes, 0);
    assert_eq!(result.stats.tt_stores, 0);
}

#[test]
fn table_on_and_off_agree_from_the_start() {
    let state = GameState::new();
    for depth in 1..=4 {
        let params = SearchParams::default();
        let with_tt = engine(depth, Side::First)
            .with_params(params.clone())
            .search(&state)
            .unwrap();
        let without_tt = engine(depth, Side::First)
            .with_params(SearchParams {
                use_tt: false,
                ..params
            })
            .search(&state)
            .unwrap();
        assert_eq!(with_tt.best_move, without_tt.best_move, "depth {depth}");
        assert_eq!(with_tt.score, without_tt.score, "depth {depth}");
    }
}

// ============================================================================
// Pruning tests
// ============================================================================

#[test]
fn alpha_beta_cuts_the_tree() {
    let params = SearchParams {
        use_tt: false,
        extensions: false,
        ..capped(0)
    };
    let mut eng = engine(4, Side::First).with_params(params);
    let result = eng.search(&GameState::new()).unwrap();
    assert!(result.stats.cutoffs > 0);
    // Full width at depth 4 from the start visits far more than this.
    let full_width: u64 = (1..=4).map(|d| GameState::new().perft(d)).sum();
    assert!(result.stats.nodes < full_width);
}
