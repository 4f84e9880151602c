//! Search constants.
//!
//! Contains the fixed scores and ordering weights used by the search.

// ============================================================================
// SCORES
// ============================================================================

/// Larger than any score the evaluator or the search can produce
pub const INFINITY: i32 = 1_000_000;

/// Score of a non-terminal node with no moves, from the maximizer's view
pub const NO_MOVES_SCORE: i32 = 10_000;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Default quiescence depth cap
pub const MAX_QSEARCH_DEPTH: u32 = 4;

/// Default safety margin for delta pruning in quiescence
pub const DELTA_MARGIN: i32 = 100;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier. Captures always precede quiet moves.

/// Added to every capture so it sorts ahead of all quiet moves
pub const CAPTURE_BASE_SCORE: i32 = 1 << 16;

/// Per step of closeness of the destination to the centre
pub const CENTER_ORDER_WEIGHT: i32 = 8;

/// Per row moved toward the mover's promotion row. Negative, so king
/// retreats are tried before advances and advances last.
pub const ADVANCE_ORDER_WEIGHT: i32 = -16;

/// Bonus for moving a king
pub const KING_ORDER_BONUS: i32 = 25;
