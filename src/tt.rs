//! Transposition table for caching search results within one decision.
//!
//! Entries are keyed by Zobrist hash, remaining depth and the maximizing
//! flag. Each entry also keeps the full placement and side to move it was
//! computed for, so a hash collision is detected on probe and treated as a
//! miss.

use std::collections::HashMap;

use crate::board::{Board, GameState, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    /// Classify a node result against the window it was searched with.
    #[must_use]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            BoundType::UpperBound
        } else if score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TTKey {
    hash: u64,
    depth: u32,
    maximizing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    board: Board,
    side_to_move: Side,
    score: i32,
    depth: u32,
    bound_type: BoundType,
}

impl TTEntry {
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    /// The score if it settles a node searched with `(alpha, beta)` at
    /// `depth`: exact scores always do, bounds only when they fall outside
    /// the window on their side.
    #[must_use]
    pub fn cutoff(&self, depth: u32, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth < depth {
            return None;
        }
        match self.bound_type {
            BoundType::Exact => Some(self.score),
            BoundType::LowerBound if self.score >= beta => Some(self.score),
            BoundType::UpperBound if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

/// Per-decision memo owned by one search engine.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<TTKey, TTEntry>,
    collisions: u64,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn probe(&self, state: &GameState, depth: u32, maximizing: bool) -> Option<TTEntry> {
        let key = TTKey {
            hash: state.hash(),
            depth,
            maximizing,
        };
        self.entries
            .get(&key)
            .filter(|e| e.board == *state.board() && e.side_to_move == state.side_to_move())
            .copied()
    }

    /// Store a result, replacing any entry under the same key.
    pub fn store(
        &mut self,
        state: &GameState,
        depth: u32,
        maximizing: bool,
        score: i32,
        bound_type: BoundType,
    ) {
        let key = TTKey {
            hash: state.hash(),
            depth,
            maximizing,
        };
        let entry = TTEntry {
            board: *state.board(),
            side_to_move: state.side_to_move(),
            score,
            depth,
            bound_type,
        };
        if let Some(old) = self.entries.insert(key, entry) {
            if old.board != entry.board || old.side_to_move != entry.side_to_move {
                self.collisions += 1;
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.collisions = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores that overwrote a different position with the same key.
    #[must_use]
    pub fn collisions(&self) -> u64 {
        self.collisions
    }
}
