//! Move representation and fixed-capacity move lists.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A single-step move or single-jump capture, packed into 16 bits.
///
/// Format: bits 0-5 = from index, bits 6-11 = to index. A move is a capture
/// exactly when it spans two rows; the captured square is the midpoint.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 6))
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.from().row().abs_diff(self.to().row()) == 2
    }

    /// Square of the jumped piece, for captures.
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Square> {
        if self.is_capture() {
            let (from, to) = (self.from(), self.to());
            Some(Square((from.0 + to.0) / 2, (from.1 + to.1) / 2))
        } else {
            None
        }
    }

    /// Flat `from * 64 + to` index in `0..4096`, the move's policy slot.
    #[inline]
    #[must_use]
    pub const fn policy_index(self) -> usize {
        self.from().index() * 64 + self.to().index()
    }

    #[must_use]
    pub const fn from_policy_index(idx: usize) -> Option<Self> {
        if idx >= 4096 {
            return None;
        }
        Some(Move::new(
            Square::from_index(idx / 64),
            Square::from_index(idx % 64),
        ))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(victim) = self.captured() {
            write!(f, " x{victim}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse `<from><to>` such as `b3c4`. Only the shape is checked: the
    /// squares must be distinct diagonal neighbours or a two-step jump.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..].parse().map_err(|_| invalid_square())?;

        let dr = from.row().abs_diff(to.row());
        let dc = from.col().abs_diff(to.col());
        if dr != dc || !(1..=2).contains(&dr) {
            return Err(MoveParseError::NotDiagonal {
                notation: s.to_string(),
            });
        }
        Ok(Move::new(from, to))
    }
}

/// Upper bound on legal moves: 32 dark squares, four directions each.
pub(crate) const MAX_MOVES: usize = 128;
pub(crate) const EMPTY_MOVE: Move = Move(0);

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.as_slice().first().copied()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// A scored move for move ordering.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Fixed-size list of scored moves to avoid heap allocation.
#[derive(Clone, Debug)]
pub struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    #[must_use]
    pub fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: EMPTY_MOVE,
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        self.moves[self.len] = ScoredMove { mv, score };
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    /// Sort moves by score in descending order. The sort is stable, so
    /// equal scores keep insertion order.
    pub fn sort_by_score_desc(&mut self) {
        self.moves[..self.len].sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Iterate over the moves in their current order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.as_slice().iter().map(|s| s.mv)
    }
}

impl Default for ScoredMoveList {
    fn default() -> Self {
        ScoredMoveList::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_squares() {
        let mv = Move::new(Square(2, 3), Square(3, 4));
        assert_eq!(mv.from(), Square(2, 3));
        assert_eq!(mv.to(), Square(3, 4));
        assert!(!mv.is_capture());
        assert_eq!(mv.captured(), None);
    }

    #[test]
    fn capture_midpoint() {
        let mv = Move::new(Square(5, 2), Square(3, 0));
        assert!(mv.is_capture());
        assert_eq!(mv.captured(), Some(Square(4, 1)));
    }

    #[test]
    fn parse_and_display() {
        let mv: Move = "b3d5".parse().expect("valid move");
        assert_eq!(mv.from(), Square(2, 1));
        assert_eq!(mv.to(), Square(4, 3));
        assert_eq!(mv.to_string(), "b3d5");

        assert_eq!(
            "b3".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        );
        assert!(matches!(
            "b3b4".parse::<Move>(),
            Err(MoveParseError::NotDiagonal { .. })
        ));
        assert!(matches!(
            "z3b4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn policy_index_matches_flat_encoding() {
        let mv = Move::new(Square(1, 2), Square(2, 3));
        assert_eq!(mv.policy_index(), 10 * 64 + 19);
        assert_eq!(Move::from_policy_index(mv.policy_index()), Some(mv));
        assert_eq!(Move::from_policy_index(4096), None);
    }

    #[test]
    fn scored_sort_is_stable() {
        let a = Move::new(Square(1, 0), Square(2, 1));
        let b = Move::new(Square(1, 2), Square(2, 3));
        let c = Move::new(Square(1, 4), Square(2, 5));
        let mut list = ScoredMoveList::new();
        list.push(a, 5);
        list.push(b, 9);
        list.push(c, 5);
        list.sort_by_score_desc();
        let order: Vec<Move> = list.moves().collect();
        assert_eq!(order, vec![b, a, c]);
    }
}
