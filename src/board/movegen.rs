//! Move generation under mandatory-capture rules.
//!
//! Pieces are visited in ascending square order and each piece tries its
//! directions in a fixed order, so the output order is deterministic.

use super::{Board, GameState, Move, MoveList, Piece, Side, Square};

/// Diagonal steps in generation order.
const DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
fn directions(side: Side, piece: Piece) -> &'static [(isize, isize)] {
    match (piece, side) {
        (Piece::King, _) => &DIRECTIONS,
        (Piece::Man, Side::First) => &DIRECTIONS[..2],
        (Piece::Man, Side::Second) => &DIRECTIONS[2..],
    }
}

impl Board {
    /// Walk every piece of `side`, pushing quiet steps into `quiet` and
    /// single jumps into `captures`. Quiet steps are skipped when
    /// `quiet` is `None`.
    fn collect_moves(&self, side: Side, mut quiet: Option<&mut MoveList>, captures: &mut MoveList) {
        let empty = !self.occupied();
        let enemies = self.occupied_by(side.opponent());
        let kings = self.kings(side);

        for from in self.occupied_by(side).iter() {
            let piece = if kings.contains(from) {
                Piece::King
            } else {
                Piece::Man
            };
            for &(dr, dc) in directions(side, piece) {
                let Some(step) = from.offset(dr, dc) else {
                    continue;
                };
                if empty.contains(step) {
                    if let Some(quiet) = quiet.as_deref_mut() {
                        quiet.push(Move::new(from, step));
                    }
                } else if enemies.contains(step) {
                    if let Some(land) = step.offset(dr, dc) {
                        if empty.contains(land) {
                            captures.push(Move::new(from, land));
                        }
                    }
                }
            }
        }
    }

    /// Legal moves for `side`: all captures if any exist, else all quiet moves.
    #[must_use]
    pub fn moves_for(&self, side: Side) -> MoveList {
        let mut quiet = MoveList::new();
        let mut captures = MoveList::new();
        self.collect_moves(side, Some(&mut quiet), &mut captures);
        if captures.is_empty() {
            quiet
        } else {
            captures
        }
    }

    /// Only the captures available to `side`.
    #[must_use]
    pub fn captures_for(&self, side: Side) -> MoveList {
        let mut captures = MoveList::new();
        self.collect_moves(side, None, &mut captures);
        captures
    }

    /// Whether `side` has at least one legal move.
    #[must_use]
    pub fn has_moves(&self, side: Side) -> bool {
        let empty = !self.occupied();
        let enemies = self.occupied_by(side.opponent());
        let kings = self.kings(side);

        self.occupied_by(side).iter().any(|from| {
            let piece = if kings.contains(from) {
                Piece::King
            } else {
                Piece::Man
            };
            directions(side, piece).iter().any(|&(dr, dc)| {
                from.offset(dr, dc).is_some_and(|step| {
                    empty.contains(step)
                        || (enemies.contains(step)
                            && step.offset(dr, dc).is_some_and(|land| empty.contains(land)))
                })
            })
        })
    }

    /// Whether `side` could capture the piece standing on `target`.
    #[must_use]
    pub fn can_capture_on(&self, side: Side, target: Square) -> bool {
        self.captures_for(side)
            .iter()
            .any(|mv| mv.captured() == Some(target))
    }
}

impl GameState {
    /// Legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        self.board.moves_for(self.side_to_move)
    }

    /// Legal moves for an arbitrary side, regardless of whose turn it is.
    #[must_use]
    pub fn moves_for(&self, side: Side) -> MoveList {
        self.board.moves_for(side)
    }

    #[must_use]
    pub fn captures_for(&self, side: Side) -> MoveList {
        self.board.captures_for(side)
    }

    #[must_use]
    pub fn has_moves(&self, side: Side) -> bool {
        self.board.has_moves(side)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Play stops at terminal positions, which count as one leaf.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        let mut state = self.clone();
        state.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: u32) -> u64 {
        if depth == 0 || self.is_terminal() {
            return 1;
        }
        let moves = self.generate_moves();
        let mut nodes = 0;
        for mv in &moves {
            let info = self.apply_unchecked(*mv);
            nodes += self.perft_inner(depth - 1);
            self.undo(*mv, info);
        }
        nodes
    }
}
