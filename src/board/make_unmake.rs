//! Applying and reverting moves.

use super::error::MoveError;
use super::{GameState, Move, Piece, UnmakeInfo};

impl GameState {
    /// Check that `mv` can be applied at all: a piece of the side to move on
    /// the source, an empty destination, a diagonal step or jump in a legal
    /// direction, and an enemy piece under any jump.
    ///
    /// This does not enforce mandatory capture; use [`GameState::generate_moves`]
    /// for full legality.
    pub fn validate_move(&self, mv: Move) -> Result<(), MoveError> {
        let (from, to) = (mv.from(), mv.to());
        let Some((owner, piece)) = self.board.piece_at(from) else {
            return Err(MoveError::EmptySource { square: from });
        };
        if owner != self.side_to_move {
            return Err(MoveError::NotSideToMove {
                square: from,
                side: self.side_to_move,
            });
        }

        let dr = to.row() as isize - from.row() as isize;
        let dc = to.col() as isize - from.col() as isize;
        if dr.abs() != dc.abs() || !(1..=2).contains(&dr.abs()) {
            return Err(MoveError::NotDiagonal { from, to });
        }
        if piece == Piece::Man && dr.signum() != owner.forward() {
            return Err(MoveError::BackwardMan { from, to });
        }
        if self.board.occupied().contains(to) {
            return Err(MoveError::DestinationOccupied { square: to });
        }
        if let Some(victim) = mv.captured() {
            if !self.board.occupied_by(owner.opponent()).contains(victim) {
                return Err(MoveError::NothingToCapture { square: victim });
            }
        }
        Ok(())
    }

    /// Apply `mv` in place after validating it.
    pub fn apply(&mut self, mv: Move) -> Result<UnmakeInfo, MoveError> {
        self.validate_move(mv)?;
        Ok(self.apply_unchecked(mv))
    }

    /// Apply a move known to come from move generation.
    pub(crate) fn apply_unchecked(&mut self, mv: Move) -> UnmakeInfo {
        let side = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());
        debug_assert!(
            self.board.occupied_by(side).contains(from),
            "no {side} piece on {from} for {mv:?}"
        );

        let previous_hash = self.hash;
        let moved = if self.board.kings(side).contains(from) {
            Piece::King
        } else {
            Piece::Man
        };
        self.remove_piece(from, side, moved);

        let captured = mv.captured().map(|victim| {
            let enemy = side.opponent();
            let piece = if self.board.kings(enemy).contains(victim) {
                Piece::King
            } else {
                Piece::Man
            };
            self.remove_piece(victim, enemy, piece);
            piece
        });

        let promoted = moved == Piece::Man && to.row() == side.promotion_row();
        let placed = if promoted { Piece::King } else { moved };
        self.set_piece(to, side, placed);

        self.flip_side();
        self.move_count += 1;

        UnmakeInfo {
            captured,
            promoted,
            previous_hash,
        }
    }

    /// Revert `mv`, which must be the last move applied with `info`.
    pub fn undo(&mut self, mv: Move, info: UnmakeInfo) {
        self.move_count -= 1;
        self.side_to_move = self.side_to_move.opponent();
        let side = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());

        let placed = if self.board.kings(side).contains(to) {
            Piece::King
        } else {
            Piece::Man
        };
        self.board.take(to, side, placed);
        let original = if info.promoted { Piece::Man } else { placed };
        self.board.put(from, side, original);

        if let (Some(victim), Some(piece)) = (mv.captured(), info.captured) {
            self.board.put(victim, side.opponent(), piece);
        }
        self.hash = info.previous_hash;
    }

    /// The position after `mv`, or why `mv` cannot be applied.
    pub fn try_make_move(&self, mv: Move) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }

    /// The position after `mv`.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is structurally invalid for this position (see
    /// [`GameState::validate_move`]); that means the caller and the rules
    /// disagree about the game and nothing generated from here can be trusted.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> GameState {
        self.try_make_move(mv)
            .unwrap_or_else(|e| panic!("cannot apply {mv}: {e}"))
    }
}
