//! Tactical depth extension.

use crate::board::{GameState, Move};

/// Extra ply for the child reached by `mv`.
///
/// One ply when `mv` captured, or when every reply in `after` is a capture
/// and at least one of them can be taken back: after the reply, the side
/// that played `mv` has a capture of the piece that just landed.
#[must_use]
pub fn search_extension(after: &GameState, mv: Move) -> u32 {
    if mv.is_capture() {
        return 1;
    }
    let replies = after.generate_moves();
    if replies.is_empty() || !replies.iter().all(|reply| reply.is_capture()) {
        return 0;
    }

    let mover = after.side_to_move().opponent();
    let mut scratch = after.clone();
    for &reply in &replies {
        let info = scratch.apply_unchecked(reply);
        let retake = scratch.board().can_capture_on(mover, reply.to());
        scratch.undo(reply, info);
        if retake {
            return 1;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Side, Square};

    #[test]
    fn captures_extend() {
        let state = BoardBuilder::new()
            .man(Square(2, 1), Side::First)
            .man(Square(3, 2), Side::Second)
            .man(Square(7, 6), Side::Second)
            .build();
        let mv = Move::new(Square(2, 1), Square(4, 3));
        let after = state.make_move(mv);
        assert_eq!(search_extension(&after, mv), 1);
    }

    #[test]
    fn stepping_into_an_unanswered_capture_does_not_extend() {
        // b3-c4 walks next to the d5 man, which must take it, and nothing
        // can take back on b3.
        let state = BoardBuilder::new()
            .man(Square(2, 1), Side::First)
            .man(Square(4, 3), Side::Second)
            .build();
        let mv = Move::new(Square(2, 1), Square(3, 2));
        let after = state.make_move(mv);
        assert!(after.generate_moves().iter().all(|m| m.is_capture()));
        assert_eq!(search_extension(&after, mv), 0);
    }

    #[test]
    fn forced_exchange_extends() {
        // Same as above, but the a2 man retakes on b3 after d5xb3.
        let state = BoardBuilder::new()
            .man(Square(1, 0), Side::First)
            .man(Square(2, 1), Side::First)
            .man(Square(4, 3), Side::Second)
            .build();
        let mv = Move::new(Square(2, 1), Square(3, 2));
        assert!(state.generate_moves().contains(mv));
        let after = state.make_move(mv);
        assert_eq!(search_extension(&after, mv), 1);
    }

    #[test]
    fn forced_capture_elsewhere_without_retake_does_not_extend() {
        // After h1-g2 the b3 king must take the c4 man, and nothing can
        // reach d5 to take back.
        let state = BoardBuilder::new()
            .man(Square(0, 7), Side::First)
            .man(Square(3, 2), Side::First)
            .king(Square(2, 1), Side::Second)
            .build();
        let mv = Move::new(Square(0, 7), Square(1, 6));
        assert!(state.generate_moves().contains(mv));
        let after = state.make_move(mv);
        assert!(after.generate_moves().iter().all(|m| m.is_capture()));
        assert_eq!(search_extension(&after, mv), 0);
    }

    #[test]
    fn forced_capture_elsewhere_with_retake_extends() {
        // As above, with an e4 man that takes the king once it lands on d5.
        let state = BoardBuilder::new()
            .man(Square(0, 7), Side::First)
            .man(Square(3, 2), Side::First)
            .man(Square(3, 4), Side::First)
            .king(Square(2, 1), Side::Second)
            .build();
        let mv = Move::new(Square(0, 7), Square(1, 6));
        assert!(state.generate_moves().contains(mv));
        let after = state.make_move(mv);
        assert_eq!(search_extension(&after, mv), 1);
    }

    #[test]
    fn quiet_position_does_not_extend() {
        let state = GameState::new();
        let mv = Move::new(Square(1, 2), Square(2, 3));
        let after = state.make_move(mv);
        assert_eq!(search_extension(&after, mv), 0);
    }
}
