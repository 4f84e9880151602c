//! Evaluation terms.
//!
//! Contains evaluation functions for:
//! - Material balance
//! - Placement of men and kings (centre, edges, back row, advancement)
//! - Pieces the opponent could capture right now
//! - Endgame conversion

mod endgame;
mod material;
mod positional;
pub mod tables;
mod threats;

pub use positional::edge_penalty;
pub use tables::EvalWeights;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardBuilder, GameState, Side, Square};

    fn board(state: GameState) -> Board {
        *state.board()
    }

    const W: EvalWeights = EvalWeights::DEFAULT;

    #[test]
    fn edge_penalties() {
        assert_eq!(edge_penalty(Square(3, 4), &W), 0);
        assert_eq!(edge_penalty(Square(3, 0), &W), -8);
        assert_eq!(edge_penalty(Square(0, 3), &W), -8);
        assert_eq!(edge_penalty(Square(7, 0), &W), -31);
        assert_eq!(edge_penalty(Square(0, 7), &W), -31);
    }

    #[test]
    fn initial_position_terms() {
        let b = Board::initial();
        for side in Side::BOTH {
            assert_eq!(b.eval_material(side, &W), 0);
            assert_eq!(b.eval_men_position(side, &W), 57);
            assert_eq!(b.eval_advancement(side, &W), 624);
            assert_eq!(b.eval_kings(side, &W), 0);
            assert_eq!(b.eval_threats(side, &W), 0);
            assert_eq!(b.eval_endgame(side, &W), 0);
        }
    }

    #[test]
    fn material_counts_kings_triple() {
        let b = board(
            BoardBuilder::new()
                .king(Square(3, 2), Side::First)
                .man(Square(1, 0), Side::First)
                .man(Square(1, 2), Side::First)
                .man(Square(6, 1), Side::Second)
                .build(),
        );
        assert_eq!(b.eval_material(Side::First, &W), 400);
        assert_eq!(b.eval_material(Side::Second, &W), -400);
    }

    #[test]
    fn threats_count_opponent_captures() {
        let b = board(
            BoardBuilder::new()
                .man(Square(2, 1), Side::First)
                .man(Square(3, 2), Side::Second)
                .build(),
        );
        assert_eq!(b.eval_threats(Side::First, &W), -80);
        assert_eq!(b.eval_threats(Side::Second, &W), -80);
    }

    #[test]
    fn kings_centralize_only_when_few_pieces() {
        let few = board(
            BoardBuilder::new()
                .king(Square(3, 2), Side::First)
                .man(Square(6, 1), Side::Second)
                .build(),
        );
        assert_eq!(few.eval_kings(Side::First, &W), 100);

        let many = board(
            BoardBuilder::starting_position()
                .king(Square(3, 2), Side::First)
                .build(),
        );
        assert_eq!(many.eval_kings(Side::First, &W), 0);
    }

    #[test]
    fn endgame_rewards_leader_only() {
        let b = board(
            BoardBuilder::new()
                .king(Square(0, 1), Side::First)
                .king(Square(2, 3), Side::First)
                .man(Square(7, 6), Side::Second)
                .build(),
        );
        assert_eq!(b.eval_endgame(Side::First, &W), 20);
        assert_eq!(b.eval_endgame(Side::Second, &W), 0);
    }

    #[test]
    fn endgame_inactive_with_many_pieces() {
        assert_eq!(Board::initial().eval_endgame(Side::First, &W), 0);
    }
}
