//! Network input encoding.
//!
//! A position becomes an 8x8x6 tensor, flattened row-major with the plane
//! index innermost, from the point of view of one side:
//!
//! | Plane | Contents |
//! |---|---|
//! | 0 | own men |
//! | 1 | own kings |
//! | 2 | opponent men |
//! | 3 | opponent kings |
//! | 4 | reserved, always 0 |
//! | 5 | 1 everywhere when the viewer is First, else 0 |
//!
//! Rows are not flipped for Second. Pair with [`Move::policy_index`] for the
//! policy target.
//!
//! [`Move::policy_index`]: super::Move::policy_index

use super::{GameState, Piece, Side, Square};

/// Planes per square
pub const PLANE_COUNT: usize = 6;

/// Length of the flattened tensor
pub const PLANES_LEN: usize = 64 * PLANE_COUNT;

const FIRST_TO_MOVE_PLANE: usize = 5;

/// Offset of `(square, plane)` in the flattened tensor.
#[inline]
#[must_use]
pub const fn plane_offset(sq: Square, plane: usize) -> usize {
    sq.index() * PLANE_COUNT + plane
}

impl GameState {
    /// Encode the board as seen by `perspective`.
    #[must_use]
    pub fn to_planes(&self, perspective: Side) -> Vec<f32> {
        let mut planes = vec![0.0f32; PLANES_LEN];
        let board = self.board();

        for (base, side) in [(0, perspective), (2, perspective.opponent())] {
            for (piece, bb) in [(Piece::Man, board.men(side)), (Piece::King, board.kings(side))] {
                let plane = base + usize::from(piece == Piece::King);
                for sq in bb.iter() {
                    planes[plane_offset(sq, plane)] = 1.0;
                }
            }
        }

        if perspective == Side::First {
            for idx in 0..64 {
                planes[plane_offset(Square::from_index(idx), FIRST_TO_MOVE_PLANE)] = 1.0;
            }
        }
        planes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn plane_sum(planes: &[f32], plane: usize) -> f32 {
        planes.iter().skip(plane).step_by(PLANE_COUNT).sum()
    }

    #[test]
    fn initial_position_from_first() {
        let planes = GameState::new().to_planes(Side::First);
        assert_eq!(planes.len(), PLANES_LEN);
        assert_eq!(planes[plane_offset(Square(0, 1), 0)], 1.0);
        assert_eq!(planes[plane_offset(Square(7, 0), 2)], 1.0);
        assert_eq!(plane_sum(&planes, 0), 8.0);
        assert_eq!(plane_sum(&planes, 1), 0.0);
        assert_eq!(plane_sum(&planes, 2), 8.0);
        assert_eq!(plane_sum(&planes, 4), 0.0);
        assert_eq!(plane_sum(&planes, 5), 64.0);
    }

    #[test]
    fn second_sees_its_own_pieces_first() {
        let state = BoardBuilder::new()
            .king(Square(3, 2), Side::First)
            .man(Square(6, 1), Side::Second)
            .build();
        let planes = state.to_planes(Side::Second);
        assert_eq!(planes[plane_offset(Square(6, 1), 0)], 1.0);
        assert_eq!(planes[plane_offset(Square(3, 2), 3)], 1.0);
        assert_eq!(plane_sum(&planes, 0), 1.0);
        assert_eq!(plane_sum(&planes, 3), 1.0);
        assert_eq!(plane_sum(&planes, 5), 0.0);
    }
}
