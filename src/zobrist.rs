//! Zobrist hashing for board positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for the
//! transposition table.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Piece, Side, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[side][piece][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 2],
    pub(crate) second_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x7AC4_EC4E_5000_0001); // fixed seed, reproducible hashes
        let mut piece_keys = [[[0; 64]; 2]; 2];

        for side in &mut piece_keys {
            for piece in side.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys {
            piece_keys,
            second_to_move_key: rng.gen(),
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn piece_key(side: Side, piece: Piece, sq: Square) -> u64 {
    ZOBRIST.piece_keys[side.index()][piece.index()][sq.index()]
}

#[inline]
pub(crate) fn side_key(side: Side) -> u64 {
    match side {
        Side::First => 0,
        Side::Second => ZOBRIST.second_to_move_key,
    }
}
