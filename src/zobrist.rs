//! Zobrist hashing of board positions.
//!
//! Each (point, color) pair gets a random 64-bit constant, plus one constant
//! per color for "this color just passed". The hash of a position is the XOR
//! of the constants of every stone on the board and of the pending pass, if
//! any. XOR is its own inverse, so removing a stone applies the same
//! constant again.
//!
//! The table belongs to one board and is never mutated after construction.
//! 64-bit constants keep the birthday bound far above the few hundred
//! positions a game on a small board can reach.

use crate::coord::Point;
use crate::position::Color;

/// Random constants for every (point, color) pair and both pass flavors.
#[derive(Debug, Clone)]
pub struct Zobrist {
    stones: Vec<[u64; 2]>,
    passes: [u64; 2],
}

impl Zobrist {
    /// Draw a fresh table for `points` board points.
    pub fn new(points: usize, rng: &mut fastrand::Rng) -> Self {
        let stones = (0..points).map(|_| [rng.u64(..), rng.u64(..)]).collect();
        let passes = [rng.u64(..), rng.u64(..)];
        Zobrist { stones, passes }
    }

    #[inline]
    pub fn stone(&self, pt: Point, color: Color) -> u64 {
        self.stones[pt][color.index()]
    }

    #[inline]
    pub fn pass(&self, color: Color) -> u64 {
        self.passes[color.index()]
    }
}

/// Incremental position fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionHash(u64);

impl PositionHash {
    /// Toggle a stone: adds it if absent, removes it if present.
    #[inline]
    pub fn apply_stone(&mut self, table: &Zobrist, pt: Point, color: Color) {
        self.0 ^= table.stone(pt, color);
    }

    /// Toggle the pass marker of `color`.
    #[inline]
    pub fn apply_pass(&mut self, table: &Zobrist, color: Color) {
        self.0 ^= table.pass(color);
    }

    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }
}
