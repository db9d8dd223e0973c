//! Union-find over board points tracking strings of stones.
//!
//! A string is a maximal 4-connected group of same-colored stones. Every
//! string is represented by one root point which stores the string's
//! liberty count and size. Non-root stones point (possibly indirectly) to
//! their root.
//!
//! The liberty count is maintained incrementally and counts liberty *edges*
//! (stone, empty neighbor) rather than distinct empty points: two stones of
//! a string touching the same empty point count it twice. The count is
//! therefore an upper bound on the true number of liberties, exact only in
//! its comparison with zero. That comparison is all capture and suicide
//! detection need.
//!
//! The registry is plain arrays so that the history trail can snapshot and
//! restore it wholesale instead of undoing merges.

use crate::constants::NO_STRING;
use crate::coord::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRegistry {
    /// Parent link, `NO_STRING` on roots and empty points
    parent: Vec<i16>,
    /// Liberty edges of the string, valid on roots only
    liberties: Vec<i16>,
    /// Stone count of the string, valid on roots only
    sizes: Vec<i16>,
}

impl StringRegistry {
    /// Registry for an empty board of `points` points.
    pub fn new(points: usize) -> Self {
        StringRegistry {
            parent: vec![NO_STRING; points],
            liberties: vec![NO_STRING; points],
            sizes: vec![NO_STRING; points],
        }
    }

    /// Root of the string containing `pt`, without modifying the structure.
    pub fn root(&self, mut pt: Point) -> Point {
        while self.parent[pt] != NO_STRING {
            pt = self.parent[pt] as Point;
        }
        pt
    }

    /// Root of the string containing `pt`. Every point on the walked path is
    /// re-linked directly to the root.
    pub fn find(&mut self, pt: Point) -> Point {
        let root = self.root(pt);
        let mut cur = pt;
        while self.parent[cur] != NO_STRING {
            let next = self.parent[cur] as Point;
            if next != root {
                self.parent[cur] = root as i16;
            }
            cur = next;
        }
        root
    }

    /// Start a one-stone string at `pt` with `liberties` empty neighbors.
    pub fn new_string(&mut self, pt: Point, liberties: i16) {
        self.parent[pt] = NO_STRING;
        self.liberties[pt] = liberties;
        self.sizes[pt] = 1;
    }

    /// Union the string rooted at `absorbed` into the one rooted at `keep`.
    ///
    /// Liberties and sizes add up; `absorbed` stops being a root.
    pub fn merge(&mut self, keep: Point, absorbed: Point) {
        debug_assert_ne!(keep, absorbed);
        debug_assert_eq!(self.parent[keep], NO_STRING);
        debug_assert_eq!(self.parent[absorbed], NO_STRING);
        self.liberties[keep] += self.liberties[absorbed];
        self.sizes[keep] += self.sizes[absorbed];
        self.liberties[absorbed] = NO_STRING;
        self.sizes[absorbed] = NO_STRING;
        self.parent[absorbed] = keep as i16;
    }

    /// Add `delta` to the liberty count of the string rooted at `root`.
    #[inline]
    pub fn adjust_liberty(&mut self, root: Point, delta: i16) {
        self.liberties[root] += delta;
    }

    /// Forget everything about `pt` (its stone was captured).
    pub fn release(&mut self, pt: Point) {
        self.parent[pt] = NO_STRING;
        self.liberties[pt] = NO_STRING;
        self.sizes[pt] = NO_STRING;
    }

    /// Liberty count stored at `root`; `NO_STRING` if `root` heads no string.
    #[inline]
    pub fn liberties(&self, root: Point) -> i16 {
        self.liberties[root]
    }

    /// Stone count stored at `root`; `NO_STRING` if `root` heads no string.
    #[inline]
    pub fn size(&self, root: Point) -> i16 {
        self.sizes[root]
    }
}
