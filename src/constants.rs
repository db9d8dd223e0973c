//! Board dimensions, move naming and other engine constants.
//!
//! The engine targets small square boards. Every point must be nameable with
//! the letters `A`..`J` (skipping `I`), which caps the side at nine.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest supported board side.
pub const MIN_SIZE: usize = 2;

/// Largest supported board side (one column per letter in [`COLUMN_LETTERS`]).
pub const MAX_SIZE: usize = 9;

/// Board side used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 9;

/// Maximum number of orthogonal neighbors of a point.
pub const MAX_NEIGHBORS: usize = 4;

// =============================================================================
// Move Names
// =============================================================================

/// Column letters, left to right. There is no `I` (Go convention to avoid
/// confusion with `J`).
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJ";

/// Name of the pass move.
pub const PASS_NAME: &str = "PASS";

/// Coordinate pair used for the pass move.
pub const PASS_COORD: (i32, i32) = (-1, -1);

// =============================================================================
// Union-Find Sentinels
// =============================================================================

/// Marker stored in the string registry for "no parent" and for the
/// liberties/size of a cell that does not head a live string.
pub const NO_STRING: i16 = -1;
