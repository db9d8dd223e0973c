//! Coordinate encodings.
//!
//! A point can be written three ways:
//! - flat: a single index `y * size + x`, used everywhere inside the engine
//! - coord: a pair `(x, y)` with `(0, 0)` in the bottom-left corner
//! - name: a column letter (`A`..`J`, no `I`) followed by a 1-based row
//!   number counted from the bottom, e.g. `"C4"`, or `"PASS"`
//!
//! The pass move has no flat index; as a coord it is [`PASS_COORD`].

use crate::constants::{COLUMN_LETTERS, MAX_NEIGHBORS, PASS_COORD, PASS_NAME};
use crate::error::BoardError;

/// A point on the board, as a flat index in `0..size * size`.
pub type Point = usize;

/// A coordinate pair. Signed so that the pass sentinel `(-1, -1)` fits.
pub type Coord = (i32, i32);

/// A move: put a stone on a point, or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
}

/// Flat index of the point at column `x`, row `y`.
#[inline]
pub fn flatten(size: usize, x: usize, y: usize) -> Point {
    y * size + x
}

/// Inverse of [`flatten`]: `(x, y)` of a flat index.
#[inline]
pub fn unflatten(size: usize, pt: Point) -> (usize, usize) {
    (pt % size, pt / size)
}

/// Convert a move to its coordinate pair.
pub fn move_to_coord(size: usize, mv: Move) -> Coord {
    match mv {
        Move::Pass => PASS_COORD,
        Move::Play(pt) => {
            let (x, y) = unflatten(size, pt);
            (x as i32, y as i32)
        }
    }
}

/// Convert a coordinate pair to a move.
///
/// # Errors
/// `InvalidMoveName` if the pair is neither the pass sentinel nor on the board.
pub fn coord_to_move(size: usize, coord: Coord) -> Result<Move, BoardError> {
    if coord == PASS_COORD {
        return Ok(Move::Pass);
    }
    let (x, y) = coord;
    if x < 0 || y < 0 || x as usize >= size || y as usize >= size {
        return Err(BoardError::InvalidMoveName(format!("({x},{y})")));
    }
    Ok(Move::Play(flatten(size, x as usize, y as usize)))
}

/// Parse a move name (e.g. `"D4"`, `"PASS"`) into a coordinate pair.
///
/// Letters are accepted in either case.
///
/// # Errors
/// `InvalidMoveName` if the letter is unknown (including `I`) or the row is
/// not a number in `1..=size`.
pub fn name_to_coord(size: usize, name: &str) -> Result<Coord, BoardError> {
    if name.eq_ignore_ascii_case(PASS_NAME) {
        return Ok(PASS_COORD);
    }
    let invalid = || BoardError::InvalidMoveName(name.to_string());

    let bytes = name.as_bytes();
    let (&letter, digits) = bytes.split_first().ok_or_else(invalid)?;
    let letter = letter.to_ascii_uppercase();
    let col = COLUMN_LETTERS[..size]
        .iter()
        .position(|&c| c == letter)
        .ok_or_else(invalid)?;

    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let row: usize = name[1..].parse().map_err(|_| invalid())?;
    if row == 0 || row > size {
        return Err(invalid());
    }
    Ok((col as i32, row as i32 - 1))
}

/// Name of a coordinate pair. `(-1, -1)` is `"PASS"`.
///
/// The pair must be on a board of at most nine columns.
pub fn coord_to_name(coord: Coord) -> String {
    if coord == PASS_COORD {
        return PASS_NAME.to_string();
    }
    let (x, y) = coord;
    format!("{}{}", COLUMN_LETTERS[x as usize] as char, y + 1)
}

/// Parse a move name into a [`Move`].
pub fn name_to_move(size: usize, name: &str) -> Result<Move, BoardError> {
    coord_to_move(size, name_to_coord(size, name)?)
}

/// Name of a [`Move`], e.g. `"C4"` or `"PASS"`.
pub fn move_to_name(size: usize, mv: Move) -> String {
    coord_to_name(move_to_coord(size, mv))
}

/// Orthogonal neighbors of every point, indexed by flat point.
pub fn neighbor_table(size: usize) -> Vec<Vec<Point>> {
    (0..size * size)
        .map(|pt| {
            let (x, y) = unflatten(size, pt);
            let mut v = Vec::with_capacity(MAX_NEIGHBORS);
            if x + 1 < size {
                v.push(flatten(size, x + 1, y));
            }
            if x > 0 {
                v.push(flatten(size, x - 1, y));
            }
            if y + 1 < size {
                v.push(flatten(size, x, y + 1));
            }
            if y > 0 {
                v.push(flatten(size, x, y - 1));
            }
            v
        })
        .collect()
}
