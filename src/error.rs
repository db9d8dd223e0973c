//! Errors reported by the board engine.
//!
//! Only structural misuse ends up here. A move that is merely illegal under
//! the rules (suicide, positional super-ko) is reported by a `false` return
//! from [`Board::push`](crate::position::Board::push), because search code
//! probes such moves all the time.

use std::fmt;

use crate::coord::Point;

/// Why a point cannot receive a stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Point is not empty
    Occupied,
    /// Index lies outside the board
    OffBoard,
}

/// Errors raised when the engine is used incorrectly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Move name is not `PASS` nor a letter in `A..J` followed by a row number.
    InvalidMoveName(String),
    /// Stone placement on an occupied or off-board point.
    InvalidMove { point: Point, reason: InvalidReason },
    /// A move was attempted after two consecutive passes.
    GameOver,
    /// `pop` was called with no matching `push`.
    EmptyTrail,
    /// Board side outside the supported range.
    InvalidBoardSize(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidMoveName(name) => write!(f, "invalid move name: {name:?}"),
            BoardError::InvalidMove {
                point,
                reason: InvalidReason::Occupied,
            } => write!(f, "illegal move: point {point} not empty"),
            BoardError::InvalidMove {
                point,
                reason: InvalidReason::OffBoard,
            } => write!(f, "illegal move: point {point} off the board"),
            BoardError::GameOver => write!(f, "illegal state: game is over"),
            BoardError::EmptyTrail => write!(f, "illegal state: nothing to undo"),
            BoardError::InvalidBoardSize(size) => write!(f, "unsupported board size {size}"),
        }
    }
}

impl std::error::Error for BoardError {}
