//! Move-selection strategies.
//!
//! Search algorithms sit on top of the board and only use its public
//! contract: move generation, `push`/`pop`, and scoring. [`Strategy`] is that
//! seam; the board never depends on it.

use crate::coord::Move;
use crate::error::BoardError;
use crate::position::Board;

/// Something that picks moves for the player to move.
pub trait Strategy {
    fn name(&self) -> &str;

    /// Choose a legal move for `board.next_player()`.
    ///
    /// The board may be pushed and popped during the search but must be
    /// returned in the state it was given.
    fn select_move(&mut self, board: &mut Board) -> Result<Move, BoardError>;
}

/// Plays a uniformly random legal stone, passing only when there is none.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, board: &mut Board) -> Result<Move, BoardError> {
        if board.is_game_over() {
            return Err(BoardError::GameOver);
        }
        let mut candidates: Vec<Move> = board
            .weak_legal_moves()
            .into_iter()
            .filter(|&mv| mv != Move::Pass)
            .collect();
        self.rng.shuffle(&mut candidates);

        // Weak moves may still repeat a position; try them one by one
        for mv in candidates {
            let legal = board.push(mv)?;
            board.pop()?;
            if legal {
                return Ok(mv);
            }
        }
        Ok(Move::Pass)
    }
}
