//! Goban: a rules engine for small-board Go.
//!
//! The engine tracks strings of stones with a union-find, hashes positions
//! incrementally (Zobrist), and enforces suicide and positional super-ko.
//! Moves can be pushed and popped cheaply, which is what game-tree search
//! needs; final positions are scored by area (Chinese rules).
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and move-name constants
//! - [`coord`] - Flat/coordinate/name encodings of moves
//! - [`zobrist`] - Position hashing
//! - [`strings`] - Union-find over strings of stones
//! - [`position`] - The board and its rules (legality, captures, push/pop)
//! - [`trail`] - Snapshot stack behind push/pop
//! - [`scoring`] - Area counting and game result
//! - [`player`] - Strategy interface for search code
//! - [`gtp`] - Go Text Protocol front-end
//!
//! ## Example
//!
//! ```
//! use goban::coord::Move;
//! use goban::position::Board;
//!
//! let mut board = Board::new(5).unwrap();
//! board.play_named("C3").unwrap();
//!
//! // Explore a reply and take it back
//! let reply = board.name_to_move("C4").unwrap();
//! assert!(board.push(reply).unwrap());
//! board.pop().unwrap();
//!
//! board.play(Move::Pass).unwrap();
//! board.play(Move::Pass).unwrap();
//! assert!(board.is_game_over());
//! assert_eq!(board.final_go_score(), "B+25");
//! ```

pub mod constants;
pub mod coord;
pub mod error;
pub mod gtp;
pub mod player;
pub mod position;
pub mod scoring;
pub mod strings;
pub mod trail;
pub mod zobrist;
