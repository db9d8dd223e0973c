//! Board state and move execution.
//!
//! This module provides the core rules engine:
//! - Board state as a flat array of points plus string bookkeeping
//! - Legality checks (suicide and positional super-ko)
//! - Stone placement and capture resolution
//! - Push/pop of moves for game-tree search
//!
//! Black always moves first. A move is either committed whole or, when the
//! rules forbid it, not applied at all.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use tracing::{debug, trace};

use crate::constants::{MAX_NEIGHBORS, MAX_SIZE, MIN_SIZE};
use crate::coord::{self, Move, Point};
use crate::error::{BoardError, InvalidReason};
use crate::strings::StringRegistry;
use crate::trail::Trail;
use crate::zobrist::{PositionHash, Zobrist};

/// Stone color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Everything that changes when a move is played.
///
/// This is exactly what the history trail saves and restores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Stone on each point, `None` for empty
    pub(crate) grid: Vec<Option<Color>>,
    /// String bookkeeping; a point heads a string iff it holds a stone
    pub(crate) strings: StringRegistry,
    /// Empty points
    pub(crate) empties: BTreeSet<Point>,
    /// Stones on the board, per color
    pub(crate) stones: [u32; 2],
    /// Stones captured BY each color
    pub(crate) captures: [u32; 2],
    /// Player to move
    pub(crate) next: Color,
    /// Whether the previous move was a pass
    pub(crate) last_passed: bool,
    /// Set by two consecutive passes
    pub(crate) game_over: bool,
    pub(crate) hash: PositionHash,
}

impl State {
    fn new(points: usize) -> Self {
        State {
            grid: vec![None; points],
            strings: StringRegistry::new(points),
            empties: (0..points).collect(),
            stones: [0; 2],
            captures: [0; 2],
            next: Color::Black,
            last_passed: false,
            game_over: false,
            hash: PositionHash::default(),
        }
    }
}

/// Strings adjacent to a point, each with its liberty count after that
/// point is filled.
struct Survey {
    has_empty: bool,
    friends: Vec<(Point, i16)>,
    enemies: Vec<(Point, i16)>,
}

/// Result of trying to apply a move whose usage was already validated.
enum Outcome {
    Rejected,
    Committed { new_position: bool },
}

/// A Go board: rules engine with undo support.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    neighbors: Vec<Vec<Point>>,
    zobrist: Zobrist,
    state: State,
    /// Hashes reached after each committed move on the current path
    seen: HashSet<u64>,
    trail: Trail,
    history: Vec<Move>,
}

impl Board {
    /// Create an empty `size` x `size` board with a freshly drawn hash table.
    ///
    /// # Errors
    /// `InvalidBoardSize` unless `2 <= size <= 9`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_rng(size, fastrand::Rng::new())
    }

    /// Like [`Board::new`], with a reproducible hash table.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(size, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(size: usize, mut rng: fastrand::Rng) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidBoardSize(size));
        }
        let points = size * size;
        Ok(Board {
            size,
            neighbors: coord::neighbor_table(size),
            zobrist: Zobrist::new(points, &mut rng),
            state: State::new(points),
            seen: HashSet::new(),
            trail: Trail::new(),
            history: Vec::new(),
        })
    }

    /// Reset to the empty board, keeping size and hash table.
    pub fn clear(&mut self) {
        self.state = State::new(self.points());
        self.seen.clear();
        self.trail = Trail::new();
        self.history.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of points on the board.
    pub fn points(&self) -> usize {
        self.size * self.size
    }

    pub fn next_player(&self) -> Color {
        self.state.next
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn last_player_passed(&self) -> bool {
        self.state.last_passed
    }

    /// Stone at `pt`, `None` if empty.
    pub fn cell(&self, pt: Point) -> Option<Color> {
        self.state.grid[pt]
    }

    /// Orthogonal neighbors of `pt`.
    pub fn neighbors(&self, pt: Point) -> &[Point] {
        &self.neighbors[pt]
    }

    /// Empty points in increasing order.
    pub fn empties(&self) -> impl Iterator<Item = Point> + '_ {
        self.state.empties.iter().copied()
    }

    /// Number of `color` stones on the board.
    pub fn stones(&self, color: Color) -> u32 {
        self.state.stones[color.index()]
    }

    /// Number of stones captured by `color` so far.
    pub fn captures(&self, color: Color) -> u32 {
        self.state.captures[color.index()]
    }

    /// Black stones minus white stones on the board.
    pub fn diff_stones_board(&self) -> i32 {
        self.stones(Color::Black) as i32 - self.stones(Color::White) as i32
    }

    /// Stones captured by Black minus stones captured by White.
    pub fn diff_stones_captured(&self) -> i32 {
        self.captures(Color::Black) as i32 - self.captures(Color::White) as i32
    }

    /// Current position hash.
    pub fn hash(&self) -> u64 {
        self.state.hash.value()
    }

    /// Maintained liberty count of the string at `pt`, `None` if `pt` is
    /// empty. Shared liberties of merged strings are counted once per
    /// adjacent stone, so only the comparison with zero is exact.
    pub fn liberties(&self, pt: Point) -> Option<i16> {
        self.state.grid[pt]?;
        Some(self.state.strings.liberties(self.state.strings.root(pt)))
    }

    /// Number of stones in the string at `pt`, `None` if `pt` is empty.
    pub fn string_size(&self, pt: Point) -> Option<i16> {
        self.state.grid[pt]?;
        Some(self.state.strings.size(self.state.strings.root(pt)))
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &State {
        &self.state
    }

    /// Number of moves that can still be popped.
    pub fn depth(&self) -> usize {
        self.trail.depth()
    }

    /// Moves committed so far on the current path.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Named moves committed so far on the current path.
    pub fn history_names(&self) -> Vec<String> {
        self.history.iter().map(|&mv| self.move_to_name(mv)).collect()
    }

    pub fn move_to_name(&self, mv: Move) -> String {
        coord::move_to_name(self.size, mv)
    }

    pub fn name_to_move(&self, name: &str) -> Result<Move, BoardError> {
        coord::name_to_move(self.size, name)
    }

    // =========================================================================
    // Legality
    // =========================================================================

    /// Every move that passes both the suicide and the super-ko check, plus
    /// pass. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.state.game_over {
            return Vec::new();
        }
        let color = self.state.next;
        let mut moves: Vec<Move> = self
            .state
            .empties
            .iter()
            .filter(|&&pt| !self.is_suicide(pt, color) && !self.super_ko_check(pt, color).0)
            .map(|&pt| Move::Play(pt))
            .collect();
        moves.push(Move::Pass);
        moves
    }

    /// Moves that pass the suicide check, plus pass. Some may still repeat a
    /// position: [`Board::push`] then returns `false`.
    pub fn weak_legal_moves(&self) -> Vec<Move> {
        if self.state.game_over {
            return Vec::new();
        }
        let color = self.state.next;
        let mut moves: Vec<Move> = self
            .state
            .empties
            .iter()
            .filter(|&&pt| !self.is_suicide(pt, color))
            .map(|&pt| Move::Play(pt))
            .collect();
        moves.push(Move::Pass);
        moves
    }

    /// Whether `mv` is legal for the player to move, super-ko included.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.weak_is_legal(mv)
            && match mv {
                Move::Pass => true,
                Move::Play(pt) => !self.super_ko_check(pt, self.state.next).0,
            }
    }

    /// Whether `mv` is legal for the player to move, ignoring super-ko.
    pub fn weak_is_legal(&self, mv: Move) -> bool {
        if self.state.game_over {
            return false;
        }
        match mv {
            Move::Pass => true,
            Move::Play(pt) => {
                pt < self.points()
                    && self.state.grid[pt].is_none()
                    && !self.is_suicide(pt, self.state.next)
            }
        }
    }

    /// Look at the strings around the empty point `pt` as if `color` played
    /// there. Strings are deduplicated by root.
    fn survey(&self, pt: Point, color: Color) -> Survey {
        let mut survey = Survey {
            has_empty: false,
            friends: Vec::with_capacity(MAX_NEIGHBORS),
            enemies: Vec::with_capacity(MAX_NEIGHBORS),
        };
        for &n in &self.neighbors[pt] {
            let Some(c) = self.state.grid[n] else {
                survey.has_empty = true;
                continue;
            };
            let root = self.state.strings.root(n);
            let list = if c == color {
                &mut survey.friends
            } else {
                &mut survey.enemies
            };
            match list.iter_mut().find(|(r, _)| *r == root) {
                Some((_, libs)) => *libs -= 1,
                None => list.push((root, self.state.strings.liberties(root) - 1)),
            }
        }
        survey
    }

    /// Whether `color` playing on the empty point `pt` would leave its own
    /// string without liberties and capture nothing.
    pub fn is_suicide(&self, pt: Point, color: Color) -> bool {
        let survey = self.survey(pt, color);
        if survey.has_empty {
            return false;
        }
        if survey.enemies.iter().any(|&(_, libs)| libs == 0) {
            return false;
        }
        if survey.friends.is_empty() {
            return true;
        }
        survey.friends.iter().map(|&(_, libs)| libs).sum::<i16>() == 0
    }

    /// Predict the hash after `color` plays on the empty point `pt`,
    /// captures included, without touching the board.
    ///
    /// Returns whether that position was already reached on the current
    /// path, and the predicted hash.
    pub fn super_ko_check(&self, pt: Point, color: Color) -> (bool, PositionHash) {
        let mut hash = self.state.hash;
        if self.state.last_passed {
            hash.apply_pass(&self.zobrist, color.opponent());
        }
        hash.apply_stone(&self.zobrist, pt, color);

        let opponent = color.opponent();
        for (root, libs) in self.survey(pt, color).enemies {
            if libs == 0 {
                for s in self.string_stones(root) {
                    hash.apply_stone(&self.zobrist, s, opponent);
                }
            }
        }
        (self.seen.contains(&hash.value()), hash)
    }

    /// All stones of the string containing `start`, by flood fill.
    pub fn string_stones(&self, start: Point) -> Vec<Point> {
        let Some(color) = self.state.grid[start] else {
            return Vec::new();
        };
        let mut visited = vec![false; self.points()];
        let mut stack = vec![start];
        let mut out = Vec::new();
        visited[start] = true;
        while let Some(pt) = stack.pop() {
            out.push(pt);
            for &n in &self.neighbors[pt] {
                if !visited[n] && self.state.grid[n] == Some(color) {
                    visited[n] = true;
                    stack.push(n);
                }
            }
        }
        out
    }

    // =========================================================================
    // Playing moves
    // =========================================================================

    /// Play `mv` for the player to move, without a way to undo it.
    ///
    /// Returns `Ok(false)` and leaves the board unchanged if the move is
    /// suicide or repeats an earlier position.
    ///
    /// # Errors
    /// `GameOver` after two passes; `InvalidMove` on an occupied or
    /// off-board point.
    pub fn play(&mut self, mv: Move) -> Result<bool, BoardError> {
        self.check_usage(mv)?;
        Ok(match self.commit(mv) {
            Outcome::Rejected => false,
            Outcome::Committed { .. } => true,
        })
    }

    /// Parse and [`play`](Board::play) a named move.
    pub fn play_named(&mut self, name: &str) -> Result<bool, BoardError> {
        let mv = self.name_to_move(name)?;
        self.play(mv)
    }

    /// Save the current state, then play `mv`.
    ///
    /// Every successful call must be matched by one [`pop`](Board::pop),
    /// including calls returning `Ok(false)`: the board is then unchanged
    /// but the saved frame is still on the trail.
    ///
    /// # Errors
    /// Same as [`play`](Board::play); nothing is saved in that case.
    pub fn push(&mut self, mv: Move) -> Result<bool, BoardError> {
        self.check_usage(mv)?;
        self.trail.push(self.state.clone());
        match self.commit(mv) {
            Outcome::Rejected => Ok(false),
            Outcome::Committed { new_position } => {
                let recorded = new_position.then(|| self.hash());
                self.trail.mark_committed(recorded);
                Ok(true)
            }
        }
    }

    /// Undo the last [`push`](Board::push).
    ///
    /// # Errors
    /// `EmptyTrail` if there is nothing to undo.
    pub fn pop(&mut self) -> Result<(), BoardError> {
        let frame = self.trail.pop().ok_or(BoardError::EmptyTrail)?;
        if let Some(hash) = frame.recorded {
            debug_assert_eq!(hash, self.hash());
            self.seen.remove(&hash);
        }
        if frame.committed {
            self.history.pop();
        }
        self.state = frame.state;
        Ok(())
    }

    fn check_usage(&self, mv: Move) -> Result<(), BoardError> {
        if self.state.game_over {
            return Err(BoardError::GameOver);
        }
        if let Move::Play(point) = mv {
            if point >= self.points() {
                return Err(BoardError::InvalidMove {
                    point,
                    reason: InvalidReason::OffBoard,
                });
            }
            if self.state.grid[point].is_some() {
                return Err(BoardError::InvalidMove {
                    point,
                    reason: InvalidReason::Occupied,
                });
            }
        }
        Ok(())
    }

    /// Apply a move whose usage is valid, checking the rules first.
    fn commit(&mut self, mv: Move) -> Outcome {
        let color = self.state.next;
        match mv {
            Move::Pass => self.play_pass(color),
            Move::Play(pt) => {
                if self.is_suicide(pt, color) {
                    trace!(mv = %self.move_to_name(mv), %color, "rejected: suicide");
                    return Outcome::Rejected;
                }
                let (repeats, predicted) = self.super_ko_check(pt, color);
                if repeats {
                    trace!(mv = %self.move_to_name(mv), %color, "rejected: super-ko");
                    return Outcome::Rejected;
                }
                self.place_stone(pt, color);
                debug_assert_eq!(predicted, self.state.hash);
            }
        }
        self.state.next = color.opponent();
        self.history.push(mv);
        let hash = self.hash();
        Outcome::Committed {
            new_position: self.seen.insert(hash),
        }
    }

    /// Pass for `color`. The second pass in a row ends the game.
    fn play_pass(&mut self, color: Color) {
        let state = &mut self.state;
        if state.last_passed {
            state.hash.apply_pass(&self.zobrist, color.opponent());
            state.game_over = true;
            debug!(
                black = state.stones[0],
                white = state.stones[1],
                "game over after two passes"
            );
        }
        state.hash.apply_pass(&self.zobrist, color);
        state.last_passed = true;
    }

    /// Put a `color` stone on the empty point `pt` and resolve captures.
    ///
    /// The move must already be known legal.
    fn place_stone(&mut self, pt: Point, color: Color) {
        let neighbors = &self.neighbors[pt];
        let state = &mut self.state;

        if state.last_passed {
            state.hash.apply_pass(&self.zobrist, color.opponent());
            state.last_passed = false;
        }
        state.grid[pt] = Some(color);
        state.hash.apply_stone(&self.zobrist, pt, color);
        state.empties.remove(&pt);
        state.stones[color.index()] += 1;

        let empty = neighbors
            .iter()
            .filter(|&&n| state.grid[n].is_none())
            .count();
        state.strings.new_string(pt, empty as i16);

        // Neighbor survey: connect friends, collect enemy strings to capture
        let mut current = pt;
        let mut doomed: Vec<Point> = Vec::with_capacity(MAX_NEIGHBORS);
        for &n in neighbors {
            match state.grid[n] {
                None => {}
                Some(c) if c == color => {
                    let root = state.strings.find(n);
                    state.strings.adjust_liberty(root, -1);
                    if root != current {
                        state.strings.merge(root, current);
                        current = root;
                    }
                }
                Some(_) => {
                    let root = state.strings.find(n);
                    state.strings.adjust_liberty(root, -1);
                    if state.strings.liberties(root) == 0 && !doomed.contains(&root) {
                        doomed.push(root);
                    }
                }
            }
        }

        for root in doomed {
            self.capture_string(root, color);
        }
    }

    /// Remove the string rooted at `root`, captured by `capturer`.
    fn capture_string(&mut self, root: Point, capturer: Color) {
        let stones = self.string_stones(root);
        let neighbors = &self.neighbors;
        let state = &mut self.state;
        let victim = capturer.opponent();
        debug_assert_eq!(state.strings.size(root), stones.len() as i16);

        for &s in &stones {
            state.grid[s] = None;
            state.hash.apply_stone(&self.zobrist, s, victim);
            state.empties.insert(s);
        }
        state.stones[victim.index()] -= stones.len() as u32;
        state.captures[capturer.index()] += stones.len() as u32;

        // Each freed point gives a liberty back to every string next to it
        for &s in &stones {
            for &n in &neighbors[s] {
                if state.grid[n].is_some() {
                    let r = state.strings.find(n);
                    state.strings.adjust_liberty(r, 1);
                }
            }
        }
        for &s in &stones {
            state.strings.release(s);
        }
    }
}
