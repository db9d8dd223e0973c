//! Area scoring (Chinese rules).
//!
//! A player's score is their stones on the board plus the empty points whose
//! region borders only their stones. Dead stones are not removed, so the
//! result is only meaningful once both sides have settled their borders.
//! There is no komi.

use std::fmt;

use crate::position::{Board, Color};

/// Empty points split by which colors their region touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Areas {
    /// Points in regions touching only black stones
    pub black: u32,
    /// Points in regions touching only white stones
    pub white: u32,
    /// Points in regions touching both colors, or none
    pub neutral: u32,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    BlackWins,
    WhiteWins,
    Draw,
}

/// Chess-style notation: `1-0` when White wins, `0-1` when Black wins.
impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "1-0"),
            GameResult::BlackWins => write!(f, "0-1"),
            GameResult::Draw => write!(f, "1/2-1/2"),
        }
    }
}

impl Board {
    /// Flood-fill every empty region and classify it by the colors it
    /// touches.
    pub fn count_areas(&self) -> Areas {
        let mut areas = Areas::default();
        let mut visited = vec![false; self.points()];

        for start in self.empties() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut stack = vec![start];
            let mut region = 0u32;
            let mut touches_black = false;
            let mut touches_white = false;

            while let Some(pt) = stack.pop() {
                region += 1;
                for &n in self.neighbors(pt) {
                    match self.cell(n) {
                        None if !visited[n] => {
                            visited[n] = true;
                            stack.push(n);
                        }
                        None => {}
                        Some(Color::Black) => touches_black = true,
                        Some(Color::White) => touches_white = true,
                    }
                }
            }

            match (touches_black, touches_white) {
                (true, false) => areas.black += region,
                (false, true) => areas.white += region,
                _ => areas.neutral += region,
            }
        }
        areas
    }

    /// Area scores as `(black, white)`.
    pub fn compute_score(&self) -> (u32, u32) {
        let areas = self.count_areas();
        (
            self.stones(Color::Black) + areas.black,
            self.stones(Color::White) + areas.white,
        )
    }

    /// Winner by area score; equal scores are a draw.
    pub fn result(&self) -> GameResult {
        let (black, white) = self.compute_score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameResult::BlackWins,
            std::cmp::Ordering::Less => GameResult::WhiteWins,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Score in Go notation: `B+3`, `W+1`, or `0` for a draw.
    pub fn final_go_score(&self) -> String {
        let (black, white) = self.compute_score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => format!("B+{}", black - white),
            std::cmp::Ordering::Less => format!("W+{}", white - black),
            std::cmp::Ordering::Equal => "0".to_string(),
        }
    }
}
