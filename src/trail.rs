//! History trail: a stack of full-state snapshots for push/pop.
//!
//! Every `push` stores a copy of the mutable board state before the move is
//! applied; the matching `pop` puts it back in one piece. Frames must be
//! popped in the exact reverse order of the pushes.

use crate::position::State;

/// One snapshot, taken just before a move is tried.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Board state before the move
    pub(crate) state: State,
    /// Whether the move went through (a rejected move leaves its frame too)
    pub(crate) committed: bool,
    /// Hash this move added to the seen-position set, if it added one
    pub(crate) recorded: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct Trail {
    frames: Vec<Frame>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `state`.
    pub(crate) fn push(&mut self, state: State) {
        self.frames.push(Frame {
            state,
            committed: false,
            recorded: None,
        });
    }

    /// Mark the move of the top frame as applied. `recorded` is the hash it
    /// newly inserted into the seen set.
    pub(crate) fn mark_committed(&mut self, recorded: Option<u64>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.committed = true;
            frame.recorded = recorded;
        }
    }

    /// Remove and return the top frame.
    pub(crate) fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Number of frames on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
