//! Snapshot history with a movable cursor.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::Board;

/// Error returned when jumping outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpError {
    /// Requested index is past the last snapshot.
    OutOfRange {
        /// The rejected jump target.
        index: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl fmt::Display for JumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpError::OutOfRange { index, len } => {
                write!(f, "jump target {index} is out of range ({len} snapshots)")
            }
        }
    }
}

impl std::error::Error for JumpError {}

/// Ordered board snapshots from game start, plus the active cursor.
///
/// Index 0 is always the empty board; index i holds the board after
/// move i. Pushing while the cursor sits before the last snapshot
/// discards the abandoned future, giving undo/redo-with-branching
/// semantics. Snapshots are never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl Timeline {
    /// Creates a timeline holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Truncates to the cursor, appends, and advances to the new snapshot.
    ///
    /// Occupancy and game-over guards are the caller's responsibility;
    /// see [`crate::game::Game::attempt_move`].
    #[instrument(skip(self, board))]
    pub fn push(&mut self, board: Board) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
        debug!(cursor = self.cursor, "Recorded snapshot");
    }

    /// Moves the cursor without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `index` is past the last
    /// snapshot; the cursor is left unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.snapshots.len() {
            return Err(JumpError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        debug!(cursor = self.cursor, "Jumped");
        Ok(())
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Cursor position, which is also the number of the displayed move.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a timeline keeps at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether the cursor sits on the last snapshot.
    pub fn is_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// All recorded snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
