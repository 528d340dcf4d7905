//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use crate::rules::win::winning_line;
use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is drawn: a full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}
