//! Game shell: turn derivation, move attempts, status, and the move list.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::position::Position;
use crate::rules::{WinLine, is_draw, winning_line};
use crate::timeline::{JumpError, Timeline};
use crate::types::{Board, Player};

/// Status of the game, derived from the snapshot under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Result of a move attempt. Rejections leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and a new snapshot recorded.
    Placed,
    /// The target square already holds a mark.
    Occupied,
    /// The displayed snapshot already has a winner.
    GameOver,
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// History index this entry jumps to.
    pub index: usize,
    /// 1-based (row, col) of the move; `None` for the game start entry.
    pub location: Option<(usize, usize)>,
}

impl MoveRecord {
    /// Label shown for this entry in the move list.
    pub fn label(&self) -> String {
        match self.location {
            Some((row, col)) => format!("Go to move #{} ({}, {})", self.index, row, col),
            None => "Go to game start".to_string(),
        }
    }
}

/// Owns the [`Timeline`] and applies the rules of play to it.
///
/// Whose turn it is and whether the game is over are never stored;
/// both derive from the cursor and the displayed snapshot, so they
/// stay correct across jumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    timeline: Timeline,
}

impl Game {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
        }
    }

    /// The board snapshot under the cursor.
    pub fn board(&self) -> &Board {
        self.timeline.current()
    }

    /// The underlying timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Player to move: X on even cursors, O on odd.
    pub fn next_player(&self) -> Player {
        if self.timeline.cursor() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Completed line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        winning_line(self.board())
    }

    /// Derived game status for the displayed board.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winning_line() {
            GameStatus::Won(line.player)
        } else if is_draw(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Status line shown above the board.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("Winner: {player}"),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Attempts to place the next player's mark at `pos`.
    ///
    /// Rejected when the displayed board already has a winner or the
    /// square is occupied. On success the new snapshot is pushed,
    /// discarding any abandoned future.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, pos: Position) -> MoveOutcome {
        if self.winning_line().is_some() {
            debug!(?pos, "Move rejected: game already won");
            return MoveOutcome::GameOver;
        }
        if !self.board().is_empty(pos) {
            debug!(?pos, "Move rejected: square occupied");
            return MoveOutcome::Occupied;
        }
        let player = self.next_player();
        let next = self.board().place(pos, player);
        self.timeline.push(next);
        debug!(?pos, %player, move_number = self.timeline.cursor(), "Placed mark");
        MoveOutcome::Placed
    }

    /// Moves the cursor to an earlier or later snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] for an index past the last
    /// snapshot.
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        self.timeline.jump_to(index)
    }

    /// Number of the displayed move (0 at game start).
    pub fn move_number(&self) -> usize {
        self.timeline.cursor()
    }

    /// Whether the cursor sits on the last recorded snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.timeline.is_latest()
    }

    /// Move-list entries in ascending history order.
    pub fn moves(&self) -> Vec<MoveRecord> {
        let snapshots = self.timeline.snapshots();
        snapshots
            .iter()
            .enumerate()
            .map(|(index, board)| {
                let location = if index == 0 {
                    None
                } else {
                    Some(move_location(&snapshots[index - 1], board))
                };
                MoveRecord { index, location }
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// 1-based (row, col) of the single cell that differs between adjacent
/// snapshots. Falls back to (0, 0) when the snapshots are identical,
/// which a well-formed timeline never produces.
fn move_location(prev: &Board, next: &Board) -> (usize, usize) {
    for pos in Position::iter() {
        if prev.get(pos) != next.get(pos) {
            return (pos.row() + 1, pos.col() + 1);
        }
    }
    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_turn_alternation() {
        let mut game = Game::new();
        assert_eq!(game.next_player(), Player::X);
        game.attempt_move(Position::Center);
        assert_eq!(game.next_player(), Player::O);
        game.attempt_move(Position::TopLeft);
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_turn_follows_cursor_after_jump() {
        let mut game = Game::new();
        game.attempt_move(Position::Center);
        game.attempt_move(Position::TopLeft);
        game.jump_to(1).unwrap();
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut game = Game::new();
        game.attempt_move(Position::Center);
        let before = game.clone();
        assert_eq!(game.attempt_move(Position::Center), MoveOutcome::Occupied);
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_win_is_noop() {
        let mut game = Game::new();
        // X: 0, 4, 8 wins the diagonal; O: 1, 2.
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ] {
            assert_eq!(game.attempt_move(pos), MoveOutcome::Placed);
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));

        let before = game.clone();
        assert_eq!(
            game.attempt_move(Position::BottomLeft),
            MoveOutcome::GameOver
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_status_line_strings() {
        let mut game = Game::new();
        assert_eq!(game.status_line(), "Next player: X");
        game.attempt_move(Position::Center);
        assert_eq!(game.status_line(), "Next player: O");
    }

    #[test]
    fn test_move_record_labels() {
        let mut game = Game::new();
        game.attempt_move(Position::BottomCenter); // index 7 -> (3, 2)
        let moves = game.moves();
        assert_eq!(moves[0].label(), "Go to game start");
        assert_eq!(moves[1].label(), "Go to move #1 (3, 2)");
    }

    #[test]
    fn test_move_location_fallback() {
        let board = Board::new();
        assert_eq!(move_location(&board, &board), (0, 0));
    }

    #[test]
    fn test_snapshots_stay_immutable_across_play() {
        let mut game = Game::new();
        game.attempt_move(Position::Center);
        game.attempt_move(Position::TopLeft);
        let first = game.timeline().snapshots()[1];
        game.attempt_move(Position::BottomRight);
        assert_eq!(game.timeline().snapshots()[1], first);
        assert_eq!(first.get(Position::TopLeft), Square::Empty);
    }
}
