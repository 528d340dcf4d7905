//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// Player who completed the line.
    pub player: Player,
    /// The three cells of the line.
    pub cells: [Position; 3],
}

impl WinLine {
    /// Checks if the position belongs to the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// The eight winning lines, checked in this priority order.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line on the board.
///
/// Returns `None` when no line is complete, including on a full
/// (drawn) board.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    for cells in LINES {
        let [a, b, c] = cells;
        if let Square::Occupied(player) = board.get(a) {
            if board.get(b) == Square::Occupied(player) && board.get(c) == Square::Occupied(player)
            {
                return Some(WinLine { player, cells });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_empty_board_no_winner() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_top_row_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ]);
        let line = winning_line(&board).expect("winner");
        assert_eq!(line.player, Player::X);
        assert_eq!(
            line.cells,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
            (Position::TopLeft, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let line = winning_line(&board).expect("winner");
        assert_eq!(line.player, Player::O);
        assert_eq!(
            line.cells,
            [Position::TopCenter, Position::Center, Position::BottomCenter]
        );
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::Center, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        let line = winning_line(&board).expect("winner");
        assert_eq!(
            line.cells,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_row_major_priority_with_two_lines() {
        // X holds both the bottom row and the left column. Rows are
        // scanned before columns, so the bottom row is reported.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        let line = winning_line(&board).expect("winner");
        assert_eq!(
            line.cells,
            [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight
            ]
        );
    }

    #[test]
    fn test_full_board_no_line_is_no_winner() {
        // X O X / O X X / O X O
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_win_line_contains() {
        let line = WinLine {
            player: Player::X,
            cells: [Position::TopLeft, Position::Center, Position::BottomRight],
        };
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopRight));
    }
}
