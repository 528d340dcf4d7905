//! Tic-tac-toe with a rewindable history.
//!
//! Every move produces a fresh immutable board snapshot which is appended
//! to a [`Timeline`]. Jumping the timeline cursor to an earlier snapshot
//! and playing from there discards the abandoned future, giving standard
//! undo/redo-with-branching semantics.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, MoveOutcome, Position};
//!
//! let mut game = Game::new();
//! assert_eq!(game.attempt_move(Position::Center), MoveOutcome::Placed);
//! assert_eq!(game.status_line(), "Next player: O");
//!
//! // Rewind to the start and the board is empty again.
//! game.jump_to(0).unwrap();
//! assert_eq!(game.status_line(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod timeline;
pub mod types;

pub use game::{Game, GameStatus, MoveOutcome, MoveRecord};
pub use position::Position;
pub use rules::{WinLine, is_draw, winning_line};
pub use timeline::{JumpError, Timeline};
pub use types::{Board, Player, Square};
