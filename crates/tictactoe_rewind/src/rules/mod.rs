//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules are separated
//! from board storage so the game shell and the tests can compose them
//! freely.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, winning_line};
