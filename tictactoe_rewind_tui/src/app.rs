//! Application state and key handling.

use std::fmt;

use crossterm::event::KeyCode;
use tictactoe_rewind::{Game, MoveOutcome, MoveRecord, Position};
use tracing::debug;

/// Presentation order of the move list. Does not affect the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Game start first.
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// The order the sort toggle would switch to.
    pub fn opposite(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move-history list.
    MoveList,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    sort: SortOrder,
    focus: Focus,
    selected_move: usize,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            sort: SortOrder::Ascending,
            focus: Focus::Board,
            selected_move: 0,
            message: String::new(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current move-list sort order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Pane that currently receives navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Transient feedback shown under the status line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move-list entries in display order.
    pub fn sorted_moves(&self) -> Vec<MoveRecord> {
        let mut moves = self.game.moves();
        if self.sort == SortOrder::Descending {
            moves.reverse();
        }
        moves
    }

    /// Display-order index of the selected move entry.
    pub fn selected_display_index(&self) -> usize {
        match self.sort {
            SortOrder::Ascending => self.selected_move,
            SortOrder::Descending => self.game.timeline().len() - 1 - self.selected_move,
        }
    }

    /// Dispatches a pressed key.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('t') => self.toggle_sort(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.place(pos);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => match self.focus {
                Focus::Board => self.move_cursor(-1, 0),
                Focus::MoveList => self.select_displayed_prev(),
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focus {
                Focus::Board => self.move_cursor(1, 0),
                Focus::MoveList => self.select_displayed_next(),
            },
            KeyCode::Left | KeyCode::Char('h') => {
                if self.focus == Focus::Board {
                    self.move_cursor(0, -1);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.focus == Focus::Board {
                    self.move_cursor(0, 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::MoveList => self.jump_selected(),
            },
            _ => {}
        }
    }

    /// Restarts the game, keeping the sort order.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::new();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected_move = 0;
        self.message.clear();
    }

    /// Flips the move-list order; nothing else changes.
    fn toggle_sort(&mut self) {
        self.sort = self.sort.opposite();
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::MoveList,
            Focus::MoveList => Focus::Board,
        };
    }

    fn place(&mut self, pos: Position) {
        match self.game.attempt_move(pos) {
            MoveOutcome::Placed => {
                self.selected_move = self.game.move_number();
                self.message.clear();
            }
            MoveOutcome::Occupied => {
                self.message = "That square is taken.".to_string();
            }
            MoveOutcome::GameOver => {
                self.message =
                    "The game is over. Jump back in the move list or press r.".to_string();
            }
        }
    }

    fn jump_selected(&mut self) {
        match self.game.jump_to(self.selected_move) {
            Ok(()) => self.message.clear(),
            Err(err) => self.message = err.to_string(),
        }
    }

    fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        let row = self.cursor.row() as isize + row_delta;
        let col = self.cursor.col() as isize + col_delta;
        if (0..3).contains(&row) && (0..3).contains(&col) {
            if let Some(pos) = Position::from_index((row * 3 + col) as usize) {
                self.cursor = pos;
            }
        }
    }

    /// Moves the list selection one entry up on screen.
    fn select_displayed_prev(&mut self) {
        let last = self.game.timeline().len() - 1;
        self.selected_move = match self.sort {
            SortOrder::Ascending => self.selected_move.saturating_sub(1),
            SortOrder::Descending => (self.selected_move + 1).min(last),
        };
    }

    /// Moves the list selection one entry down on screen.
    fn select_displayed_next(&mut self) {
        let last = self.game.timeline().len() - 1;
        self.selected_move = match self.sort {
            SortOrder::Ascending => (self.selected_move + 1).min(last),
            SortOrder::Descending => self.selected_move.saturating_sub(1),
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
