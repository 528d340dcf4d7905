//! Stateless rendering of the application state.

mod board;
mod moves;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Renders the whole screen from the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(3),  // Status
            Constraint::Min(13),    // Board + move list
            Constraint::Length(1),  // Feedback
            Constraint::Length(1),  // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Rewind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(app.game().status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(34)])
        .split(chunks[2]);

    board::render_board(frame, main[0], app);
    moves::render_moves(frame, main[1], app);

    let feedback = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(feedback, chunks[3]);

    let help = format!(
        "[arrows] move  [enter] place/jump  [1-9] play cell  [tab] focus  [t] sort {}  [r] restart  [q] quit",
        app.sort().opposite()
    );
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}
