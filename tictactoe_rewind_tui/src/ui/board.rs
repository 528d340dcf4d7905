//! Board rendering with winner and cursor highlights.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tictactoe_rewind::{Player, Position, Square, WinLine};

use crate::app::{App, Focus};

/// Renders the 3x3 board.
pub fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let win = app.game().winning_line();
    render_row(frame, rows[0], app, win.as_ref(), 0);
    render_separator(frame, rows[1]);
    render_row(frame, rows[2], app, win.as_ref(), 3);
    render_separator(frame, rows[3]);
    render_row(frame, rows[4], app, win.as_ref(), 6);
}

fn render_row(frame: &mut Frame, area: Rect, app: &App, win: Option<&WinLine>, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (cell, chunk) in [(start, cols[0]), (start + 1, cols[2]), (start + 2, cols[4])] {
        if let Some(pos) = Position::from_index(cell) {
            render_square(frame, chunk, app, win, pos);
        }
    }
    render_vertical_separator(frame, cols[1]);
    render_vertical_separator(frame, cols[3]);
}

fn render_square(frame: &mut Frame, area: Rect, app: &App, win: Option<&WinLine>, pos: Position) {
    let (text, base_style) = match app.game().board().get(pos) {
        Square::Empty => (
            format!("{}", pos.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = win.is_some_and(|line| line.contains(pos));
    let under_cursor = app.focus() == Focus::Board && app.cursor() == pos;
    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
