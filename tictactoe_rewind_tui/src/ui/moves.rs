//! Move-history list rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::{App, Focus};

/// Renders the move list with the latest-move indicator.
pub fn render_moves(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Shown only while the cursor sits on the last snapshot.
    let indicator = if app.game().is_at_latest() {
        format!("You are at move #{}", app.game().move_number())
    } else {
        String::new()
    };
    let indicator = Paragraph::new(indicator).style(Style::default().fg(Color::Green));
    frame.render_widget(indicator, chunks[0]);

    let displayed_move = app.game().move_number();
    let items: Vec<ListItem> = app
        .sorted_moves()
        .iter()
        .map(|record| {
            let style = if record.index == displayed_move {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(record.label()).style(style)
        })
        .collect();

    let border_style = if app.focus() == Focus::MoveList {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Moves ({})", app.sort())),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_display_index()));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
