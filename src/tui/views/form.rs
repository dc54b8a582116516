//! Form view
//!
//! One line per field, then the Reset and Share buttons.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::link::LinkLocation;
use crate::storage::StateStore;
use crate::tui::app::{App, FocusTarget};
use crate::widgets::{ActionButton, ButtonTone};

/// Render the form
pub fn render<S: StateStore, L: LinkLocation>(frame: &mut Frame, app: &App<S, L>, area: Rect) {
    let block = Block::default()
        .title(" Season Inputs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = app.rows.iter().map(|_| Constraint::Length(1)).collect();
    constraints.push(Constraint::Length(1)); // spacer
    constraints.push(Constraint::Length(1)); // buttons
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, chunk) in app.rows.iter().zip(chunks.iter()) {
        frame.render_widget(row.input.clone(), *chunk);
    }

    let buttons_area = chunks[app.rows.len() + 1];
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Length(18), Constraint::Min(0)])
        .split(buttons_area);

    render_button(frame, &app.reset_button, app.focus() == FocusTarget::Reset, buttons[0]);
    render_button(frame, &app.share_button, app.focus() == FocusTarget::Share, buttons[1]);
}

fn render_button(frame: &mut Frame, button: &ActionButton, focused: bool, area: Rect) {
    let color = match button.tone {
        ButtonTone::Primary => Color::Blue,
        ButtonTone::Secondary => Color::Magenta,
        ButtonTone::Outline | ButtonTone::Ghost => Color::Gray,
    };
    let mut style = Style::default().fg(color);
    if focused {
        style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
    }
    if button.disabled {
        style = Style::default().fg(Color::DarkGray);
    }

    let label = Paragraph::new(Span::styled(format!("[ {} ]", button.label), style));
    frame.render_widget(label, area);
}
