//! TUI Views module
//!
//! The header, the input form, the cost breakdown and the status bar.

pub mod breakdown;
pub mod form;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::link::LinkLocation;
use crate::storage::StateStore;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: StateStore, L: LinkLocation>(frame: &mut Frame, app: &mut App<S, L>) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    form::render(frame, app, layout.form);
    breakdown::render(frame, app, layout.breakdown);
    status_bar::render(frame, app, layout.status_bar);
}

fn render_header<S: StateStore, L: LinkLocation>(
    frame: &mut Frame,
    app: &App<S, L>,
    area: ratatui::layout::Rect,
) {
    let inputs = app.planner.inputs();
    let lines = vec![
        Line::from(Span::styled(
            format!("{} - Ice Program Planner", inputs.team),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Logo: {}", inputs.logo_url),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}
