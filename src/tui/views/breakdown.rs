//! Breakdown view
//!
//! The cost lines, the total and the per-player cost, updated on every edit.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::display::breakdown_rows;
use crate::link::LinkLocation;
use crate::storage::StateStore;
use crate::tui::app::App;

/// Render the breakdown table
pub fn render<S: StateStore, L: LinkLocation>(frame: &mut Frame, app: &App<S, L>, area: Rect) {
    let rows = breakdown_rows(
        app.planner.inputs(),
        app.planner.derived(),
        &app.settings.currency_symbol,
    );

    let table_rows: Vec<Row> = rows
        .into_iter()
        .map(|row| {
            let style = if row.is_total {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![Cell::from(row.label), Cell::from(row.amount)]).style(style)
        })
        .collect();

    let table = Table::new(table_rows, [Constraint::Min(20), Constraint::Length(14)]).block(
        Block::default()
            .title(" Cost Breakdown ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(table, area);
}
