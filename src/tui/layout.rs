//! Layout definitions for the TUI
//!
//! Header on top, the form on the left, the breakdown on the right and a
//! status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Team name and logo
    pub header: Rect,
    /// Input form and buttons
    pub form: Rect,
    /// Cost breakdown
    pub breakdown: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(12),   // Form and breakdown
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            form: horizontal[0],
            breakdown: horizontal[1],
            status_bar: vertical[2],
        }
    }
}
