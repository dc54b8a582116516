//! Application state for the TUI
//!
//! The App struct owns the planner session and the form controls bound to
//! it. Every edit goes through the planner, which recomputes and persists;
//! the controls are then refreshed from the planner's inputs.

use crate::config::settings::Settings;
use crate::link::LinkLocation;
use crate::models::{format_number, PlannerField};
use crate::services::{PlannerState, ShareCascade};
use crate::storage::StateStore;
use crate::widgets::{planner_field_control, ActionButton, ButtonTone, NumericField};

use super::widgets::TextInput;

/// Something on the form that can take focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(PlannerField),
    Reset,
    Share,
}

/// Focus order, top to bottom
pub const FOCUS_ORDER: [FocusTarget; 11] = [
    FocusTarget::Field(PlannerField::Team),
    FocusTarget::Field(PlannerField::LogoUrl),
    FocusTarget::Field(PlannerField::IceRate),
    FocusTarget::Field(PlannerField::IceHours),
    FocusTarget::Field(PlannerField::CoachCost),
    FocusTarget::Field(PlannerField::JerseyCost),
    FocusTarget::Field(PlannerField::PlayerCount),
    FocusTarget::Field(PlannerField::FeePercent),
    FocusTarget::Field(PlannerField::FeeFixed),
    FocusTarget::Reset,
    FocusTarget::Share,
];

/// A form row: the text being edited and, for numbers, its control
#[derive(Debug, Clone)]
pub struct FormRow {
    pub field: PlannerField,
    pub input: TextInput,
    pub control: Option<NumericField>,
}

/// Main application state
pub struct App<'a, S: StateStore, L: LinkLocation> {
    /// The planner session
    pub planner: PlannerState<S, L>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Index into [`FOCUS_ORDER`]
    pub focus_index: usize,

    /// One row per planner field, in focus order
    pub rows: Vec<FormRow>,

    pub reset_button: ActionButton,
    pub share_button: ActionButton,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a, S: StateStore, L: LinkLocation> App<'a, S, L> {
    /// Create the app around an already started planner
    pub fn new(planner: PlannerState<S, L>, settings: &'a Settings) -> Self {
        let rows = PlannerField::ALL
            .iter()
            .map(|&field| {
                let control = planner_field_control(field, 0.0);
                let input = match (&control, field) {
                    (Some(control), _) => TextInput::new()
                        .label(control.label.clone())
                        .prefix(adornment(&control.prefix, &settings.currency_symbol))
                        .suffix(control.suffix.clone()),
                    (None, PlannerField::Team) => TextInput::new().label("Team Name"),
                    (None, _) => TextInput::new().label("Logo URL"),
                };
                FormRow {
                    field,
                    input,
                    control,
                }
            })
            .collect();

        let mut app = Self {
            planner,
            settings,
            should_quit: false,
            focus_index: 0,
            rows,
            reset_button: ActionButton::new("Reset"),
            share_button: ActionButton::new("Share Budget").tone(ButtonTone::Secondary),
            status_message: None,
        };
        app.sync_rows(true);
        app.update_focus();
        app
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The focused element
    pub fn focus(&self) -> FocusTarget {
        FOCUS_ORDER[self.focus_index]
    }

    /// Move focus to the next element, wrapping around
    pub fn focus_next(&mut self) {
        self.sync_rows(true);
        self.focus_index = (self.focus_index + 1) % FOCUS_ORDER.len();
        self.update_focus();
    }

    /// Move focus to the previous element, wrapping around
    pub fn focus_prev(&mut self) {
        self.sync_rows(true);
        self.focus_index = (self.focus_index + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        let focus = self.focus();
        for row in &mut self.rows {
            row.input.focused = focus == FocusTarget::Field(row.field);
        }
    }

    /// The row being edited, if focus is on a field
    pub fn focused_row_mut(&mut self) -> Option<&mut FormRow> {
        match self.focus() {
            FocusTarget::Field(field) => self.rows.iter_mut().find(|row| row.field == field),
            _ => None,
        }
    }

    /// Push the focused row's text into the planner
    ///
    /// Numbers go through the row's control first, so the planner only
    /// ever sees clamped values. The text being typed is left alone.
    pub fn commit_focused(&mut self) {
        let FocusTarget::Field(field) = self.focus() else {
            return;
        };
        let Some(row) = self.rows.iter_mut().find(|row| row.field == field) else {
            return;
        };

        let result = match row.control.as_mut() {
            Some(control) => match control.input(row.input.value()) {
                Some(changed) => self.planner.set_number(field, changed.value),
                None => Ok(()),
            },
            None => self.planner.set_text(field, row.input.value().to_string()),
        };

        match result {
            Ok(()) => self.clear_status(),
            Err(e) => self.set_status(e.to_string()),
        }
        self.sync_rows(false);
    }

    /// Step the focused numeric field up or down
    pub fn step_focused(&mut self, up: bool) {
        let FocusTarget::Field(field) = self.focus() else {
            return;
        };
        let Some(row) = self.rows.iter_mut().find(|row| row.field == field) else {
            return;
        };
        let Some(control) = row.control.as_mut() else {
            return;
        };

        let changed = if up { control.step_up() } else { control.step_down() };
        if let Some(changed) = changed {
            if let Err(e) = self.planner.set_number(field, changed.value) {
                self.set_status(e.to_string());
            }
        }
        self.sync_rows(true);
    }

    /// Press the focused button, if focus is on one
    pub fn press_focused(&mut self) {
        match self.focus() {
            FocusTarget::Reset => {
                if self.reset_button.press(()).is_some() {
                    self.planner.reset();
                    self.sync_rows(true);
                    self.set_status("Reset to defaults");
                }
            }
            FocusTarget::Share => {
                if self.share_button.press(()).is_some() {
                    let mut cascade = ShareCascade::new();
                    match self.planner.share(&mut cascade) {
                        Ok(outcome) => self.set_status(outcome.message()),
                        Err(e) => self.set_status(e.to_string()),
                    }
                }
            }
            FocusTarget::Field(_) => {}
        }
    }

    /// Refresh the controls from the planner
    ///
    /// With `rewrite_text`, every row's text is rewritten too; otherwise the
    /// focused row keeps what the user is typing.
    pub fn sync_rows(&mut self, rewrite_text: bool) {
        let focus = self.focus();
        let inputs = self.planner.inputs();
        for row in &mut self.rows {
            let text = match inputs.number(row.field) {
                Some(n) => {
                    if let Some(control) = row.control.as_mut() {
                        control.set_value(n);
                    }
                    format_number(n)
                }
                None => inputs.text(row.field).unwrap_or_default().to_string(),
            };
            if rewrite_text || focus != FocusTarget::Field(row.field) {
                row.input.set_content(text);
            }
        }
    }
}

fn adornment(prefix: &str, currency_symbol: &str) -> String {
    if prefix == "$" {
        currency_symbol.to_string()
    } else {
        prefix.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::MemoryLocation;
    use crate::storage::MemoryStateStore;

    fn app(settings: &Settings) -> App<'_, MemoryStateStore, MemoryLocation> {
        let planner =
            PlannerState::open(MemoryStateStore::new(), MemoryLocation::parse("/ice-planner"));
        App::new(planner, settings)
    }

    fn focus_on(app: &mut App<'_, MemoryStateStore, MemoryLocation>, target: FocusTarget) {
        while app.focus() != target {
            app.focus_next();
        }
    }

    #[test]
    fn test_rows_mirror_planner() {
        let settings = Settings::default();
        let app = app(&settings);

        assert_eq!(app.rows.len(), 9);
        assert_eq!(app.rows[0].input.value(), "Bandits");
        assert_eq!(app.rows[2].input.value(), "0");
        assert!(app.rows[0].input.focused);
    }

    #[test]
    fn test_focus_wraps() {
        let settings = Settings::default();
        let mut app = app(&settings);

        app.focus_prev();
        assert_eq!(app.focus(), FocusTarget::Share);
        app.focus_next();
        assert_eq!(app.focus(), FocusTarget::Field(PlannerField::Team));
    }

    #[test]
    fn test_typing_updates_planner() {
        let settings = Settings::default();
        let mut app = app(&settings);
        focus_on(&mut app, FocusTarget::Field(PlannerField::IceRate));

        let row = app.focused_row_mut().unwrap();
        row.input.set_content("250.");
        app.commit_focused();

        assert_eq!(app.planner.inputs().ice_rate_per_hour, 250.0);
        assert_eq!(app.focused_row_mut().unwrap().input.value(), "250.");
    }

    #[test]
    fn test_negative_typed_value_is_floored() {
        let settings = Settings::default();
        let mut app = app(&settings);
        focus_on(&mut app, FocusTarget::Field(PlannerField::PlayerCount));

        app.focused_row_mut().unwrap().input.set_content("-4");
        app.commit_focused();

        assert_eq!(app.planner.inputs().player_count, 0.0);
    }

    #[test]
    fn test_step_and_reset() {
        let settings = Settings::default();
        let mut app = app(&settings);
        focus_on(&mut app, FocusTarget::Field(PlannerField::CoachCost));

        app.step_focused(true);
        app.step_focused(true);
        assert_eq!(app.planner.inputs().coach_flat_cost, 100.0);

        focus_on(&mut app, FocusTarget::Reset);
        app.press_focused();
        assert_eq!(app.planner.inputs().coach_flat_cost, 0.0);
        assert_eq!(app.rows[7].input.value(), "2");
    }

    #[test]
    fn test_share_reports_link() {
        let settings = Settings::default();
        let mut app = app(&settings);
        focus_on(&mut app, FocusTarget::Share);

        app.press_focused();
        let message = app.status_message.clone().unwrap();
        assert!(message.starts_with("Copy this URL: /ice-planner?team=Bandits"));
    }
}
