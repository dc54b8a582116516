//! Event handler for the TUI
//!
//! Routes keyboard events to focus movement, field editing and button
//! presses.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::link::LinkLocation;
use crate::storage::StateStore;

use super::app::{App, FocusTarget};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: StateStore, L: LinkLocation>(app: &mut App<S, L>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: StateStore, L: LinkLocation>(app: &mut App<S, L>, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return Ok(());
        }
        _ => {}
    }

    match app.focus() {
        FocusTarget::Field(field) if field.is_numeric() => handle_number_key(app, key),
        FocusTarget::Field(_) => handle_text_key(app, key),
        FocusTarget::Reset | FocusTarget::Share => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.press_focused();
            }
            Ok(())
        }
    }
}

/// Keys on the team and logo fields
fn handle_text_key<S: StateStore, L: LinkLocation>(app: &mut App<S, L>, key: KeyEvent) -> Result<()> {
    let Some(row) = app.focused_row_mut() else {
        return Ok(());
    };

    let changed = match key.code {
        KeyCode::Char(c) => {
            row.input.insert(c);
            true
        }
        KeyCode::Backspace => row.input.backspace(),
        KeyCode::Delete => row.input.delete(),
        KeyCode::Left => {
            row.input.move_left();
            false
        }
        KeyCode::Right => {
            row.input.move_right();
            false
        }
        KeyCode::Home => {
            row.input.move_start();
            false
        }
        KeyCode::End => {
            row.input.move_end();
            false
        }
        KeyCode::Enter => {
            app.focus_next();
            return Ok(());
        }
        _ => false,
    };

    if changed {
        app.commit_focused();
    }
    Ok(())
}

/// Keys on a numeric field
///
/// Left and Right step the value, like the arrows of a number input.
fn handle_number_key<S: StateStore, L: LinkLocation>(app: &mut App<S, L>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Right | KeyCode::Char('+') => {
            app.step_focused(true);
            return Ok(());
        }
        KeyCode::Left | KeyCode::Char('-') => {
            app.step_focused(false);
            return Ok(());
        }
        KeyCode::Enter => {
            app.focus_next();
            return Ok(());
        }
        _ => {}
    }

    let Some(row) = app.focused_row_mut() else {
        return Ok(());
    };
    let changed = match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E') => {
            row.input.insert(c);
            true
        }
        KeyCode::Backspace => row.input.backspace(),
        KeyCode::Delete => row.input.delete(),
        KeyCode::Home => {
            row.input.move_start();
            false
        }
        KeyCode::End => {
            row.input.move_end();
            false
        }
        _ => false,
    };

    if changed {
        app.commit_focused();
    }
    Ok(())
}
