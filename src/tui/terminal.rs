//! Terminal session for the TUI
//!
//! Raw mode and the alternate screen are held by a guard that puts the
//! terminal back when dropped, on error paths too. A panic hook does the
//! same before the panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::link::LinkLocation;
use crate::services::PlannerState;
use crate::storage::StateStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// The ratatui terminal on stdout
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the TUI runs
pub struct TerminalSession {
    pub terminal: Tui,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> Result<Self> {
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = leave_terminal();
            previous_hook(info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = leave_terminal() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

fn leave_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Run the TUI on an already started planner until the user quits
pub fn run_tui<S: StateStore, L: LinkLocation>(
    planner: PlannerState<S, L>,
    settings: &Settings,
) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut app = App::new(planner, settings);
    let events = EventHandler::default();

    while !app.should_quit {
        session
            .terminal
            .draw(|frame| super::views::render(frame, &mut app))?;
        handle_event(&mut app, events.next()?)?;
    }

    Ok(())
}
