//! Terminal User Interface module
//!
//! An interactive form for the planner using ratatui: inputs on the left,
//! the live breakdown on the right.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
