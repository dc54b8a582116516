//! Storage layer for the ice planner
//!
//! Provides the key/value stores the planner saves its state blob to, with
//! atomic writes for the file-backed store.

pub mod file_io;
pub mod state_store;

pub use file_io::{read_text, write_text_atomic};
pub use state_store::{FileStateStore, MemoryStateStore, StateStore};

/// Key the planner state is stored under
pub const STATE_KEY: &str = "ice-planner-state";
