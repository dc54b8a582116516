//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod planner;

pub use export::{handle_export_command, handle_import_command, ExportFormat};
pub use planner::{
    handle_link_command, handle_reset_command, handle_set_command, handle_share_command,
    handle_show_command,
};

use crate::config::{PlannerPaths, Settings};
use crate::error::PlannerResult;
use crate::link::{MemoryLocation, ShareLink};
use crate::services::PlannerState;
use crate::storage::FileStateStore;

/// A planner backed by the data directory, addressed by an in-memory link
pub type FilePlanner = PlannerState<FileStateStore, MemoryLocation>;

/// Open the planner the way a page load would
///
/// `link` plays the role of the address the page was opened with; without
/// one the bare page path is used and saved state is restored instead.
pub fn open_planner(
    paths: &PlannerPaths,
    settings: &Settings,
    link: Option<&str>,
) -> PlannerResult<FilePlanner> {
    paths.ensure_directories()?;

    let start = match link {
        Some(link) => ShareLink::parse(link),
        None => ShareLink::new(settings.page_path.clone()),
    };

    let store = FileStateStore::new(paths.data_dir());
    let mut planner = PlannerState::new(store, MemoryLocation::new(start))
        .with_storage_key(settings.storage_key.clone());
    planner.start();

    Ok(planner)
}
