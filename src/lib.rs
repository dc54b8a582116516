//! Ice Planner - season budget planner for an ice sports team
//!
//! Given the ice rental rate, the number of ice hours, the coaching cost,
//! the jersey cost, the roster size and the payment processing fee, the
//! planner computes the season total and the cost per player. The inputs
//! are kept in sync with a shareable link and with a saved copy that is
//! restored on the next run.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Budget inputs, derived totals and number parsing
//! - `link`: Shareable link parsing and the current-link abstraction
//! - `storage`: Key-value storage for the saved state
//! - `services`: The planner session and the share cascade
//! - `widgets`: Numeric input and button controls
//! - `display`: Money formatting and the breakdown
//! - `export`: CSV, JSON and YAML snapshots
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal form
//!
//! # Example
//!
//! ```rust
//! use ice_planner::link::MemoryLocation;
//! use ice_planner::services::PlannerState;
//! use ice_planner::storage::MemoryStateStore;
//!
//! let location = MemoryLocation::parse("/ice-planner?ice=200&hours=5");
//! let planner = PlannerState::open(MemoryStateStore::new(), location);
//! assert_eq!(planner.derived().ice_total, 1000.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod link;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;
pub mod widgets;

pub use error::{PlannerError, PlannerResult};
