//! Service layer for the ice planner
//!
//! The service layer holds the planner's behaviour on top of the models and
//! the storage layer: restoring, recomputing and persisting state, and
//! sharing the resulting link.

pub mod planner;
pub mod share;

pub use planner::{PlannerPhase, PlannerState, RestoreSource};
pub use share::{Clipboard, PlatformShare, ShareCascade, ShareOutcome, ShareRequest};
