//! Core data models for the ice planner
//!
//! This module contains the data structures the planner works with:
//! the user-entered inputs, the totals derived from them, and the number
//! handling shared by link parameters and typed input.

pub mod derived;
pub mod inputs;
pub mod number;

pub use derived::BudgetDerived;
pub use inputs::{BudgetInputs, PlannerField, DEFAULT_LOGO, DEFAULT_TEAM, RESET_LOGO};
pub use number::{format_number, parse_finite, parse_leading_float};
