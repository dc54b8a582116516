//! Display formatting for terminal output
//!
//! Provides formatters for the cost breakdown and currency amounts.

pub mod breakdown;
pub mod money;

pub use breakdown::{breakdown_rows, format_breakdown, BreakdownRow};
pub use money::{format_amount, format_grouped};
