//! Export module for the ice planner
//!
//! Snapshots the planner inputs and totals in multiple formats:
//! - CSV: spreadsheet-compatible `section,field,value` rows
//! - JSON: machine-readable, can be imported back
//! - YAML: human-readable, can be imported back

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, import_from_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
