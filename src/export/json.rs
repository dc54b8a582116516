//! JSON Export functionality
//!
//! Exports the planner inputs and totals to JSON with schema versioning,
//! and reads such an export back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetDerived, BudgetInputs, PlannerField};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A snapshot of one planner session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Shareable link reproducing the inputs
    pub share_link: String,

    /// The inputs, in stored-blob field names
    pub inputs: BudgetInputs,

    /// Totals computed from the inputs
    pub derived: BudgetDerived,
}

impl BudgetExport {
    /// Snapshot the given inputs
    pub fn new(inputs: &BudgetInputs, derived: &BudgetDerived, share_link: String) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            share_link,
            inputs: inputs.clone(),
            derived: *derived,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for field in PlannerField::NUMERIC {
            if let Some(value) = self.inputs.number(field) {
                if !value.is_finite() {
                    return Err(format!("Field '{}' is not a finite number", field));
                }
            }
        }

        Ok(())
    }
}

/// Export to JSON
pub fn export_json<W: Write>(export: &BudgetExport, writer: &mut W, pretty: bool) -> PlannerResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    written.map_err(|e| PlannerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}

/// Import from a JSON export
pub fn import_from_json(json_str: &str) -> PlannerResult<BudgetExport> {
    let export: BudgetExport =
        serde_json::from_str(json_str).map_err(|e| PlannerError::Validation(e.to_string()))?;

    export.validate().map_err(PlannerError::Validation)?;

    Ok(export)
}
