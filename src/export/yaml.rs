//! YAML Export functionality
//!
//! Exports the planner snapshot to YAML for a human-readable copy.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::export::json::BudgetExport;

/// Export to YAML
pub fn export_yaml<W: Write>(export: &BudgetExport, writer: &mut W) -> PlannerResult<()> {
    let header = |w: &mut W, line: &str| -> PlannerResult<()> {
        writeln!(w, "{}", line).map_err(|e| PlannerError::Export(e.to_string()))
    };

    header(writer, &format!("# {} Ice Program Budget", export.inputs.team))?;
    header(writer, &format!("# Generated: {}", export.exported_at))?;
    header(writer, &format!("# App Version: {}", export.app_version))?;
    header(writer, "")?;

    serde_yaml::to_writer(writer, export).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> PlannerResult<BudgetExport> {
    let export: BudgetExport =
        serde_yaml::from_str(yaml_str).map_err(|e| PlannerError::Validation(e.to_string()))?;

    export.validate().map_err(PlannerError::Validation)?;

    Ok(export)
}
