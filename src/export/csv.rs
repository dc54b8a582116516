//! CSV Export functionality
//!
//! Writes the planner snapshot as `section,field,value` rows for
//! spreadsheets.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::export::json::BudgetExport;
use crate::models::{format_number, PlannerField};

/// Export to CSV
pub fn export_csv<W: Write>(export: &BudgetExport, writer: W) -> PlannerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let to_export_err = |e: csv::Error| PlannerError::Export(e.to_string());

    csv.write_record(["section", "field", "value"])
        .map_err(to_export_err)?;

    for field in PlannerField::ALL {
        let value = match export.inputs.text(field) {
            Some(text) => text.to_string(),
            None => format_number(export.inputs.number(field).unwrap_or_default()),
        };
        csv.write_record(["input", field.storage_key(), value.as_str()])
            .map_err(to_export_err)?;
    }

    let d = &export.derived;
    for (name, value) in [
        ("iceTotal", d.ice_total),
        ("jerseyTotal", d.jersey_total),
        ("baseCost", d.base_cost),
        ("feeAmount", d.fee_amount),
        ("total", d.total),
        ("perPlayer", d.per_player),
    ] {
        csv.write_record(["derived", name, format_number(value).as_str()])
            .map_err(to_export_err)?;
    }

    csv.write_record(["link", "url", export.share_link.as_str()])
        .map_err(to_export_err)?;

    csv.flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}
