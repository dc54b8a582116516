//! CLI commands for export and import
//!
//! Writes the planner snapshot in various formats, and loads the inputs
//! back from a JSON or YAML snapshot.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use super::FilePlanner;
use crate::error::{PlannerError, PlannerResult};
use crate::export::{export_csv, export_json, export_yaml, import_from_json, import_from_yaml, BudgetExport};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows (section, field, value)
    Csv,
    /// JSON snapshot
    Json,
    /// YAML snapshot (human-readable)
    Yaml,
}

/// Export the current planner to a file or stdout
pub fn handle_export_command(
    planner: &FilePlanner,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> PlannerResult<()> {
    let export = BudgetExport::new(
        planner.inputs(),
        planner.derived(),
        planner.share_link()?.to_string(),
    );

    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                PlannerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&export, format, &mut writer, pretty)?;
            writer
                .flush()
                .map_err(|e| PlannerError::Export(e.to_string()))?;
            println!("Exported budget to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&export, format, &mut writer, pretty)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    export: &BudgetExport,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> PlannerResult<()> {
    match format {
        ExportFormat::Csv => export_csv(export, writer),
        ExportFormat::Json => export_json(export, writer, pretty),
        ExportFormat::Yaml => export_yaml(export, writer),
    }
}

/// Load inputs from a JSON or YAML snapshot
///
/// The format is picked from the file extension; anything other than
/// `.yaml`/`.yml` is read as JSON.
pub fn handle_import_command(planner: &mut FilePlanner, input: &Path) -> PlannerResult<()> {
    let contents = std::fs::read_to_string(input)
        .map_err(|e| PlannerError::Io(format!("Failed to read {}: {}", input.display(), e)))?;

    let is_yaml = matches!(
        input.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let export = if is_yaml {
        import_from_yaml(&contents)?
    } else {
        import_from_json(&contents)?
    };

    planner.load_inputs(export.inputs);
    println!("Imported budget for {}", planner.inputs().team);
    Ok(())
}
