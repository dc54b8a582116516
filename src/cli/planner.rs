//! Planner CLI commands
//!
//! Each command acts on a planner that has already been opened (restored
//! and recomputed) and prints the result.

use crate::config::settings::Settings;
use crate::display::format_breakdown;
use crate::error::{PlannerError, PlannerResult};
use crate::models::PlannerField;
use crate::services::ShareCascade;
use crate::widgets::{planner_field_control, ActionButton, ButtonTone};

use super::FilePlanner;

/// Print the breakdown and the link
pub fn handle_show_command(planner: &FilePlanner, settings: &Settings) -> PlannerResult<()> {
    print!(
        "{}",
        format_breakdown(planner.inputs(), planner.derived(), &settings.currency_symbol)
    );
    println!();
    println!("Link: {}", planner.share_link()?);
    Ok(())
}

/// Edit one field and print the new breakdown
///
/// Numeric fields go through the same control as the interactive form, so
/// unparseable text counts as 0 and negative values are floored at 0.
pub fn handle_set_command(
    planner: &mut FilePlanner,
    settings: &Settings,
    field: &str,
    value: &str,
) -> PlannerResult<()> {
    let field: PlannerField = field.parse()?;

    if field.is_numeric() {
        let current = planner.inputs().number(field).unwrap_or_default();
        let mut control = planner_field_control(field, current)
            .ok_or_else(|| PlannerError::Validation(format!("'{}' has no numeric control", field)))?;
        if let Some(changed) = control.input(value) {
            planner.set_number(field, changed.value)?;
        }
    } else {
        planner.set_text(field, value)?;
    }

    handle_show_command(planner, settings)
}

/// Press the reset button
pub fn handle_reset_command(planner: &mut FilePlanner, settings: &Settings) -> PlannerResult<()> {
    let button = ActionButton::new("Reset");
    if button.press("cli").is_some() {
        planner.reset();
        println!("Planner reset to defaults.");
        println!();
    }
    handle_show_command(planner, settings)
}

/// Print the shareable link
pub fn handle_link_command(planner: &FilePlanner) -> PlannerResult<()> {
    println!("{}", planner.share_link()?);
    Ok(())
}

/// Press the share button
///
/// A terminal has neither a share sheet nor a clipboard we can rely on, so
/// this ends in the manual-copy prompt.
pub fn handle_share_command(planner: &FilePlanner) -> PlannerResult<()> {
    let button = ActionButton::new("Share Budget").tone(ButtonTone::Secondary);
    if button.press("cli").is_some() {
        let mut cascade = ShareCascade::new();
        let outcome = planner.share(&mut cascade)?;
        println!("{}", outcome.message());
    }
    Ok(())
}
