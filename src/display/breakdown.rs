//! Cost breakdown formatting
//!
//! Turns inputs and totals into the labelled rows of the breakdown panel
//! and a plain-text rendering of them for the command line.

use super::money::format_amount;
use crate::models::{format_number, BudgetDerived, BudgetInputs};

/// One labelled line of the breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub label: String,
    pub amount: String,
    /// Whether the row is one of the totals at the bottom
    pub is_total: bool,
}

impl BreakdownRow {
    fn item(label: String, amount: String) -> Self {
        Self {
            label,
            amount,
            is_total: false,
        }
    }

    fn total(label: &str, amount: String) -> Self {
        Self {
            label: label.to_string(),
            amount,
            is_total: true,
        }
    }
}

/// Build the breakdown rows
///
/// The per-player cost is rounded to whole units; every other amount is
/// shown as computed.
pub fn breakdown_rows(
    inputs: &BudgetInputs,
    derived: &BudgetDerived,
    symbol: &str,
) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow::item(
            format!(
                "Ice Time ({} × {}{})",
                format_number(inputs.ice_hours),
                symbol,
                format_number(inputs.ice_rate_per_hour)
            ),
            format_amount(derived.ice_total, symbol),
        ),
        BreakdownRow::item(
            "Coaches".to_string(),
            format_amount(inputs.coach_flat_cost, symbol),
        ),
        BreakdownRow::item(
            format!(
                "Jerseys ({} × {}{})",
                format_number(inputs.player_count),
                symbol,
                format_number(inputs.jersey_cost_per_player)
            ),
            format_amount(derived.jersey_total, symbol),
        ),
        BreakdownRow::item(
            format!(
                "Transaction Fee ({}% + {}{})",
                format_number(inputs.fee_percent),
                symbol,
                format_number(inputs.fee_fixed)
            ),
            format_amount(derived.fee_amount, symbol),
        ),
        BreakdownRow::total("Total Season Cost", format_amount(derived.total, symbol)),
        BreakdownRow::total(
            "Cost per Player",
            format_amount(derived.per_player_rounded(), symbol),
        ),
    ]
}

/// Render the full breakdown as text
pub fn format_breakdown(inputs: &BudgetInputs, derived: &BudgetDerived, symbol: &str) -> String {
    let rows = breakdown_rows(inputs, derived, symbol);

    let label_width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);
    let amount_width = rows
        .iter()
        .map(|r| r.amount.chars().count())
        .max()
        .unwrap_or(0);
    let width = label_width + amount_width + 2;

    let mut output = String::new();
    output.push_str(&format!("{} - Ice Program Planner\n", inputs.team));
    output.push_str(&format!("{}\n", "═".repeat(width)));

    for row in &rows {
        if row.is_total && row.label == "Total Season Cost" {
            output.push_str(&format!("{}\n", "─".repeat(width)));
        }
        // Pad by char count so `×` doesn't throw off alignment
        let pad = label_width - row.label.chars().count();
        output.push_str(&format!(
            "{}{}  {:>amount_width$}\n",
            row.label,
            " ".repeat(pad),
            row.amount,
            amount_width = amount_width,
        ));
    }

    output
}
