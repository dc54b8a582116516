//! Derived budget totals
//!
//! Everything here is a pure function of [`BudgetInputs`]; nothing is ever
//! stored on its own.

use serde::{Deserialize, Serialize};

use super::inputs::BudgetInputs;

/// Totals computed from the inputs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDerived {
    /// Ice rate times hours
    pub ice_total: f64,
    /// Jersey cost times player count
    pub jersey_total: f64,
    /// Ice, coaches and jerseys before fees
    pub base_cost: f64,
    /// Percentage fee on the base cost plus the fixed fee
    pub fee_amount: f64,
    /// Base cost plus fees
    pub total: f64,
    /// Total split across players, 0 without players
    pub per_player: f64,
}

impl BudgetDerived {
    /// Compute the totals for a set of inputs
    pub fn compute(inputs: &BudgetInputs) -> Self {
        let ice_total = inputs.ice_rate_per_hour * inputs.ice_hours;
        let jersey_total = inputs.jersey_cost_per_player * inputs.player_count;
        let base_cost = ice_total + inputs.coach_flat_cost + jersey_total;
        let fee_amount = base_cost * (inputs.fee_percent / 100.0) + inputs.fee_fixed;
        let total = base_cost + fee_amount;
        let per_player = if inputs.player_count > 0.0 {
            total / inputs.player_count
        } else {
            0.0
        };

        Self {
            ice_total,
            jersey_total,
            base_cost,
            fee_amount,
            total,
            per_player,
        }
    }

    /// Per-player cost rounded to whole currency units for display
    pub fn per_player_rounded(&self) -> f64 {
        // Halves round up, so -2.5 becomes -2
        (self.per_player + 0.5).floor()
    }
}
