//! Budget inputs: the user-entered half of the planner state
//!
//! `BudgetInputs` is the single mutable record a planner session owns. It
//! serializes to the stored blob under the field names the stored format
//! uses (`iceRate`, `feePct`, ...) and maps to and from the shareable link's
//! query parameters (`ice`, `fee`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::number::{format_number, parse_finite};
use crate::error::PlannerError;
use crate::link::ShareLink;

/// Team name used until the user picks one
pub const DEFAULT_TEAM: &str = "Bandits";

/// Logo used by a freshly constructed planner
pub const DEFAULT_LOGO: &str = "./hockey-logo.jpg";

/// Logo restored by the reset action
pub const RESET_LOGO: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/7/79/Ice_hockey_pictogram.svg/640px-Ice_hockey_pictogram.svg.png";

/// One editable planner field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlannerField {
    Team,
    LogoUrl,
    IceRate,
    IceHours,
    CoachCost,
    JerseyCost,
    PlayerCount,
    FeePercent,
    FeeFixed,
}

impl PlannerField {
    /// All fields, in link parameter order
    pub const ALL: [PlannerField; 9] = [
        PlannerField::Team,
        PlannerField::LogoUrl,
        PlannerField::IceRate,
        PlannerField::IceHours,
        PlannerField::CoachCost,
        PlannerField::JerseyCost,
        PlannerField::PlayerCount,
        PlannerField::FeePercent,
        PlannerField::FeeFixed,
    ];

    /// The numeric fields, in form order
    pub const NUMERIC: [PlannerField; 7] = [
        PlannerField::IceRate,
        PlannerField::IceHours,
        PlannerField::CoachCost,
        PlannerField::JerseyCost,
        PlannerField::PlayerCount,
        PlannerField::FeePercent,
        PlannerField::FeeFixed,
    ];

    /// Name of the query parameter carrying this field
    pub fn query_key(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::LogoUrl => "logo",
            Self::IceRate => "ice",
            Self::IceHours => "hours",
            Self::CoachCost => "coach",
            Self::JerseyCost => "jersey",
            Self::PlayerCount => "players",
            Self::FeePercent => "fee",
            Self::FeeFixed => "fixed",
        }
    }

    /// Name of the key carrying this field in the stored blob
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::LogoUrl => "logo",
            Self::IceRate => "iceRate",
            Self::IceHours => "hours",
            Self::CoachCost => "coach",
            Self::JerseyCost => "jersey",
            Self::PlayerCount => "players",
            Self::FeePercent => "feePct",
            Self::FeeFixed => "feeFixed",
        }
    }

    /// Whether the field holds a number (as opposed to text)
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Team | Self::LogoUrl)
    }
}

impl fmt::Display for PlannerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_key())
    }
}

impl FromStr for PlannerField {
    type Err = PlannerError;

    /// Accepts either the query parameter name or the stored field name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.query_key() == s || f.storage_key().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlannerError::unknown_field(s))
    }
}

/// User-entered budget inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInputs {
    pub team: String,
    #[serde(rename = "logo")]
    pub logo_url: String,
    #[serde(rename = "iceRate")]
    pub ice_rate_per_hour: f64,
    #[serde(rename = "hours")]
    pub ice_hours: f64,
    #[serde(rename = "coach")]
    pub coach_flat_cost: f64,
    #[serde(rename = "jersey")]
    pub jersey_cost_per_player: f64,
    #[serde(rename = "players")]
    pub player_count: f64,
    #[serde(rename = "feePct")]
    pub fee_percent: f64,
    #[serde(rename = "feeFixed")]
    pub fee_fixed: f64,
}

impl Default for BudgetInputs {
    fn default() -> Self {
        Self {
            team: DEFAULT_TEAM.to_string(),
            logo_url: DEFAULT_LOGO.to_string(),
            ice_rate_per_hour: 0.0,
            ice_hours: 0.0,
            coach_flat_cost: 0.0,
            jersey_cost_per_player: 0.0,
            player_count: 0.0,
            fee_percent: 0.0,
            fee_fixed: 0.0,
        }
    }
}

impl BudgetInputs {
    /// The values the reset action restores
    ///
    /// Differs from [`BudgetInputs::default`] in the logo and in carrying a
    /// typical payment processor fee (2% + 0.99).
    pub fn reset_defaults() -> Self {
        Self {
            logo_url: RESET_LOGO.to_string(),
            fee_percent: 2.0,
            fee_fixed: 0.99,
            ..Self::default()
        }
    }

    /// Read a numeric field
    ///
    /// Text fields read as `None`.
    pub fn number(&self, field: PlannerField) -> Option<f64> {
        match field {
            PlannerField::Team | PlannerField::LogoUrl => None,
            PlannerField::IceRate => Some(self.ice_rate_per_hour),
            PlannerField::IceHours => Some(self.ice_hours),
            PlannerField::CoachCost => Some(self.coach_flat_cost),
            PlannerField::JerseyCost => Some(self.jersey_cost_per_player),
            PlannerField::PlayerCount => Some(self.player_count),
            PlannerField::FeePercent => Some(self.fee_percent),
            PlannerField::FeeFixed => Some(self.fee_fixed),
        }
    }

    /// Read a text field
    ///
    /// Numeric fields read as `None`.
    pub fn text(&self, field: PlannerField) -> Option<&str> {
        match field {
            PlannerField::Team => Some(&self.team),
            PlannerField::LogoUrl => Some(&self.logo_url),
            _ => None,
        }
    }

    /// Mutable access to the slot backing a numeric field
    fn number_mut(&mut self, field: PlannerField) -> Option<&mut f64> {
        match field {
            PlannerField::Team | PlannerField::LogoUrl => None,
            PlannerField::IceRate => Some(&mut self.ice_rate_per_hour),
            PlannerField::IceHours => Some(&mut self.ice_hours),
            PlannerField::CoachCost => Some(&mut self.coach_flat_cost),
            PlannerField::JerseyCost => Some(&mut self.jersey_cost_per_player),
            PlannerField::PlayerCount => Some(&mut self.player_count),
            PlannerField::FeePercent => Some(&mut self.fee_percent),
            PlannerField::FeeFixed => Some(&mut self.fee_fixed),
        }
    }

    /// Mutable access to the slot backing a text field
    fn text_mut(&mut self, field: PlannerField) -> Option<&mut String> {
        match field {
            PlannerField::Team => Some(&mut self.team),
            PlannerField::LogoUrl => Some(&mut self.logo_url),
            _ => None,
        }
    }

    /// Store a numeric field
    ///
    /// Fails for text fields. The value is stored as given; range guards
    /// belong to the recompute pass.
    pub fn set_number(&mut self, field: PlannerField, value: f64) -> Result<(), PlannerError> {
        let slot = self.number_mut(field).ok_or_else(|| {
            PlannerError::Validation(format!("'{}' is not a numeric field", field))
        })?;
        *slot = value;
        Ok(())
    }

    /// Store a text field
    pub fn set_text(
        &mut self,
        field: PlannerField,
        value: impl Into<String>,
    ) -> Result<(), PlannerError> {
        let slot = self.text_mut(field).ok_or_else(|| {
            PlannerError::Validation(format!("'{}' is not a text field", field))
        })?;
        *slot = value.into();
        Ok(())
    }

    /// Floor the two counts the formula divides and multiplies by
    ///
    /// A player count below one becomes 0, negative ice hours become 0.
    pub fn clamp_minimums(&mut self) {
        if self.player_count < 1.0 {
            self.player_count = 0.0;
        }
        if self.ice_hours < 0.0 {
            self.ice_hours = 0.0;
        }
    }

    /// Build inputs from link query parameters
    ///
    /// Each parameter that is absent, or numeric and unparseable, keeps the
    /// value from `fallback`.
    pub fn from_link(link: &ShareLink, fallback: &BudgetInputs) -> Self {
        let mut inputs = fallback.clone();

        for field in PlannerField::ALL {
            let Some(raw) = link.get(field.query_key()) else {
                continue;
            };
            if let Some(slot) = inputs.text_mut(field) {
                *slot = raw.to_string();
            } else if let (Some(slot), Some(n)) = (inputs.number_mut(field), parse_finite(raw)) {
                *slot = n;
            }
        }

        inputs
    }

    /// Encode the inputs as link query parameters
    ///
    /// The logo is only written when non-empty.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(PlannerField::ALL.len());

        for field in PlannerField::ALL {
            let value = match field {
                PlannerField::Team => self.team.clone(),
                PlannerField::LogoUrl if self.logo_url.is_empty() => continue,
                PlannerField::LogoUrl => self.logo_url.clone(),
                numeric => format_number(self.number(numeric).unwrap_or_default()),
            };
            pairs.push((field.query_key().to_string(), value));
        }

        pairs
    }

    /// Overwrite fields from a stored blob
    ///
    /// The blob must be JSON. Only known keys whose JSON type matches the
    /// field (string for text, finite number for numbers) are taken; every
    /// other key is ignored, including numbers too large for `f64`. A blob
    /// that is valid JSON but not an object changes nothing.
    pub fn apply_saved(&mut self, raw: &str) -> Result<(), PlannerError> {
        let value: Value = serde_json::from_str(raw)?;
        if let Value::Object(map) = value {
            self.apply_saved_map(&map);
        }
        Ok(())
    }

    fn apply_saved_map(&mut self, map: &Map<String, Value>) {
        for field in PlannerField::ALL {
            let Some(value) = map.get(field.storage_key()) else {
                continue;
            };
            match value {
                Value::String(s) => {
                    if let Some(slot) = self.text_mut(field) {
                        *slot = s.clone();
                    }
                }
                Value::Number(n) => {
                    if let (Some(slot), Some(n)) = (self.number_mut(field), n.as_f64()) {
                        if n.is_finite() {
                            *slot = n;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Serialize to the stored blob format
    pub fn to_saved_blob(&self) -> Result<String, PlannerError> {
        Ok(serde_json::to_string(self)?)
    }
}
