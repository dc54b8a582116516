//! Planner state service
//!
//! Owns the session's [`BudgetInputs`], keeps [`BudgetDerived`] in step with
//! them, and mirrors every change to the state store and the shareable link.
//! Both back-ends are best-effort: a failed write is logged and forgotten.

use tracing::{debug, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::link::{LinkLocation, ShareLink};
use crate::models::{BudgetDerived, BudgetInputs, PlannerField};
use crate::services::share::{ShareCascade, ShareOutcome, ShareRequest};
use crate::storage::{StateStore, STATE_KEY};

/// Lifecycle of a planner session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlannerPhase {
    /// Constructed, nothing restored yet
    #[default]
    Uninitialized,
    /// Restored and recomputed at least once
    Ready,
}

/// Where the inputs of a session came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreSource {
    /// The link carried query parameters
    Link,
    /// A saved blob was found and parsed
    Storage,
    /// Neither; the constructor defaults stand
    Defaults,
}

/// The planner's state engine
pub struct PlannerState<S: StateStore, L: LinkLocation> {
    inputs: BudgetInputs,
    derived: BudgetDerived,
    phase: PlannerPhase,
    restored_from: Option<RestoreSource>,
    store: S,
    location: L,
    storage_key: String,
}

impl<S: StateStore, L: LinkLocation> PlannerState<S, L> {
    /// Create an uninitialized planner over the given back-ends
    pub fn new(store: S, location: L) -> Self {
        Self {
            inputs: BudgetInputs::default(),
            derived: BudgetDerived::default(),
            phase: PlannerPhase::Uninitialized,
            restored_from: None,
            store,
            location,
            storage_key: STATE_KEY.to_string(),
        }
    }

    /// Store the state under a different key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Create a planner, restore its inputs and run the first recompute
    pub fn open(store: S, location: L) -> Self {
        let mut planner = Self::new(store, location);
        planner.start();
        planner
    }

    /// Restore, then recompute; the session is ready afterwards
    pub fn start(&mut self) -> RestoreSource {
        let source = self.restore();
        self.recompute();
        source
    }

    /// Replace the inputs from the link or the state store
    ///
    /// Any query parameter makes the link authoritative for every field:
    /// fields it lacks keep their defaults and the store is not consulted.
    /// Without parameters, a non-empty stored blob is laid over the
    /// defaults; an unreadable store or unparseable blob leaves the
    /// defaults in place.
    pub fn restore(&mut self) -> RestoreSource {
        let link = self.location.current().unwrap_or_else(|e| {
            warn!(error = %e, "Could not read current link, treating it as empty");
            ShareLink::default()
        });
        let candidate = BudgetInputs::from_link(&link, &self.inputs);

        let source = if link.has_params() {
            self.inputs = candidate;
            RestoreSource::Link
        } else {
            match self.store.load(&self.storage_key) {
                Ok(Some(raw)) if !raw.is_empty() => {
                    let mut saved = self.inputs.clone();
                    match saved.apply_saved(&raw) {
                        Ok(()) => {
                            self.inputs = saved;
                            RestoreSource::Storage
                        }
                        Err(e) => {
                            warn!(error = %e, "Saved planner state is corrupt, using defaults");
                            self.inputs = candidate;
                            RestoreSource::Defaults
                        }
                    }
                }
                Ok(_) => {
                    self.inputs = candidate;
                    RestoreSource::Defaults
                }
                Err(e) => {
                    warn!(error = %e, "Could not read saved planner state, using defaults");
                    self.inputs = candidate;
                    RestoreSource::Defaults
                }
            }
        };

        debug!(?source, team = %self.inputs.team, "Restored planner inputs");
        self.restored_from = Some(source);
        source
    }

    /// Floor the counts, derive the totals and persist
    pub fn recompute(&mut self) {
        self.inputs.clamp_minimums();
        self.derived = BudgetDerived::compute(&self.inputs);
        self.persist();
        self.phase = PlannerPhase::Ready;
        debug!(total = self.derived.total, "Recomputed planner totals");
    }

    /// Write the inputs to the store and the link, ignoring failures
    fn persist(&mut self) {
        if let Err(e) = self.save_blob() {
            warn!(error = %e, "Failed to save planner state");
        }
        if let Err(e) = self.write_link() {
            warn!(error = %e, "Failed to update shareable link");
        }
    }

    fn save_blob(&mut self) -> PlannerResult<()> {
        let blob = self.inputs.to_saved_blob()?;
        self.store.save(&self.storage_key, &blob)
    }

    fn write_link(&mut self) -> PlannerResult<()> {
        let current = self.location.current()?;
        let next = current.with_query(self.inputs.to_query_pairs());
        self.location.replace(next)
    }

    /// Set a numeric field and recompute
    ///
    /// Non-finite values are rejected without touching the state.
    pub fn set_number(&mut self, field: PlannerField, value: f64) -> PlannerResult<()> {
        if !value.is_finite() {
            return Err(PlannerError::Validation(format!(
                "'{}' must be a finite number",
                field
            )));
        }
        self.inputs.set_number(field, value)?;
        self.recompute();
        Ok(())
    }

    /// Set a text field and recompute
    pub fn set_text(&mut self, field: PlannerField, value: impl Into<String>) -> PlannerResult<()> {
        self.inputs.set_text(field, value)?;
        self.recompute();
        Ok(())
    }

    /// Set the team name
    pub fn set_team(&mut self, team: impl Into<String>) {
        self.inputs.team = team.into();
        self.recompute();
    }

    /// Set the logo address
    pub fn set_logo_url(&mut self, logo_url: impl Into<String>) {
        self.inputs.logo_url = logo_url.into();
        self.recompute();
    }

    /// Set the ice rate per hour
    pub fn set_ice_rate(&mut self, value: f64) -> PlannerResult<()> {
        self.set_number(PlannerField::IceRate, value)
    }

    /// Set the number of ice hours
    pub fn set_ice_hours(&mut self, value: f64) -> PlannerResult<()> {
        self.set_number(PlannerField::IceHours, value)
    }

    /// Set the flat coaching cost
    pub fn set_coach_cost(&mut self, value: f64) -> PlannerResult<()> {
        self.set_number(PlannerField::CoachCost, value)
    }

    /// Set the jersey cost per player
    pub fn set_jersey_cost(&mut self, value: f64) -> PlannerResult<()> {
        self.set_number(PlannerField::JerseyCost, value)
    }

    /// Set the number of players
    pub fn set_player_count(&mut self, value: f64) -> PlannerResult<()> {
        self.set_number(PlannerField::PlayerCount, value)
    }

    /// Set the fee percentage (2 means 2%)
    pub fn set_fee_percent(&mut self, value: f64) -> PlannerResult<()> {
        self.set_number(PlannerField::FeePercent, value)
    }

    /// Set the fixed fee
    pub fn set_fee_fixed(&mut self, value: f64) -> PlannerResult<()> {
        self.set_number(PlannerField::FeeFixed, value)
    }

    /// Go back to the reset defaults and recompute
    pub fn reset(&mut self) {
        self.inputs = BudgetInputs::reset_defaults();
        self.recompute();
    }

    /// Replace every input at once (e.g. from an import) and recompute
    pub fn load_inputs(&mut self, inputs: BudgetInputs) {
        self.inputs = inputs;
        self.recompute();
    }

    /// The link as it stands after the last recompute
    pub fn share_link(&self) -> PlannerResult<ShareLink> {
        self.location.current()
    }

    /// What a share action hands to the share collaborators
    pub fn share_request(&self) -> PlannerResult<ShareRequest> {
        Ok(ShareRequest {
            title: format!("{} Budget", self.inputs.team),
            url: self.share_link()?.to_string(),
        })
    }

    /// Share the current link through the cascade
    pub fn share(&self, cascade: &mut ShareCascade) -> PlannerResult<ShareOutcome> {
        let request = self.share_request()?;
        Ok(cascade.share(&request))
    }

    /// Current inputs
    pub fn inputs(&self) -> &BudgetInputs {
        &self.inputs
    }

    /// Totals as of the last recompute
    pub fn derived(&self) -> &BudgetDerived {
        &self.derived
    }

    /// Lifecycle phase
    pub fn phase(&self) -> PlannerPhase {
        self.phase
    }

    /// Where the last restore took the inputs from
    pub fn restored_from(&self) -> Option<RestoreSource> {
        self.restored_from
    }

    /// Key the state is stored under
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The state store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The link location
    pub fn location(&self) -> &L {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::MemoryLocation;
    use crate::storage::MemoryStateStore;

    type TestPlanner = PlannerState<MemoryStateStore, MemoryLocation>;

    const EPS: f64 = 1e-9;

    fn open(store: MemoryStateStore, link: &str) -> TestPlanner {
        PlannerState::open(store, MemoryLocation::parse(link))
    }

    fn fill_season(planner: &mut TestPlanner) {
        planner.set_ice_rate(150.0).unwrap();
        planner.set_ice_hours(10.0).unwrap();
        planner.set_coach_cost(500.0).unwrap();
        planner.set_jersey_cost(40.0).unwrap();
        planner.set_player_count(15.0).unwrap();
        planner.set_fee_percent(2.0).unwrap();
        planner.set_fee_fixed(0.99).unwrap();
    }

    #[test]
    fn test_new_is_uninitialized() {
        let planner = PlannerState::new(MemoryStateStore::new(), MemoryLocation::parse("/p"));
        assert_eq!(planner.phase(), PlannerPhase::Uninitialized);
        assert_eq!(planner.restored_from(), None);
    }

    #[test]
    fn test_open_with_nothing_keeps_defaults() {
        let planner = open(MemoryStateStore::new(), "/plan");
        assert_eq!(planner.phase(), PlannerPhase::Ready);
        assert_eq!(planner.restored_from(), Some(RestoreSource::Defaults));
        assert_eq!(planner.inputs(), &BudgetInputs::default());
        assert_eq!(planner.derived().total, 0.0);
        assert_eq!(planner.derived().per_player, 0.0);
    }

    #[test]
    fn test_first_recompute_writes_store_and_link() {
        let planner = open(MemoryStateStore::new(), "/plan#top");

        assert!(planner.store().get(STATE_KEY).is_some());
        let link = planner.location().link();
        assert_eq!(link.path(), "/plan");
        assert_eq!(link.fragment(), Some("top"));
        assert_eq!(link.get("team"), Some("Bandits"));
        assert_eq!(link.get("logo"), Some("./hockey-logo.jpg"));
        assert_eq!(link.get("ice"), Some("0"));
        assert_eq!(planner.location().history_len(), 1);
    }

    #[test]
    fn test_season_scenario() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        fill_season(&mut planner);

        let d = planner.derived();
        assert_eq!(d.ice_total, 1500.0);
        assert_eq!(d.jersey_total, 600.0);
        assert_eq!(d.base_cost, 2600.0);
        assert!((d.fee_amount - 52.99).abs() < EPS);
        assert!((d.total - 2652.99).abs() < EPS);
        assert_eq!(d.per_player_rounded(), 177.0);
    }

    #[test]
    fn test_link_wins_over_storage() {
        let store = MemoryStateStore::with_entry(STATE_KEY, r#"{"team":"Stored","coach":900}"#);
        let planner = open(store, "/plan?ice=120");

        assert_eq!(planner.restored_from(), Some(RestoreSource::Link));
        assert_eq!(planner.inputs().ice_rate_per_hour, 120.0);
        // Unset fields come from defaults, never from the store
        assert_eq!(planner.inputs().team, "Bandits");
        assert_eq!(planner.inputs().coach_flat_cost, 0.0);
    }

    #[test]
    fn test_unrelated_param_still_makes_link_authoritative() {
        let store = MemoryStateStore::with_entry(STATE_KEY, r#"{"team":"Stored"}"#);
        let planner = open(store, "/plan?utm_source=mail");

        assert_eq!(planner.restored_from(), Some(RestoreSource::Link));
        assert_eq!(planner.inputs().team, "Bandits");
    }

    #[test]
    fn test_restore_from_storage() {
        let store = MemoryStateStore::with_entry(
            STATE_KEY,
            r#"{"team":"Stored","iceRate":180,"hours":20,"players":12}"#,
        );
        let planner = open(store, "/plan");

        assert_eq!(planner.restored_from(), Some(RestoreSource::Storage));
        assert_eq!(planner.inputs().team, "Stored");
        assert_eq!(planner.derived().ice_total, 3600.0);
        assert_eq!(planner.derived().per_player, 300.0);
        assert_eq!(planner.location().link().get("team"), Some("Stored"));
    }

    #[test]
    fn test_out_of_range_stored_number_loses_only_that_field() {
        let store =
            MemoryStateStore::with_entry(STATE_KEY, r#"{"team":"Stored","coach":1e999}"#);
        let planner = open(store, "/plan");

        assert_eq!(planner.restored_from(), Some(RestoreSource::Storage));
        assert_eq!(planner.inputs().team, "Stored");
        assert_eq!(planner.inputs().coach_flat_cost, 0.0);
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_defaults() {
        let store = MemoryStateStore::with_entry(STATE_KEY, "{{ definitely not json");
        let planner = open(store, "/plan");

        assert_eq!(planner.restored_from(), Some(RestoreSource::Defaults));
        assert_eq!(planner.inputs(), &BudgetInputs::default());
    }

    #[test]
    fn test_empty_blob_is_ignored() {
        let store = MemoryStateStore::with_entry(STATE_KEY, "");
        let planner = open(store, "/plan");
        assert_eq!(planner.restored_from(), Some(RestoreSource::Defaults));
    }

    #[test]
    fn test_unavailable_storage_is_silent() {
        let mut planner = open(MemoryStateStore::new().unavailable(), "/plan");
        assert_eq!(planner.restored_from(), Some(RestoreSource::Defaults));

        planner.set_coach_cost(300.0).unwrap();
        assert_eq!(planner.derived().total, 300.0);
        assert_eq!(planner.location().link().get("coach"), Some("300"));
    }

    #[test]
    fn test_read_only_link_is_silent() {
        let location = MemoryLocation::parse("/plan").read_only();
        let mut planner = PlannerState::open(MemoryStateStore::new(), location);

        planner.set_coach_cost(300.0).unwrap();
        assert_eq!(planner.derived().total, 300.0);
        assert!(planner.store().get(STATE_KEY).unwrap().contains("300"));
    }

    #[test]
    fn test_negative_players_coerced_during_recompute() {
        let mut planner = PlannerState::new(
            MemoryStateStore::new(),
            MemoryLocation::parse("/plan?players=-3&jersey=40"),
        );

        planner.restore();
        assert_eq!(planner.inputs().player_count, -3.0);

        planner.recompute();
        assert_eq!(planner.inputs().player_count, 0.0);
        assert_eq!(planner.derived().jersey_total, 0.0);
        assert_eq!(planner.location().link().get("players"), Some("0"));
    }

    #[test]
    fn test_negative_hours_coerced() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.set_ice_rate(100.0).unwrap();
        planner.set_ice_hours(-5.0).unwrap();

        assert_eq!(planner.inputs().ice_hours, 0.0);
        assert_eq!(planner.derived().ice_total, 0.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.set_coach_cost(100.0).unwrap();

        assert!(planner.set_coach_cost(f64::NAN).is_err());
        assert!(planner.set_fee_fixed(f64::INFINITY).is_err());
        assert_eq!(planner.inputs().coach_flat_cost, 100.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut planner = open(MemoryStateStore::new(), "/plan#frag");
        fill_season(&mut planner);

        let derived = *planner.derived();
        let blob = planner.store().get(STATE_KEY).map(str::to_owned);
        let link = planner.location().link().clone();

        planner.recompute();

        assert_eq!(planner.derived(), &derived);
        assert_eq!(planner.store().get(STATE_KEY).map(str::to_owned), blob);
        assert_eq!(planner.location().link(), &link);
    }

    #[test]
    fn test_link_round_trip() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.set_team("Ice Cats & Co");
        planner.set_logo_url("https://example.com/logo.png?size=2");
        fill_season(&mut planner);
        planner.set_fee_percent(0.1 + 0.2).unwrap();

        let link = planner.share_link().unwrap().to_string();
        let reopened = open(MemoryStateStore::new(), &link);

        assert_eq!(reopened.restored_from(), Some(RestoreSource::Link));
        assert_eq!(reopened.inputs(), planner.inputs());
        assert_eq!(reopened.derived(), planner.derived());
    }

    #[test]
    fn test_storage_round_trip() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.set_team("Wolves");
        fill_season(&mut planner);

        let store = planner.store().clone();
        let reopened = open(store, "/plan");

        assert_eq!(reopened.restored_from(), Some(RestoreSource::Storage));
        assert_eq!(reopened.inputs(), planner.inputs());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.set_team("Wolves");
        fill_season(&mut planner);

        planner.reset();

        assert_eq!(planner.inputs(), &BudgetInputs::reset_defaults());
        let d = planner.derived();
        assert_eq!(d.base_cost, 0.0);
        assert_eq!(d.fee_amount, 0.99);
        assert_eq!(d.total, 0.99);
        assert_eq!(d.per_player, 0.0);
        assert_eq!(planner.location().link().get("fixed"), Some("0.99"));
    }

    #[test]
    fn test_load_inputs_recomputes() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.load_inputs(BudgetInputs {
            coach_flat_cost: 400.0,
            player_count: -2.0,
            ..BudgetInputs::default()
        });

        assert_eq!(planner.inputs().player_count, 0.0);
        assert_eq!(planner.derived().total, 400.0);
        assert_eq!(planner.location().link().get("coach"), Some("400"));
    }

    #[test]
    fn test_empty_logo_dropped_from_link() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.set_logo_url("");

        assert_eq!(planner.location().link().get("logo"), None);
    }

    #[test]
    fn test_field_setters_by_name() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.set_number(PlannerField::JerseyCost, 30.0).unwrap();
        planner.set_text(PlannerField::Team, "Wolves").unwrap();

        assert_eq!(planner.inputs().jersey_cost_per_player, 30.0);
        assert_eq!(planner.inputs().team, "Wolves");
        assert!(planner.set_number(PlannerField::Team, 1.0).is_err());
    }

    #[test]
    fn test_custom_storage_key() {
        let planner = PlannerState::new(MemoryStateStore::new(), MemoryLocation::parse("/p"))
            .with_storage_key("other");
        let mut planner = planner;
        planner.start();

        assert_eq!(planner.storage_key(), "other");
        assert!(planner.store().get("other").is_some());
        assert!(planner.store().get(STATE_KEY).is_none());
    }

    #[test]
    fn test_share_request() {
        let mut planner = open(MemoryStateStore::new(), "/plan");
        planner.set_team("Wolves");

        let request = planner.share_request().unwrap();
        assert_eq!(request.title, "Wolves Budget");
        assert!(request.url.starts_with("/plan?team=Wolves"));
    }
}
