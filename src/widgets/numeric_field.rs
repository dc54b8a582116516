//! Bounded numeric input
//!
//! A `NumericField` turns raw typed text into a clamped number and reports
//! it to its owner as a [`ValueChanged`] notification. The displayed value
//! is only a mirror: the owner decides what to do with the notification and
//! writes the accepted value back with [`NumericField::set_value`].

use crate::models::parse_leading_float;

/// Notification emitted when the field commits a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChanged {
    /// The committed, clamped value
    pub value: f64,
}

/// A numeric input with bounds, step and adornments
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    pub label: String,
    pub name: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub prefix: String,
    pub suffix: String,
    pub required: bool,
    pub disabled: bool,
}

impl NumericField {
    /// An unbounded field starting at 0 with step 1
    pub fn new() -> Self {
        Self {
            label: String::new(),
            name: String::new(),
            value: 0.0,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: 1.0,
            prefix: String::new(),
            suffix: String::new(),
            required: false,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the form name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial value
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the lower bound
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the upper bound
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set the step used by [`NumericField::step_up`] and [`NumericField::step_down`]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the text shown before the value (e.g. `$`)
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the text shown after the value (e.g. `hours`)
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Mark the field as required
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Disable the field
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Element id: the name, else the lowercased label with each run of
    /// whitespace turned into `-`, else `num`
    pub fn id(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        if self.label.is_empty() {
            return "num".to_string();
        }

        let mut id = String::with_capacity(self.label.len());
        let mut in_space = false;
        for c in self.label.to_lowercase().chars() {
            if c.is_whitespace() {
                if !in_space {
                    id.push('-');
                }
                in_space = true;
            } else {
                id.push(c);
                in_space = false;
            }
        }
        id
    }

    /// Clamp a candidate value into the field's bounds
    ///
    /// NaN becomes 0 before the bounds apply.
    pub fn clamp(&self, n: f64) -> f64 {
        let mut n = if n.is_nan() { 0.0 } else { n };
        if n < self.min {
            n = self.min;
        }
        if n > self.max {
            n = self.max;
        }
        n
    }

    /// Take raw typed text
    ///
    /// Unparseable text counts as 0. Returns the notification for the
    /// owner, or `None` when the field is disabled.
    pub fn input(&mut self, raw: &str) -> Option<ValueChanged> {
        let parsed = parse_leading_float(raw).unwrap_or(f64::NAN);
        self.commit(parsed)
    }

    /// Increase by one step
    pub fn step_up(&mut self) -> Option<ValueChanged> {
        self.commit(self.value + self.step)
    }

    /// Decrease by one step
    pub fn step_down(&mut self) -> Option<ValueChanged> {
        self.commit(self.value - self.step)
    }

    fn commit(&mut self, candidate: f64) -> Option<ValueChanged> {
        if self.disabled {
            return None;
        }
        let value = self.clamp(candidate);
        self.value = value;
        Some(ValueChanged { value })
    }

    /// Overwrite the displayed value without notifying
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl Default for NumericField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_by_default() {
        let mut field = NumericField::new();
        assert_eq!(field.input("-1e6"), Some(ValueChanged { value: -1e6 }));
        assert_eq!(field.input("1e9").unwrap().value, 1e9);
    }

    #[test]
    fn test_invalid_input_becomes_zero_then_clamps() {
        let mut field = NumericField::new();
        assert_eq!(field.input("abc").unwrap().value, 0.0);

        let mut bounded = NumericField::new().min(5.0).max(10.0);
        assert_eq!(bounded.input("").unwrap().value, 5.0);
        assert_eq!(bounded.value, 5.0);
    }

    #[test]
    fn test_clamps_to_bounds() {
        let mut field = NumericField::new().min(0.0).max(100.0);
        assert_eq!(field.input("-3").unwrap().value, 0.0);
        assert_eq!(field.input("250").unwrap().value, 100.0);
        assert_eq!(field.input("42.5").unwrap().value, 42.5);
    }

    #[test]
    fn test_leading_number_prefix_is_used() {
        let mut field = NumericField::new();
        assert_eq!(field.input("12 hours").unwrap().value, 12.0);
    }

    #[test]
    fn test_disabled_field_is_silent() {
        let mut field = NumericField::new().value(3.0).disabled(true);
        assert_eq!(field.input("7"), None);
        assert_eq!(field.step_up(), None);
        assert_eq!(field.value, 3.0);
    }

    #[test]
    fn test_steps_respect_bounds() {
        let mut field = NumericField::new().min(0.0).step(50.0).value(25.0);
        assert_eq!(field.step_up().unwrap().value, 75.0);
        assert_eq!(field.step_down().unwrap().value, 25.0);
        assert_eq!(field.step_down().unwrap().value, 0.0);
    }

    #[test]
    fn test_set_value_does_not_clamp() {
        let mut field = NumericField::new().min(0.0);
        field.set_value(-2.0);
        assert_eq!(field.value, -2.0);
    }

    #[test]
    fn test_id_derivation() {
        assert_eq!(NumericField::new().name("ice").label("Ice Cost").id(), "ice");
        assert_eq!(
            NumericField::new().label("Ice Cost  (per Hour)").id(),
            "ice-cost-(per-hour)"
        );
        assert_eq!(NumericField::new().id(), "num");
    }

    #[test]
    fn test_id_keeps_edge_whitespace_as_dashes() {
        assert_eq!(NumericField::new().label("   ").id(), "-");
        assert_eq!(NumericField::new().label(" Fixed Fee ").id(), "-fixed-fee-");
    }
}
