//! Form controls
//!
//! Front-end independent controls: the numeric input and the button. The
//! terminal front end renders them; the planner only sees their
//! notifications.

pub mod action_button;
pub mod numeric_field;

pub use action_button::{ActionButton, ButtonSize, ButtonTone, Pressed};
pub use numeric_field::{NumericField, ValueChanged};

use crate::models::PlannerField;

/// The input control for a numeric planner field
///
/// Every cost input is floored at 0. Text fields have no numeric control.
pub fn planner_field_control(field: PlannerField, value: f64) -> Option<NumericField> {
    let control = NumericField::new()
        .name(field.query_key())
        .value(value)
        .min(0.0);

    let control = match field {
        PlannerField::Team | PlannerField::LogoUrl => return None,
        PlannerField::IceRate => control.label("Ice Cost (per Hour)").prefix("$").step(1.0),
        PlannerField::IceHours => control
            .label("Number of Ice Slots (Hours)")
            .suffix("hours")
            .step(1.0),
        PlannerField::CoachCost => control.label("Coaches Cost (Total)").prefix("$").step(50.0),
        PlannerField::JerseyCost => control
            .label("Jersey Cost (Per Player)")
            .prefix("$")
            .step(1.0),
        PlannerField::PlayerCount => control.label("Number of Players").step(1.0),
        PlannerField::FeePercent => control.label("Transaction Fee (%)").suffix("%").step(0.1),
        PlannerField::FeeFixed => control.label("Fixed Fee").prefix("$").step(0.01),
    };

    Some(control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_numeric_field_has_a_control() {
        for field in PlannerField::NUMERIC {
            let control = planner_field_control(field, 3.0).unwrap();
            assert_eq!(control.value, 3.0);
            assert_eq!(control.min, 0.0);
            assert_eq!(control.id(), field.query_key());
        }
        assert!(planner_field_control(PlannerField::Team, 0.0).is_none());
    }

    #[test]
    fn test_control_floors_negative_input() {
        let mut control = planner_field_control(PlannerField::PlayerCount, 0.0).unwrap();
        assert_eq!(control.input("-3").unwrap().value, 0.0);
    }
}
