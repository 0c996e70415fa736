// src/validation/plan.rs

use serde_json::Value;
use std::collections::HashSet;

use crate::model::MaintenancePlan;
use crate::validation::{ValidationError, require_text};

/// Builds a plan from an untyped JSON object, reporting the first bad field.
///
/// Unknown frequency or type strings surface as `InvalidEnumValue` instead of
/// a generic deserialization failure.
pub fn plan_from_value(value: &Value) -> Result<MaintenancePlan, ValidationError> {
    let plan = MaintenancePlan {
        id: string_field(value, "ID")?.to_string(),
        description: string_field(value, "Description")?.to_string(),
        frequency: string_field(value, "Frequency")?.parse()?,
        maintenance_type: string_field(value, "Type")?.parse()?,
    };
    validate_plan(&plan)?;
    Ok(plan)
}

fn string_field<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, ValidationError> {
    let Some(raw) = value.get(field) else {
        return Err(ValidationError::InvalidInput {
            field,
            reason: "missing field".to_string(),
        });
    };
    raw.as_str().ok_or(ValidationError::NotAString { field })
}

pub fn validate_plan(plan: &MaintenancePlan) -> Result<(), ValidationError> {
    require_text("ID", &plan.id)?;
    require_text("Description", &plan.description)?;
    Ok(())
}

/// Validates every plan and reports all problems found, in plan order.
pub fn validate_plans(plans: &[MaintenancePlan]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for plan in plans {
        if let Err(e) = validate_plan(plan) {
            errors.push(e);
            continue;
        }

        if !seen.insert(plan.id.as_str()) {
            errors.push(ValidationError::DuplicateId { id: plan.id.clone() });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frequency, MaintenanceType};

    fn plan(id: &str, description: &str) -> MaintenancePlan {
        MaintenancePlan::new(id, description, Frequency::SixMonths, MaintenanceType::Cm)
    }

    #[test]
    fn collects_every_problem() {
        let plans = vec![
            plan("PM-1", "Clean"),
            plan("", "Orphan"),
            plan("PM-1", "Clean again"),
            plan("PM-2", ""),
        ];

        let errors = validate_plans(&plans);
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::InvalidInput { field: "ID", .. }));
        assert_eq!(errors[1], ValidationError::DuplicateId { id: "PM-1".into() });
        assert!(matches!(
            errors[2],
            ValidationError::InvalidInput { field: "Description", .. }
        ));
    }

    #[test]
    fn plan_from_value_reports_bad_enum() {
        let value = serde_json::json!({
            "ID": "PM-7", "Description": "Flush lines", "Frequency": "weekly", "Type": "CM"
        });
        assert_eq!(
            plan_from_value(&value).unwrap_err(),
            ValidationError::InvalidEnumValue {
                field: "Frequency",
                value: "weekly".into()
            }
        );
    }

    #[test]
    fn plan_from_value_reports_missing_field() {
        let value = serde_json::json!({ "ID": "PM-7", "Frequency": "3 months", "Type": "CM" });
        assert!(matches!(
            plan_from_value(&value).unwrap_err(),
            ValidationError::InvalidInput { field: "Description", .. }
        ));
    }

    #[test]
    fn plan_from_value_reports_non_string_field() {
        let value = serde_json::json!({
            "ID": 7, "Description": "Flush lines", "Frequency": "3 months", "Type": "CM"
        });
        assert_eq!(
            plan_from_value(&value).unwrap_err(),
            ValidationError::NotAString { field: "ID" }
        );
    }

    #[test]
    fn plan_from_value_builds_plan() {
        let value = serde_json::json!({
            "ID": "PM-7", "Description": "Flush lines", "Frequency": "3 months", "Type": "FF"
        });
        let plan = plan_from_value(&value).unwrap();
        assert_eq!(plan.frequency, Frequency::ThreeMonths);
        assert_eq!(plan.maintenance_type, MaintenanceType::Ff);
    }

    #[test]
    fn clean_set_has_no_errors() {
        assert!(validate_plans(&[plan("PM-1", "a"), plan("PM-2", "b")]).is_empty());
    }
}
