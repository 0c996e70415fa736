// src/validation/mod.rs

use serde_json::{Value, json};
use thiserror::Error;

use crate::model::{Frequency, MaintenanceType};

pub mod action;
pub mod plan;

pub use action::validate_action;
pub use plan::{plan_from_value, validate_plan, validate_plans};

/// Rejections raised before any comparison runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid value {value:?} for field '{field}'")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("invalid input for field '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("field '{field}' must be a string")]
    NotAString { field: &'static str },

    #[error("duplicate plan id '{id}'")]
    DuplicateId { id: String },

    #[error("malformed plan list: {reason}")]
    MalformedPlans { reason: String },
}

impl ValidationError {
    pub fn hint(&self) -> (String, Option<Value>) {
        match self {
            ValidationError::InvalidEnumValue { field, .. } => {
                let allowed: Vec<&str> = match *field {
                    "Frequency" => Frequency::ALL.iter().map(|f| f.as_str()).collect(),
                    "Type" => MaintenanceType::ALL.iter().map(|t| t.as_str()).collect(),
                    _ => Vec::new(),
                };
                (
                    format!("'{}' must be one of the declared values.", field),
                    Some(json!({ field.to_string(): allowed })),
                )
            }
            ValidationError::InvalidInput { field, .. } => (
                format!("Field '{}' is required and must not be blank.", field),
                Some(json!({ field.to_string(): "<required>" })),
            ),
            ValidationError::NotAString { field } => (
                format!("Field '{}' must be written as a JSON string.", field),
                Some(json!({ field.to_string(): "<text>" })),
            ),
            ValidationError::DuplicateId { id } => (
                format!("Plan IDs must be unique. Rename or remove the repeated '{}'.", id),
                None,
            ),
            ValidationError::MalformedPlans { .. } => (
                "Plans must be a JSON array of objects with ID, Description, Frequency and Type."
                    .to_string(),
                Some(json!([{
                    "ID": "PM-1001",
                    "Description": "Replace Filter",
                    "Frequency": "12 months",
                    "Type": "PDM"
                }])),
            ),
        }
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidInput {
            field,
            reason: "value is empty".to_string(),
        });
    }
    Ok(())
}
