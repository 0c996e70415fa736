// src/registry/mod.rs

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::JudgeError;
use crate::model::{Frequency, MaintenancePlan, MaintenanceType};
use crate::validation::{ValidationError, plan_from_value, validate_plans};

/// Ordered set of existing maintenance plans.
///
/// Insertion order is kept because best-match selection picks the first
/// Perfect plan.
#[derive(Clone, Debug, Default)]
pub struct PlanRegistry {
    plans: Vec<MaintenancePlan>,
}

impl PlanRegistry {
    pub fn new() -> Self {
        Self { plans: Vec::new() }
    }

    /// The fixed demonstration set.
    pub fn sample() -> Self {
        Self::new()
            .register_plan(MaintenancePlan::new(
                "PM-1001",
                "Replace Filter",
                Frequency::TwelveMonths,
                MaintenanceType::Pdm,
            ))
            .register_plan(MaintenancePlan::new(
                "PM-2002",
                "Clean Hydraulic System",
                Frequency::SixMonths,
                MaintenanceType::Cm,
            ))
            .register_plan(MaintenancePlan::new(
                "PM-3003",
                "Replace Hydraulic Filter",
                Frequency::SixMonths,
                MaintenanceType::Pdm,
            ))
    }

    pub fn register_plan(mut self, plan: MaintenancePlan) -> Self {
        self.plans.push(plan);
        self
    }

    /// Parses a JSON array of plans and validates every entry.
    pub fn from_json_str(content: &str) -> Result<Self, ValidationError> {
        let raw: Value =
            serde_json::from_str(content).map_err(|e| ValidationError::MalformedPlans {
                reason: format!("not valid JSON: {}", e),
            })?;
        Self::from_json_value(&raw)
    }

    /// Builds a registry from an already parsed JSON array.
    pub fn from_json_value(raw: &Value) -> Result<Self, ValidationError> {
        let Some(entries) = raw.as_array() else {
            return Err(ValidationError::MalformedPlans {
                reason: "expected a JSON array".to_string(),
            });
        };

        let plans = entries
            .iter()
            .map(plan_from_value)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = validate_plans(&plans).into_iter().next() {
            return Err(first);
        }

        Ok(Self { plans })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, JudgeError> {
        let content = fs::read_to_string(path).map_err(|e| JudgeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let raw: Value = serde_json::from_str(&content).map_err(|e| JudgeError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let registry = Self::from_json_value(&raw)?;
        tracing::debug!(path = %path.display(), plans = registry.len(), "Loaded plan registry");
        Ok(registry)
    }

    pub fn plans(&self) -> &[MaintenancePlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
