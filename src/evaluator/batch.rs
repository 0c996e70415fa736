// src/evaluator/batch.rs

use tracing::{info, warn};

use crate::config::MatchingConfig;
use crate::error::JudgeError;
use crate::evaluator::{Evaluator, MatchEvaluator};
use crate::model::{Action, MaintenancePlan};
use crate::protocol::EvaluationResult;
use crate::validation::{validate_action, validate_plans};

impl MatchEvaluator {
    /// Validates the inputs, then evaluates every plan in input order.
    ///
    /// Nothing is evaluated if the action or any plan is malformed.
    pub fn evaluate_all(
        &self,
        plans: &[MaintenancePlan],
        action: &Action,
    ) -> Result<Vec<EvaluationResult>, JudgeError> {
        if let Err(e) = validate_action(action) {
            let (msg, _) = e.hint();
            warn!(action = %action.id, error = %e, "Rejected action: {}", msg);
            return Err(e.into());
        }

        let plan_errors = validate_plans(plans);
        for e in plan_errors.iter() {
            warn!(error = %e, "Rejected plan");
        }
        if let Some(first) = plan_errors.into_iter().next() {
            return Err(first.into());
        }

        let results: Vec<EvaluationResult> =
            plans.iter().map(|plan| self.evaluate(plan, action)).collect();

        info!(
            action = %action.id,
            plans = results.len(),
            fuzzy = self.config().use_fuzzy,
            perfect = results.iter().filter(|r| r.is_perfect()).count(),
            "Evaluated action against plans"
        );

        Ok(results)
    }
}

/// Evaluates `action` against each plan with default thresholds.
pub fn evaluate_all(
    plans: &[MaintenancePlan],
    action: &Action,
    use_fuzzy: bool,
) -> Result<Vec<EvaluationResult>, JudgeError> {
    MatchEvaluator::new(MatchingConfig::new().with_fuzzy(use_fuzzy)).evaluate_all(plans, action)
}

/// First Perfect result in input order. Later Perfect results are ignored.
pub fn select_best(results: &[EvaluationResult]) -> Option<&EvaluationResult> {
    results.iter().find(|r| r.is_perfect())
}
