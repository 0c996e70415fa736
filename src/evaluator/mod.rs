//! Match evaluation: compares one action against one plan on description,
//! frequency and type, and turns the exact hits into a verdict.

use tracing::debug;

use crate::config::MatchingConfig;
use crate::error::JudgeError;
use crate::model::{Action, MaintenancePlan};
use crate::protocol::{DescriptionMatch, EvaluationResult, Verdict};
use crate::validation::{validate_action, validate_plan};

pub mod batch;

pub use batch::{evaluate_all, select_best};

/// Trait for anything that can judge whether a plan covers an action.
pub trait Evaluator {
    fn evaluate(&self, plan: &MaintenancePlan, action: &Action) -> EvaluationResult;
}

/// Rule-based evaluator driven by a `MatchingConfig`.
#[derive(Clone, Debug, Default)]
pub struct MatchEvaluator {
    config: MatchingConfig,
}

impl MatchEvaluator {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Returns the description signal and, in fuzzy mode, the ratio behind it.
    pub fn compare_description(
        &self,
        description: &str,
        name: &str,
    ) -> (DescriptionMatch, Option<u8>) {
        let description = description.to_lowercase();
        let name = name.to_lowercase();

        if !self.config.use_fuzzy {
            let outcome = if description == name {
                DescriptionMatch::Match
            } else if description.contains(&name) {
                DescriptionMatch::Partial
            } else {
                DescriptionMatch::None
            };
            return (outcome, None);
        }

        let ratio = self.config.metric.scorer().ratio(&description, &name);
        let outcome = if ratio >= self.config.match_threshold {
            DescriptionMatch::Match
        } else if ratio >= self.config.partial_threshold {
            DescriptionMatch::Partial
        } else {
            DescriptionMatch::None
        };
        (outcome, Some(ratio))
    }
}

impl Evaluator for MatchEvaluator {
    fn evaluate(&self, plan: &MaintenancePlan, action: &Action) -> EvaluationResult {
        let (description_match, similarity) =
            self.compare_description(&plan.description, &action.name);

        let mut result = EvaluationResult {
            plan_id: plan.id.clone(),
            description_match,
            frequency_match: plan.frequency == action.frequency,
            type_match: plan.maintenance_type == action.maintenance_type,
            verdict: Verdict::Mismatch,
            similarity,
        };
        result.verdict = Verdict::from_score(result.score());

        debug!(
            plan = %plan.id,
            action = %action.id,
            description = %result.description_match,
            frequency = result.frequency_match,
            kind = result.type_match,
            verdict = %result.verdict,
            "Evaluated plan"
        );

        result
    }
}

/// Evaluates one plan with default thresholds, toggling only fuzzy matching.
///
/// Inputs are not validated: a blank name or description is compared as is.
/// Use [`evaluate_checked`] for untrusted input, or [`evaluate_all`] for a batch.
pub fn evaluate(plan: &MaintenancePlan, action: &Action, use_fuzzy: bool) -> EvaluationResult {
    MatchEvaluator::new(MatchingConfig::new().with_fuzzy(use_fuzzy)).evaluate(plan, action)
}

/// Like [`evaluate`], but rejects a malformed action or plan first.
pub fn evaluate_checked(
    plan: &MaintenancePlan,
    action: &Action,
    use_fuzzy: bool,
) -> Result<EvaluationResult, JudgeError> {
    validate_action(action)?;
    validate_plan(plan)?;
    Ok(evaluate(plan, action, use_fuzzy))
}
