// src/report/mod.rs

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::config::MatchingConfig;
use crate::evaluator::select_best;
use crate::model::{Action, MaintenancePlan};
use crate::protocol::{DescriptionMatch, EvaluationResult, Verdict};

/// Everything one evaluation run produced, ready for display or JSON output.
#[derive(Clone, Debug, Serialize)]
pub struct EvaluationReport {
    pub action: Action,
    pub plans: Vec<MaintenancePlan>,
    pub results: Vec<EvaluationResult>,
    pub best_match: Option<String>,
    pub recommendation: String,
}

impl EvaluationReport {
    pub fn new(action: Action, plans: Vec<MaintenancePlan>, results: Vec<EvaluationResult>) -> Self {
        let best_match = select_best(&results).map(|r| r.plan_id.clone());
        let recommendation = recommendation(best_match.as_deref());
        Self {
            action,
            plans,
            results,
            best_match,
            recommendation,
        }
    }

    pub fn render(&self) -> String {
        [
            format!("--- PROPOSED ACTION ---\n{}", render_action(&self.action)),
            format!("--- MAINTENANCE PLANS ---\n{}", render_plans(&self.plans)),
            format!("--- EVALUATION ---\n{}", render_results(&self.results)),
            format!("--- VERDICT ---\n{}", self.recommendation),
        ]
        .join("\n\n")
    }
}

pub fn recommendation(best_plan: Option<&str>) -> String {
    match best_plan {
        Some(id) => format!(
            "I believe PM {} already covers this action. It's a Perfect Match.",
            id
        ),
        None => "None of the plans perfectly match the action. Consider creating a new Maintenance Plan."
            .to_string(),
    }
}

pub fn render_action(action: &Action) -> String {
    let mut out = format!("{:<8} {:<30} {:<10} {}\n", "ID", "Name", "Frequency", "Type");
    out.push_str(&format!(
        "{:<8} {:<30} {:<10} {}",
        action.id, action.name, action.frequency, action.maintenance_type
    ));
    out
}

pub fn render_plans(plans: &[MaintenancePlan]) -> String {
    let mut lines = vec![format!(
        "{:<8} {:<30} {:<10} {}",
        "ID", "Description", "Frequency", "Type"
    )];
    for plan in plans {
        lines.push(format!(
            "{:<8} {:<30} {:<10} {}",
            plan.id, plan.description, plan.frequency, plan.maintenance_type
        ));
    }
    lines.join("\n")
}

pub fn render_results(results: &[EvaluationResult]) -> String {
    let mut lines = vec![format!(
        "{:<8} {:<12} {:<10} {:<6} {}",
        "PM ID", "Description", "Frequency", "Type", "Result"
    )];
    for result in results {
        let description = match result.similarity {
            Some(ratio) => format!("{} ({})", result.description_match, ratio),
            None => result.description_match.to_string(),
        };
        lines.push(format!(
            "{:<8} {} {} {} {}",
            result.plan_id,
            paint_description(result.description_match, format!("{:<12}", description)),
            paint_flag(result.frequency_match, 10),
            paint_flag(result.type_match, 6),
            paint_verdict(result.verdict),
        ));
    }
    lines.join("\n")
}

/// How the rules work under `config`, for the `explain` command.
pub fn explanation(config: &MatchingConfig) -> String {
    let scorer = config.metric.scorer();
    let mode = if config.use_fuzzy { "on" } else { "off" };
    format!(
        "Each maintenance plan is compared with the action on three criteria:

  Description  exact match, partial match (the action name appears inside the
               plan description) or no match. With fuzzy matching enabled the
               {metric} ratio is used instead: >= {full} is a match,
               >= {partial} a partial match.
               {metric}: {about}
  Frequency    recurrence of the task (3, 6 or 12 months).
  Type         nature of the maintenance (PDM, CM, PVM, FF).

Fuzzy matching is currently {mode}.

Only exact matches count towards the verdict:
  Perfect   all 3 match
  Likely    2 match
  Mismatch  1 or none match",
        metric = scorer.name(),
        about = scorer.description(),
        full = config.match_threshold,
        partial = config.partial_threshold,
        mode = mode,
    )
}

fn paint_description(outcome: DescriptionMatch, cell: String) -> ColoredString {
    match outcome {
        DescriptionMatch::Match => cell.as_str().green(),
        DescriptionMatch::Partial => cell.as_str().yellow(),
        DescriptionMatch::None => cell.as_str().red(),
    }
}

fn paint_flag(hit: bool, width: usize) -> ColoredString {
    if hit {
        format!("{:<width$}", "Match").as_str().green()
    } else {
        format!("{:<width$}", "No").as_str().red()
    }
}

fn paint_verdict(verdict: Verdict) -> ColoredString {
    let label = verdict.to_string();
    match verdict {
        Verdict::Perfect => label.as_str().green().bold(),
        Verdict::Likely => label.as_str().yellow(),
        Verdict::Mismatch => label.as_str().red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_all;
    use crate::model::{Frequency, MaintenanceType};
    use crate::registry::PlanRegistry;
    use crate::similarity::SimilarityMetric;

    fn default_action() -> Action {
        Action::new(
            "A-103",
            "Replace Hydraulic Filter",
            Frequency::SixMonths,
            MaintenanceType::Pdm,
        )
    }

    #[test]
    fn report_picks_perfect_plan() {
        let registry = PlanRegistry::sample();
        let action = default_action();
        let results = evaluate_all(registry.plans(), &action, false).unwrap();
        let report = EvaluationReport::new(action, registry.plans().to_vec(), results);

        assert_eq!(report.best_match.as_deref(), Some("PM-3003"));
        assert_eq!(
            report.recommendation,
            "I believe PM PM-3003 already covers this action. It's a Perfect Match."
        );

        let text = report.render();
        assert!(text.contains("--- EVALUATION ---"));
        assert!(text.contains("PM-2002"));
        assert!(text.contains("Perfect"));
    }

    #[test]
    fn no_perfect_plan_suggests_new_plan() {
        assert_eq!(
            recommendation(None),
            "None of the plans perfectly match the action. Consider creating a new Maintenance Plan."
        );
    }

    #[test]
    fn report_serializes_with_wire_names() {
        let action = default_action();
        let report = EvaluationReport::new(action, Vec::new(), Vec::new());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["action"]["Frequency"], "6 months");
        assert!(value["best_match"].is_null());
    }

    #[test]
    fn fuzzy_ratio_shown_in_table() {
        let registry = PlanRegistry::sample();
        let results = evaluate_all(registry.plans(), &default_action(), true).unwrap();
        assert!(render_results(&results).contains("Partial (67)"));
    }

    #[test]
    fn explanation_follows_config() {
        let text = explanation(&MatchingConfig::new());
        assert!(text.contains("token_overlap ratio"));
        assert!(text.contains(">= 90 is a match"));
        assert!(text.contains(">= 60 a partial match"));
        assert!(text.contains("currently off"));

        let config = MatchingConfig::new()
            .enable_fuzzy()
            .with_metric(SimilarityMetric::TokenSet)
            .with_thresholds(85, 50);
        let text = explanation(&config);
        assert!(text.contains("token_set ratio"));
        assert!(text.contains(SimilarityMetric::TokenSet.scorer().description()));
        assert!(text.contains(">= 85 is a match"));
        assert!(text.contains(">= 50 a partial match"));
        assert!(text.contains("currently on"));
    }
}
