use proptest::prelude::*;

use coverage_judge::config::MatchingConfig;
use coverage_judge::similarity::{SimilarityMetric, SimilarityScorer, TokenOverlap, TokenSet};
use coverage_judge::{
    Action, DescriptionMatch, Evaluator, Frequency, MaintenancePlan, MaintenanceType,
    MatchEvaluator, Verdict, evaluate, select_best,
};

fn frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(Frequency::ALL.to_vec())
}

fn maintenance_type() -> impl Strategy<Value = MaintenanceType> {
    prop::sample::select(MaintenanceType::ALL.to_vec())
}

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,3}"
}

proptest! {
    #[test]
    fn exact_mode_match_iff_lowercase_equal(
        description in text(),
        name in text(),
        freq in frequency(),
        kind in maintenance_type(),
    ) {
        let plan = MaintenancePlan::new("PM-1", &description, freq, kind);
        let action = Action::new("A-1", &name, freq, kind);
        let result = evaluate(&plan, &action, false);

        let equal = description.to_lowercase() == name.to_lowercase();
        prop_assert_eq!(result.description_match == DescriptionMatch::Match, equal);
    }

    #[test]
    fn exact_mode_contained_name_is_partial(
        prefix in text(),
        name in text(),
        suffix in text(),
    ) {
        let description = format!("{} {} {}", prefix, name, suffix);
        let plan = MaintenancePlan::new("PM-1", &description, Frequency::SixMonths, MaintenanceType::Pdm);
        let action = Action::new("A-1", &name.to_uppercase(), Frequency::SixMonths, MaintenanceType::Pdm);

        let result = evaluate(&plan, &action, false);
        prop_assert_eq!(result.description_match, DescriptionMatch::Partial);
    }

    #[test]
    fn verdict_follows_score(
        description in text(),
        name in text(),
        plan_freq in frequency(),
        action_freq in frequency(),
        plan_kind in maintenance_type(),
        action_kind in maintenance_type(),
        fuzzy in any::<bool>(),
    ) {
        let plan = MaintenancePlan::new("PM-1", &description, plan_freq, plan_kind);
        let action = Action::new("A-1", &name, action_freq, action_kind);
        let result = evaluate(&plan, &action, fuzzy);

        let score = u8::from(result.description_match == DescriptionMatch::Match)
            + u8::from(plan_freq == action_freq)
            + u8::from(plan_kind == action_kind);
        prop_assert_eq!(result.score(), score);

        let expected = match score {
            3 => Verdict::Perfect,
            2 => Verdict::Likely,
            _ => Verdict::Mismatch,
        };
        prop_assert_eq!(result.verdict, expected);
    }

    #[test]
    fn evaluation_is_deterministic(
        description in text(),
        name in text(),
        fuzzy in any::<bool>(),
        token_set in any::<bool>(),
    ) {
        let metric = if token_set { SimilarityMetric::TokenSet } else { SimilarityMetric::TokenOverlap };
        let evaluator = MatchEvaluator::new(MatchingConfig::new().with_fuzzy(fuzzy).with_metric(metric));
        let plan = MaintenancePlan::new("PM-1", &description, Frequency::ThreeMonths, MaintenanceType::Ff);
        let action = Action::new("A-1", &name, Frequency::ThreeMonths, MaintenanceType::Ff);

        prop_assert_eq!(evaluator.evaluate(&plan, &action), evaluator.evaluate(&plan, &action));
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(left in text(), right in text()) {
        let scorers: [&dyn SimilarityScorer; 2] = [&TokenOverlap, &TokenSet];
        for scorer in scorers {
            let forward = scorer.ratio(&left, &right);
            prop_assert!(forward <= 100);
            prop_assert_eq!(forward, scorer.ratio(&right, &left));
            prop_assert_eq!(scorer.ratio(&left, &left.to_uppercase()), 100);
        }
    }

    #[test]
    fn select_best_returns_first_perfect(
        verdicts in prop::collection::vec(
            prop::sample::select(vec![Verdict::Perfect, Verdict::Likely, Verdict::Mismatch]),
            0..8,
        )
    ) {
        let results: Vec<_> = verdicts
            .iter()
            .enumerate()
            .map(|(i, verdict)| coverage_judge::EvaluationResult {
                plan_id: format!("PM-{}", i),
                description_match: DescriptionMatch::None,
                frequency_match: false,
                type_match: false,
                verdict: *verdict,
                similarity: None,
            })
            .collect();

        let expected = verdicts.iter().position(|v| *v == Verdict::Perfect);
        let actual = select_best(&results)
            .and_then(|best| results.iter().position(|r| r.plan_id == best.plan_id));
        prop_assert_eq!(actual, expected);
    }
}
