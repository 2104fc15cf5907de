//! Diagnosis Engine Implementation

use crate::case::Case;
use crate::rules::DiagnosisResult;
use crate::table::RuleTable;
use std::sync::Arc;
use tracing::debug;

/// First-match-wins evaluator over a shared rule table.
///
/// Evaluation is a pure function of the observation text; species, age and
/// the image flag never influence the outcome.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    table: Arc<RuleTable>,
}

impl DiagnosisEngine {
    /// Create an engine over the given table
    pub fn new(table: RuleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Evaluate a case
    pub fn evaluate(&self, case: &Case) -> DiagnosisResult {
        self.evaluate_lowercase(&case.observation_text())
    }

    /// Evaluate raw observation text (lowercased here)
    pub fn evaluate_text(&self, text: &str) -> DiagnosisResult {
        self.evaluate_lowercase(&text.to_lowercase())
    }

    fn evaluate_lowercase(&self, text: &str) -> DiagnosisResult {
        match self.table.rules().iter().find(|rule| rule.matches(text)) {
            Some(rule) => {
                debug!("Rule '{}' matched", rule.id());
                rule.to_result()
            }
            None => {
                debug!("No rule matched, using fallback");
                self.table.fallback().clone()
            }
        }
    }

    /// Ids of every rule that fires for the case, in priority order
    pub fn matching_rules(&self, case: &Case) -> Vec<&str> {
        let text = case.observation_text();
        self.table
            .rules()
            .iter()
            .filter(|rule| rule.matches(&text))
            .map(|rule| rule.id())
            .collect()
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

impl Default for DiagnosisEngine {
    fn default() -> Self {
        Self::new(RuleTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;
    use crate::species::Species;
    use proptest::prelude::*;

    fn case(observations: &[&str]) -> Case {
        Case::new(
            Species::Cow,
            3.0,
            observations.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn two_rule_engine() -> DiagnosisEngine {
        let rules = vec![
            Rule::new("bloat", "Bloat", ["distended", "breathing"]).with_confidence(80),
            Rule::new("pneumonia", "Pneumonia", ["breathing"]).with_confidence(70),
        ];
        DiagnosisEngine::new(RuleTable::new(rules, RuleTable::default_fallback()).unwrap())
    }

    #[test]
    fn test_fmd_scenario() {
        let engine = DiagnosisEngine::default();
        let result = engine.evaluate(&case(&[
            "excessive salivation",
            "mouth blisters",
            "difficulty walking",
        ]));

        assert_eq!(result.disease_name, "Foot-and-Mouth Disease (FMD)");
        assert_eq!(result.confidence, 85);
        assert!(result.requires_vet_consultation);
        assert_eq!(result.matched_rule.as_deref(), Some("fmd"));
    }

    #[test]
    fn test_no_match_falls_back() {
        let engine = DiagnosisEngine::default();
        let result = engine.evaluate(&case(&["mild limp", "", ""]));

        assert_eq!(result.disease_name, "General Health Assessment Required");
        assert_eq!(result.confidence, 60);
        assert!(result.requires_vet_consultation);
        assert!(result.matched_rule.is_none());
    }

    #[test]
    fn test_partial_keyword_set_does_not_fire() {
        let engine = DiagnosisEngine::default();
        let result = engine.evaluate(&case(&["salivation", "blisters"]));
        assert!(result.matched_rule.is_none());
    }

    #[test]
    fn test_keywords_may_span_observations() {
        let engine = DiagnosisEngine::default();
        let result = engine.evaluate(&case(&["SALIVATION and BLISTERS", "", "Trouble Walking"]));
        assert_eq!(result.matched_rule.as_deref(), Some("fmd"));
    }

    #[test]
    fn test_case_and_text_evaluation_agree() {
        let engine = two_rule_engine();
        let mixed = case(&["Distended Abdomen", "LABOURED BREATHING"]);
        let result = engine.evaluate(&mixed);

        assert_eq!(result, engine.evaluate_text(&mixed.observations().join(" ")));
        assert_eq!(result.matched_rule.as_deref(), Some("bloat"));
    }

    #[test]
    fn test_earlier_rule_wins() {
        let engine = two_rule_engine();
        let both = case(&["distended abdomen", "laboured breathing"]);

        assert_eq!(engine.matching_rules(&both), ["bloat", "pneumonia"]);
        assert_eq!(engine.evaluate(&both).disease_name, "Bloat");
        assert_eq!(engine.evaluate(&case(&["noisy breathing"])).disease_name, "Pneumonia");
    }

    #[test]
    fn test_empty_table_always_falls_back() {
        let engine =
            DiagnosisEngine::new(RuleTable::new(Vec::new(), RuleTable::default_fallback()).unwrap());
        assert_eq!(engine.evaluate(&case(&["anything"])), RuleTable::default_fallback());
    }

    #[test]
    fn test_species_and_age_do_not_affect_result() {
        let engine = DiagnosisEngine::default();
        let obs = vec!["salivation".to_string(), "blister".to_string(), "walking".to_string()];
        let cow = Case::new(Species::Cow, 1.0, obs.clone());
        let duck = Case::new(Species::Duck, 12.0, obs).with_image(true);
        assert_eq!(engine.evaluate(&cow), engine.evaluate(&duck));
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_deterministic(text in ".{0,64}") {
            let engine = two_rule_engine();
            prop_assert_eq!(engine.evaluate_text(&text), engine.evaluate_text(&text));
        }

        #[test]
        fn prop_matching_ignores_case(prefix in "[a-z ]{0,16}", suffix in "[a-z ]{0,16}") {
            let engine = DiagnosisEngine::default();
            let lower = format!("{prefix} salivation blister walking {suffix}");
            let upper = lower.to_uppercase();
            prop_assert_eq!(engine.evaluate_text(&lower), engine.evaluate_text(&upper));
            prop_assert_eq!(engine.evaluate_text(&upper).confidence, 85);
        }

        #[test]
        fn prop_later_rule_never_shadows_earlier(noise in "[a-z ]{0,24}") {
            let engine = two_rule_engine();
            let text = format!("{noise} distended breathing {noise}");
            let result = engine.evaluate_text(&text);
            prop_assert_eq!(result.matched_rule.as_deref(), Some("bloat"));
        }

        #[test]
        fn prop_text_without_keywords_falls_back(text in "[0-9 ]{0,32}") {
            let engine = two_rule_engine();
            prop_assert_eq!(engine.evaluate_text(&text), RuleTable::default_fallback());
        }
    }
}
