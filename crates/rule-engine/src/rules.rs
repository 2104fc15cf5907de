//! Diagnostic Rules

use serde::{Deserialize, Serialize};

/// Diagnosis handed back to the form for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    /// Likely disease
    pub disease_name: String,
    /// Why the symptoms point to this disease
    pub explanation: String,
    /// Recommended first steps
    pub treatment: String,
    /// Whether a veterinarian must be contacted
    pub requires_vet_consultation: bool,
    /// Confidence percentage (0-100)
    pub confidence: u8,
    /// Id of the rule that produced this result, `None` for the fallback
    pub matched_rule: Option<String>,
}

/// A named diagnostic hypothesis.
///
/// The rule fires when every keyword occurs somewhere in the observation
/// text. Keywords are stored lowercased and matched as plain substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    id: String,
    disease_name: String,
    required_keywords: Vec<String>,
    explanation: String,
    treatment: String,
    requires_vet_consultation: bool,
    confidence: u8,
}

impl Rule {
    /// Create a rule; blank keywords are dropped
    pub fn new<I, S>(id: impl Into<String>, disease_name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let required_keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self {
            id: id.into(),
            disease_name: disease_name.into(),
            required_keywords,
            explanation: String::new(),
            treatment: String::new(),
            requires_vet_consultation: true,
            confidence: 0,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_treatment(mut self, treatment: impl Into<String>) -> Self {
        self.treatment = treatment.into();
        self
    }

    pub fn with_vet_consultation(mut self, required: bool) -> Self {
        self.requires_vet_consultation = required;
        self
    }

    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn disease_name(&self) -> &str {
        &self.disease_name
    }

    pub fn required_keywords(&self) -> &[String] {
        &self.required_keywords
    }

    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    /// Check the rule against already-lowercased observation text
    pub fn matches(&self, text: &str) -> bool {
        self.required_keywords.iter().all(|k| text.contains(k.as_str()))
    }

    /// Build the result this rule reports
    pub fn to_result(&self) -> DiagnosisResult {
        DiagnosisResult {
            disease_name: self.disease_name.clone(),
            explanation: self.explanation.clone(),
            treatment: self.treatment.clone(),
            requires_vet_consultation: self.requires_vet_consultation,
            confidence: self.confidence,
            matched_rule: Some(self.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mastitis() -> Rule {
        Rule::new("mastitis", "Mastitis", ["Swollen Udder", " milk ", ""])
            .with_treatment("Antibiotic therapy")
            .with_confidence(75)
    }

    #[test]
    fn test_keywords_are_normalized() {
        assert_eq!(mastitis().required_keywords(), ["swollen udder", "milk"]);
    }

    #[test]
    fn test_all_keywords_required() {
        let rule = mastitis();
        assert!(rule.matches("swollen udder and abnormal milk"));
        assert!(!rule.matches("swollen udder"));
        assert!(!rule.matches("reduced milk production"));
    }

    #[test]
    fn test_substring_match_without_tokenizing() {
        let rule = Rule::new("fmd", "FMD", ["blister"]);
        assert!(rule.matches("several blisters on the tongue"));
    }

    #[test]
    fn test_to_result_carries_rule_fields() {
        let result = mastitis().to_result();
        assert_eq!(result.disease_name, "Mastitis");
        assert_eq!(result.treatment, "Antibiotic therapy");
        assert_eq!(result.confidence, 75);
        assert!(result.requires_vet_consultation);
        assert_eq!(result.matched_rule.as_deref(), Some("mastitis"));
    }

    #[test]
    fn test_result_serializes_in_camel_case() {
        let json = serde_json::to_value(mastitis().to_result()).unwrap();
        assert_eq!(json["diseaseName"], "Mastitis");
        assert_eq!(json["requiresVetConsultation"], true);
        assert_eq!(json["matchedRule"], "mastitis");
    }
}
