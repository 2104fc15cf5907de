//! Ordered Rule Table
//!
//! Declaration order is priority order: the first rule that fires wins.
//! Tables can be built in code or read from a TOML/JSON file so new
//! diseases never require touching the matching code.

use crate::error::RuleError;
use crate::rules::{DiagnosisResult, Rule};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Id reported in validation errors for the fallback entry
const FALLBACK_ID: &str = "fallback";

/// Rule file layout
#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    rules: Vec<RuleSpec>,
    #[serde(default)]
    fallback: Option<FallbackSpec>,
}

#[derive(Debug, Deserialize)]
struct RuleSpec {
    id: String,
    disease_name: String,
    keywords: Vec<String>,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    treatment: String,
    #[serde(default = "default_vet_consultation")]
    requires_vet_consultation: bool,
    confidence: u8,
}

#[derive(Debug, Deserialize)]
struct FallbackSpec {
    disease_name: String,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    treatment: String,
    #[serde(default = "default_vet_consultation")]
    requires_vet_consultation: bool,
    confidence: u8,
}

fn default_vet_consultation() -> bool {
    true
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        Rule::new(spec.id, spec.disease_name, spec.keywords)
            .with_explanation(spec.explanation)
            .with_treatment(spec.treatment)
            .with_vet_consultation(spec.requires_vet_consultation)
            .with_confidence(spec.confidence)
    }
}

impl From<FallbackSpec> for DiagnosisResult {
    fn from(spec: FallbackSpec) -> Self {
        DiagnosisResult {
            disease_name: spec.disease_name,
            explanation: spec.explanation,
            treatment: spec.treatment,
            requires_vet_consultation: spec.requires_vet_consultation,
            confidence: spec.confidence,
            matched_rule: None,
        }
    }
}

/// Prioritized rules plus the result used when none of them fire
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: DiagnosisResult,
}

impl RuleTable {
    /// Build a table, rejecting rules that could never be meaningful
    pub fn new(rules: Vec<Rule>, fallback: DiagnosisResult) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if rule.required_keywords().is_empty() {
                return Err(RuleError::EmptyKeywords(rule.id().to_string()));
            }
            if rule.confidence() > 100 {
                return Err(RuleError::InvalidConfidence {
                    rule: rule.id().to_string(),
                    confidence: rule.confidence(),
                });
            }
            if !seen.insert(rule.id()) {
                return Err(RuleError::DuplicateId(rule.id().to_string()));
            }
        }
        if fallback.confidence > 100 {
            return Err(RuleError::InvalidConfidence {
                rule: FALLBACK_ID.to_string(),
                confidence: fallback.confidence,
            });
        }

        info!("Rule table loaded with {} rules", rules.len());
        Ok(Self { rules, fallback })
    }

    /// The table shipped with the form: foot-and-mouth disease only
    pub fn builtin() -> Self {
        let fmd = Rule::new("fmd", "Foot-and-Mouth Disease (FMD)", ["salivation", "blister", "walking"])
            .with_explanation(
                "The combination of excessive salivation, mouth blisters, and difficulty walking \
                 are classic symptoms of FMD. This highly contagious viral disease affects \
                 cloven-hoofed animals and requires immediate attention.",
            )
            .with_treatment(
                "Isolate the animal immediately. Provide soft feed and clean water. Apply \
                 antiseptic to mouth lesions. Contact veterinary authorities as FMD is a \
                 notifiable disease.",
            )
            .with_vet_consultation(true)
            .with_confidence(85);

        Self {
            rules: vec![fmd],
            fallback: Self::default_fallback(),
        }
    }

    /// Generic assessment returned when no rule fires
    pub fn default_fallback() -> DiagnosisResult {
        DiagnosisResult {
            disease_name: "General Health Assessment Required".to_string(),
            explanation: "Based on the symptoms provided, a comprehensive examination is needed \
                          to determine the exact condition. Multiple conditions could present \
                          with these symptoms."
                .to_string(),
            treatment: "Monitor the animal closely. Ensure adequate nutrition and hydration. Keep \
                        the animal comfortable and reduce stress factors."
                .to_string(),
            requires_vet_consultation: true,
            confidence: 60,
            matched_rule: None,
        }
    }

    /// Load a table from a rule file (format picked from the extension)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        info!("Loading rule table from {}", path.display());
        let file: RuleFile = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        Self::from_rule_file(file)
    }

    /// Load a table from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, RuleError> {
        let file: RuleFile = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Self::from_rule_file(file)
    }

    fn from_rule_file(file: RuleFile) -> Result<Self, RuleError> {
        let rules = file.rules.into_iter().map(Rule::from).collect();
        let fallback = file
            .fallback
            .map(DiagnosisResult::from)
            .unwrap_or_else(Self::default_fallback);
        Self::new(rules, fallback)
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &DiagnosisResult {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
