//! Diagnosis report shown under the form

use chrono::{DateTime, Utc};
use rule_engine::{Case, DiagnosisResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown under every result
pub const DISCLAIMER: &str = "This tool provides preliminary assessments only. Always consult \
with a qualified veterinarian for accurate diagnosis and treatment. This system is designed to \
assist, not replace, professional veterinary care.";

/// Shown when the result requires a veterinarian
pub const VET_CONSULTATION_NOTICE: &str = "This condition requires professional veterinary \
assessment. Please contact a qualified veterinarian immediately for proper diagnosis and \
treatment.";

/// A completed analysis for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport {
    pub submission_id: Uuid,
    pub case: Case,
    pub result: DiagnosisResult,
    pub completed_at: DateTime<Utc>,
}

impl DiagnosisReport {
    pub fn new(submission_id: Uuid, case: Case, result: DiagnosisResult) -> Self {
        Self {
            submission_id,
            case,
            result,
            completed_at: Utc::now(),
        }
    }

    /// Consultation notice, when the result calls for one
    pub fn consultation_notice(&self) -> Option<&'static str> {
        self.result
            .requires_vet_consultation
            .then_some(VET_CONSULTATION_NOTICE)
    }

    pub fn disclaimer(&self) -> &'static str {
        DISCLAIMER
    }

    /// JSON payload for the result panel
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
