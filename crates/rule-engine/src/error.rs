//! Rule Table Error Types

use thiserror::Error;

/// Errors while building or loading a rule table
#[derive(Debug, Error)]
pub enum RuleError {
    /// Confidence must be a percentage
    #[error("Rule '{rule}' has confidence {confidence}, expected 0-100")]
    InvalidConfidence { rule: String, confidence: u8 },

    /// A rule without keywords would match every case
    #[error("Rule '{0}' has no keywords")]
    EmptyKeywords(String),

    /// Two rules share the same id
    #[error("Duplicate rule id: {0}")]
    DuplicateId(String),

    /// Rule file could not be read or deserialized
    #[error("Rule configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
