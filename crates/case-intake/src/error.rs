//! Validation Error Types

use thiserror::Error;

/// Errors during case intake
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Age is not a number
    #[error("Age '{0}' is not a number")]
    InvalidAge(String),

    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Species is not on the form's list
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    /// Every symptom field is blank
    #[error("At least one symptom must be described")]
    NoObservations,

    /// Symptom slot index past the end of the form
    #[error("Symptom slot {index} does not exist (form has {slots})")]
    SlotOutOfRange { index: usize, slots: usize },
}

impl ValidationError {
    /// Whether the error means a required field was left empty
    pub fn is_missing_information(&self) -> bool {
        matches!(self, ValidationError::MissingField(_) | ValidationError::NoObservations)
    }
}
