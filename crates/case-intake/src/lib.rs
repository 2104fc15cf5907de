//! Case Intake and Validation
//!
//! Holds the raw diagnosis form and turns it into a `Case` only when the
//! species, age and at least one symptom are present.

mod error;
mod form;
mod validator;

pub use error::ValidationError;
pub use form::{CaseForm, ImageAttachment, DEFAULT_OBSERVATION_SLOTS};
pub use validator::{IntakeConfig, IntakeValidator, ValidationResult, MISSING_INFORMATION_MESSAGE};
