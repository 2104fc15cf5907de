//! Case Validator

use crate::error::ValidationError;
use crate::form::{CaseForm, DEFAULT_OBSERVATION_SLOTS};
use rule_engine::{Case, Species};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Message shown when a required field was left empty
pub const MISSING_INFORMATION_MESSAGE: &str =
    "Please fill in all required fields before proceeding with diagnosis.";

/// Intake configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Number of symptom fields on the form
    pub observation_slots: usize,
    /// Accepted age range (years); unbounded above by default
    pub age_range: (f64, f64),
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            observation_slots: DEFAULT_OBSERVATION_SLOTS,
            age_range: (0.0, f64::INFINITY),
        }
    }
}

/// Result of checking a whole form
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the form can be submitted
    pub valid: bool,
    /// Every problem found, in form order
    pub errors: Vec<ValidationError>,
    /// Number of fields checked
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }

    /// Text to surface to the user, `None` when the form is valid
    pub fn user_message(&self) -> Option<String> {
        if self.errors.iter().any(ValidationError::is_missing_information) {
            return Some(MISSING_INFORMATION_MESSAGE.to_string());
        }
        self.errors.first().map(ToString::to_string)
    }
}

/// Validator turning raw forms into cases
pub struct IntakeValidator {
    config: IntakeConfig,
}

impl IntakeValidator {
    /// Create a new validator with given config
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// A blank form sized for this validator
    pub fn blank_form(&self) -> CaseForm {
        CaseForm::new(self.config.observation_slots)
    }

    /// Validate the species selection
    pub fn validate_species(&self, species: &str) -> Result<Species, ValidationError> {
        if species.trim().is_empty() {
            return Err(ValidationError::MissingField("species"));
        }
        species
            .parse()
            .map_err(|e: rule_engine::UnknownSpecies| ValidationError::UnknownSpecies(e.0))
    }

    /// Validate the age field
    pub fn validate_age(&self, age: &str) -> Result<f64, ValidationError> {
        let age = age.trim();
        if age.is_empty() {
            return Err(ValidationError::MissingField("age"));
        }
        let value: f64 = age
            .parse()
            .map_err(|_| ValidationError::InvalidAge(age.to_string()))?;
        if !value.is_finite() {
            return Err(ValidationError::InvalidAge(age.to_string()));
        }

        let (min, max) = self.config.age_range;
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field: "age",
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Validate that at least one symptom is described
    pub fn validate_observations(&self, observations: &[String]) -> Result<(), ValidationError> {
        if observations.iter().all(|o| o.trim().is_empty()) {
            Err(ValidationError::NoObservations)
        } else {
            Ok(())
        }
    }

    /// Check every field and collect all problems
    pub fn check(&self, form: &CaseForm) -> ValidationResult {
        let errors: Vec<_> = [
            self.validate_species(&form.species).err(),
            self.validate_age(&form.age).err(),
            self.validate_observations(form.observations()).err(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            ValidationResult::valid(3)
        } else {
            debug!("Form has {} problems", errors.len());
            ValidationResult::invalid(errors, 3)
        }
    }

    /// Build an immutable case, failing on the first problem
    pub fn build_case(&self, form: &CaseForm) -> Result<Case, ValidationError> {
        let species = self.validate_species(&form.species);
        let age = self.validate_age(&form.age);
        let observations = self.validate_observations(form.observations());

        let (species, age) = match (species, age, observations) {
            (Ok(species), Ok(age), Ok(())) => (species, age),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                warn!("Case rejected: {}", e);
                return Err(e);
            }
        };

        let observations = form
            .observations()
            .iter()
            .map(|o| o.trim().to_string())
            .collect();

        Ok(Case::new(species, age, observations).with_image(form.image.is_some()))
    }
}

impl Default for IntakeValidator {
    fn default() -> Self {
        Self::new(IntakeConfig::default())
    }
}
