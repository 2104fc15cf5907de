//! Raw Diagnosis Form

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Symptom fields shown on a fresh form
pub const DEFAULT_OBSERVATION_SLOTS: usize = 3;

/// Uploaded photo reference; accepted but never analysed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub file_name: String,
}

/// Form contents exactly as typed by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseForm {
    /// Selected species name (empty when nothing selected)
    pub species: String,
    /// Age in years as entered
    pub age: String,
    /// Fixed number of symptom fields
    observations: Vec<String>,
    /// Optional photo
    pub image: Option<ImageAttachment>,
}

impl CaseForm {
    /// Create a blank form with the given number of symptom fields
    pub fn new(slots: usize) -> Self {
        Self {
            species: String::new(),
            age: String::new(),
            observations: vec![String::new(); slots],
            image: None,
        }
    }

    /// Symptom fields, blanks included
    pub fn observations(&self) -> &[String] {
        &self.observations
    }

    /// Replace the text of one symptom field
    pub fn set_observation(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let slots = self.observations.len();
        let slot = self
            .observations
            .get_mut(index)
            .ok_or(ValidationError::SlotOutOfRange { index, slots })?;
        *slot = text.into();
        Ok(())
    }

    /// Attach a photo
    pub fn attach_image(&mut self, file_name: impl Into<String>) {
        let file_name = file_name.into();
        debug!("Image attached: {}", file_name);
        self.image = Some(ImageAttachment { file_name });
    }

    /// Number of symptom fields with text in them
    pub fn filled_observations(&self) -> usize {
        self.observations.iter().filter(|o| !o.trim().is_empty()).count()
    }

    /// Clear every field, keeping the number of symptom slots
    pub fn clear(&mut self) {
        *self = Self::new(self.observations.len());
    }
}

impl Default for CaseForm {
    fn default() -> Self {
        Self::new(DEFAULT_OBSERVATION_SLOTS)
    }
}
