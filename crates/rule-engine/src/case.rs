//! Case facts submitted for a single diagnosis

use crate::species::Species;
use serde::{Deserialize, Serialize};

/// One animal's species, age, and reported symptoms.
///
/// A case is immutable once built; the intake layer is responsible for
/// rejecting incomplete forms before a case ever exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    species: Species,
    age_years: f64,
    observations: Vec<String>,
    has_image: bool,
}

impl Case {
    /// Create a case without an attached image
    pub fn new(species: Species, age_years: f64, observations: Vec<String>) -> Self {
        Self {
            species,
            age_years,
            observations,
            has_image: false,
        }
    }

    /// Mark whether the submitter attached a photo
    pub fn with_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn age_years(&self) -> f64 {
        self.age_years
    }

    pub fn observations(&self) -> &[String] {
        &self.observations
    }

    /// Informational only, never used for matching
    pub fn has_image(&self) -> bool {
        self.has_image
    }

    /// All observations joined by single spaces and lowercased.
    ///
    /// Blank slots are kept so the joined text matches what the form shows.
    pub fn observation_text(&self) -> String {
        self.observations.join(" ").to_lowercase()
    }
}
