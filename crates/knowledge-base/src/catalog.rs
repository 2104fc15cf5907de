//! Catalog Implementation

use crate::disease::{builtin_diseases, DiseaseEntry};
use crate::emergency::{builtin_emergencies, EmergencyCondition, Urgency};
use crate::CatalogError;
use rule_engine::Species;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Disease database filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiseaseQuery {
    /// Search text matched against names and symptoms
    pub term: Option<String>,
    /// Species filter, `None` for all animals
    pub animal: Option<Species>,
}

impl DiseaseQuery {
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            animal: None,
        }
    }

    pub fn with_animal(mut self, animal: Species) -> Self {
        self.animal = Some(animal);
        self
    }
}

/// In-memory reference catalog
pub struct Catalog {
    diseases: Vec<DiseaseEntry>,
    emergencies: Vec<EmergencyCondition>,
}

impl Catalog {
    /// Create a catalog from explicit entries
    pub fn new(diseases: Vec<DiseaseEntry>, emergencies: Vec<EmergencyCondition>) -> Self {
        info!(
            "Creating catalog with {} diseases and {} emergencies",
            diseases.len(),
            emergencies.len()
        );
        Self {
            diseases,
            emergencies,
        }
    }

    /// Catalog with the bundled reference data
    pub fn builtin() -> Self {
        Self::new(builtin_diseases(), builtin_emergencies())
    }

    /// All diseases in catalog order
    pub fn diseases(&self) -> &[DiseaseEntry] {
        &self.diseases
    }

    /// Diseases passing the query, in catalog order
    pub fn search(&self, query: &DiseaseQuery) -> Vec<&DiseaseEntry> {
        let term = query.term.as_deref().unwrap_or("");
        let found: Vec<_> = self
            .diseases
            .iter()
            .filter(|d| d.matches_term(term))
            .filter(|d| query.animal.map_or(true, |a| d.affects(a)))
            .collect();

        debug!("Disease search {:?} returned {} entries", query, found.len());
        found
    }

    /// Look up a disease by id
    pub fn disease(&self, id: &str) -> Result<&DiseaseEntry, CatalogError> {
        self.diseases
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CatalogError::DiseaseNotFound(id.to_string()))
    }

    /// All emergencies in guide order
    pub fn emergencies(&self) -> &[EmergencyCondition] {
        &self.emergencies
    }

    /// Look up an emergency by id
    pub fn emergency(&self, id: &str) -> Result<&EmergencyCondition, CatalogError> {
        self.emergencies
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CatalogError::EmergencyNotFound(id.to_string()))
    }

    /// Emergencies that need a veterinarian immediately
    pub fn critical_emergencies(&self) -> Vec<&EmergencyCondition> {
        self.emergencies
            .iter()
            .filter(|e| e.urgency == Urgency::Critical)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids<'a>(entries: &[&'a DiseaseEntry]) -> Vec<&'a str> {
        entries.iter().map(|&d| d.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = Catalog::builtin();
        let all = catalog.search(&DiseaseQuery::default());
        assert_eq!(
            ids(&all),
            ["fmd", "mastitis", "pneumonia", "bloat", "lameness", "diarrhea"]
        );
    }

    #[test]
    fn test_search_by_symptom() {
        let catalog = Catalog::builtin();
        let found = catalog.search(&DiseaseQuery::term("difficulty breathing"));
        assert_eq!(ids(&found), ["pneumonia", "bloat"]);

        let found = catalog.search(&DiseaseQuery::term("FEVER"));
        assert_eq!(ids(&found), ["fmd", "mastitis", "pneumonia"]);
    }

    #[test]
    fn test_padded_term_matches_nothing() {
        let catalog = Catalog::builtin();
        assert!(catalog.search(&DiseaseQuery::term(" fever")).is_empty());
    }

    #[test]
    fn test_filter_by_animal() {
        let catalog = Catalog::builtin();
        let horse = catalog.search(&DiseaseQuery::default().with_animal(Species::Horse));
        assert_eq!(ids(&horse), ["pneumonia", "lameness", "diarrhea"]);

        let pig_fever = catalog.search(&DiseaseQuery::term("fever").with_animal(Species::Pig));
        assert_eq!(ids(&pig_fever), ["fmd", "pneumonia"]);

        assert!(catalog
            .search(&DiseaseQuery::default().with_animal(Species::Cat))
            .is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.disease("bloat").unwrap().name, "Bloat");
        assert!(matches!(
            catalog.disease("rabies"),
            Err(CatalogError::DiseaseNotFound(id)) if id == "rabies"
        ));

        let choke = catalog.emergency("choke").unwrap();
        assert_eq!(choke.urgency, Urgency::Urgent);
        assert_eq!(choke.timeframe, "2 hours");
        assert!(catalog.emergency("unknown").is_err());
    }

    #[test]
    fn test_critical_emergencies() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.emergencies().len(), 6);
        let critical = catalog.critical_emergencies();
        assert_eq!(critical.len(), 5);
        assert!(critical.iter().all(|e| e.id != "choke"));
    }

    proptest! {
        #[test]
        fn prop_search_is_subset_in_catalog_order(term in "[a-z ]{0,8}") {
            let catalog = Catalog::builtin();
            let found = catalog.search(&DiseaseQuery::term(term));
            let positions: Vec<_> = found
                .iter()
                .map(|d| catalog.diseases().iter().position(|c| c.id == d.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
