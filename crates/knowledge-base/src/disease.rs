//! Disease database entries

use rule_engine::Species;
use serde::{Deserialize, Serialize};

/// How serious a disease is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Disease reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseEntry {
    pub id: String,
    pub name: String,
    pub animals: Vec<Species>,
    pub symptoms: Vec<String>,
    pub severity: Severity,
    pub description: String,
    pub treatment: String,
    pub prevention: String,
}

impl DiseaseEntry {
    /// Case-insensitive match of `term` against the name or any symptom.
    /// Whitespace in the term is significant.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.symptoms.iter().any(|s| s.to_lowercase().contains(&term))
    }

    pub fn affects(&self, species: Species) -> bool {
        self.animals.contains(&species)
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    animals: &[Species],
    symptoms: &[&str],
    severity: Severity,
    description: &str,
    treatment: &str,
    prevention: &str,
) -> DiseaseEntry {
    DiseaseEntry {
        id: id.to_string(),
        name: name.to_string(),
        animals: animals.to_vec(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        severity,
        description: description.to_string(),
        treatment: treatment.to_string(),
        prevention: prevention.to_string(),
    }
}

/// The common livestock diseases
pub(crate) fn builtin_diseases() -> Vec<DiseaseEntry> {
    use Species::{Cow, Goat, Horse, Pig, Sheep};

    vec![
        entry(
            "fmd",
            "Foot-and-Mouth Disease",
            &[Cow, Pig, Sheep, Goat],
            &["Excessive salivation", "Mouth blisters", "Difficulty walking", "Fever", "Loss of appetite"],
            Severity::Critical,
            "Highly contagious viral disease affecting cloven-hoofed animals. Causes severe economic losses and is notifiable in most countries.",
            "Isolate affected animals, provide supportive care, contact veterinary authorities immediately.",
            "Vaccination, quarantine new animals, biosecurity measures, movement restrictions.",
        ),
        entry(
            "mastitis",
            "Mastitis",
            &[Cow, Goat, Sheep],
            &["Swollen udder", "Hot udder", "Reduced milk production", "Abnormal milk", "Fever"],
            Severity::High,
            "Inflammation of mammary glands, commonly caused by bacterial infection. Major cause of economic losses in dairy farming.",
            "Antibiotic therapy, anti-inflammatory drugs, frequent milking, proper hygiene.",
            "Good milking hygiene, teat dipping, dry cow therapy, proper nutrition.",
        ),
        entry(
            "pneumonia",
            "Pneumonia",
            &[Cow, Pig, Sheep, Goat, Horse],
            &["Coughing", "Difficulty breathing", "Nasal discharge", "Fever", "Loss of appetite"],
            Severity::High,
            "Respiratory infection affecting lungs. Can be caused by bacteria, viruses, or parasites.",
            "Antibiotics, anti-inflammatory drugs, supportive care, proper ventilation.",
            "Vaccination, good ventilation, reduce stress, proper nutrition, quarantine sick animals.",
        ),
        entry(
            "bloat",
            "Bloat",
            &[Cow, Sheep, Goat],
            &["Distended abdomen", "Difficulty breathing", "Restlessness", "Drooling", "Collapse"],
            Severity::Critical,
            "Accumulation of gas in rumen causing rapid distension. Can be fatal if not treated quickly.",
            "Emergency decompression, anti-foaming agents, veterinary intervention required.",
            "Gradual diet changes, avoid lush pastures, provide roughage, limit legume intake.",
        ),
        entry(
            "lameness",
            "Lameness",
            &[Cow, Horse, Sheep, Goat],
            &["Limping", "Reluctance to move", "Swelling", "Heat in hoof", "Abnormal posture"],
            Severity::Medium,
            "Impaired locomotion caused by various factors including hoof problems, injuries, or infections.",
            "Hoof trimming, antibiotics if infected, anti-inflammatory drugs, rest.",
            "Regular hoof trimming, dry bedding, proper nutrition, avoid overcrowding.",
        ),
        entry(
            "diarrhea",
            "Diarrhea",
            &[Cow, Pig, Sheep, Goat, Horse],
            &["Loose stools", "Dehydration", "Loss of appetite", "Weakness", "Abdominal pain"],
            Severity::Medium,
            "Abnormal frequency and fluidity of bowel movements. Can be caused by infections, diet, or stress.",
            "Fluid therapy, electrolyte replacement, dietary management, identify underlying cause.",
            "Good hygiene, proper nutrition, clean water, stress reduction, gradual diet changes.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_matches_name_or_symptom() {
        let diseases = builtin_diseases();
        let bloat = &diseases[3];
        assert!(bloat.matches_term("BLOAT"));
        assert!(bloat.matches_term("drool"));
        assert!(bloat.matches_term(""));
        assert!(!bloat.matches_term("udder"));
    }

    #[test]
    fn test_term_whitespace_is_significant() {
        let diseases = builtin_diseases();
        let mastitis = &diseases[1];
        assert!(mastitis.matches_term("fever"));
        assert!(!mastitis.matches_term(" fever"));
        assert!(mastitis.matches_term("hot udder"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Medium > Severity::Low);
    }
}
