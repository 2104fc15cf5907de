//! Emergency guide

use serde::{Deserialize, Serialize};

/// How quickly help is needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    /// Call a veterinarian immediately
    Critical,
    /// Needs attention within hours
    Urgent,
}

/// Emergency condition with first-response steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyCondition {
    pub id: String,
    pub name: String,
    pub symptoms: Vec<String>,
    pub immediate_actions: Vec<String>,
    /// Window in which a veterinarian should be reached
    pub timeframe: String,
    pub urgency: Urgency,
}

fn condition(
    id: &str,
    name: &str,
    symptoms: &[&str],
    immediate_actions: &[&str],
    timeframe: &str,
    urgency: Urgency,
) -> EmergencyCondition {
    EmergencyCondition {
        id: id.to_string(),
        name: name.to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        immediate_actions: immediate_actions.iter().map(|s| s.to_string()).collect(),
        timeframe: timeframe.to_string(),
        urgency,
    }
}

pub(crate) fn builtin_emergencies() -> Vec<EmergencyCondition> {
    vec![
        condition(
            "bloat",
            "Bloat (Acute)",
            &[
                "Severely distended left side of abdomen",
                "Difficulty breathing",
                "Excessive drooling",
                "Restlessness or collapse",
                "Blue or pale gums",
            ],
            &[
                "Call veterinarian IMMEDIATELY",
                "Keep animal standing if possible",
                "Do NOT give oral medications",
                "Remove from pasture",
                "Monitor breathing closely",
            ],
            "30 minutes",
            Urgency::Critical,
        ),
        condition(
            "dystocia",
            "Difficult Birth (Dystocia)",
            &[
                "Labor for more than 2 hours without progress",
                "Visible part of calf/lamb but no progress for 30 minutes",
                "Abnormal presentation",
                "Exhausted mother",
                "Green/brown discharge before birth",
            ],
            &[
                "Call veterinarian immediately",
                "Wash hands and arms thoroughly",
                "Gentle examination only",
                "Do NOT pull aggressively",
                "Keep mother calm and comfortable",
            ],
            "1 hour",
            Urgency::Critical,
        ),
        condition(
            "choke",
            "Choking/Esophageal Obstruction",
            &[
                "Difficulty swallowing",
                "Excessive salivation",
                "Neck extension",
                "Coughing or retching",
                "Food/water coming from nose",
            ],
            &[
                "Remove all feed and water",
                "Call veterinarian",
                "Do NOT attempt to push object down",
                "Keep animal calm",
                "Monitor for bloat development",
            ],
            "2 hours",
            Urgency::Urgent,
        ),
        condition(
            "severe-colic",
            "Severe Colic (Horses)",
            &[
                "Rolling or thrashing",
                "Pawing at ground",
                "Looking at flanks",
                "Sweating profusely",
                "Elevated heart rate (>60 bpm)",
            ],
            &[
                "Call veterinarian immediately",
                "Remove all feed",
                "Walk horse gently if safe",
                "Prevent rolling if possible",
                "Monitor vital signs",
            ],
            "1 hour",
            Urgency::Critical,
        ),
        condition(
            "hypocalcemia",
            "Milk Fever (Hypocalcemia)",
            &[
                "Weakness and inability to stand",
                "Cold ears and legs",
                "S-shaped neck curve",
                "Muscle tremors",
                "Rapid heart rate",
            ],
            &[
                "Call veterinarian immediately",
                "Keep animal warm and comfortable",
                "Provide soft bedding",
                "Do NOT give oral calcium",
                "Monitor breathing",
            ],
            "2 hours",
            Urgency::Critical,
        ),
        condition(
            "severe-bleeding",
            "Severe Bleeding",
            &[
                "Continuous heavy bleeding",
                "Pale gums",
                "Weakness or collapse",
                "Rapid breathing",
                "Cold extremities",
            ],
            &[
                "Apply direct pressure to wound",
                "Call veterinarian immediately",
                "Keep animal calm and still",
                "Do NOT remove embedded objects",
                "Monitor for shock signs",
            ],
            "30 minutes",
            Urgency::Critical,
        ),
    ]
}
