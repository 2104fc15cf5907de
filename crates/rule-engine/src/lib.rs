//! Diagnosis Rule Engine
//!
//! Maps free-text symptom observations to the first matching diagnostic
//! rule, or to a generic assessment when nothing matches.

mod case;
mod engine;
mod error;
mod rules;
mod species;
mod table;

pub use case::Case;
pub use engine::DiagnosisEngine;
pub use error::RuleError;
pub use rules::{DiagnosisResult, Rule};
pub use species::{Species, UnknownSpecies};
pub use table::RuleTable;
