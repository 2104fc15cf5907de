//! Livestock Knowledge Base
//!
//! Read-only reference data shown next to the diagnosis form: the common
//! disease database and the emergency guide.

mod catalog;
mod disease;
mod emergency;

pub use catalog::{Catalog, DiseaseQuery};
pub use disease::{DiseaseEntry, Severity};
pub use emergency::{EmergencyCondition, Urgency};

use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Disease not found: {0}")]
    DiseaseNotFound(String),
    #[error("Emergency not found: {0}")]
    EmergencyNotFound(String),
}
