//! Diagnosis Form Session
//!
//! Drives one diagnosis form: validates submissions, evaluates them with the
//! rule engine, and applies the result after a fixed "analyzing" delay that
//! a reset can cancel.

mod config;
mod report;
mod session;

pub use crate::config::SessionConfig;
pub use report::{DiagnosisReport, DISCLAIMER, VET_CONSULTATION_NOTICE};
pub use session::{DiagnosisSession, SessionPhase, SessionView, SubmissionHandle};

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Validation failed: {0}")]
    Validation(#[from] case_intake::ValidationError),

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("No Tokio runtime available to schedule the analysis")]
    NoRuntime,

    #[error("Rule table error: {0}")]
    Rules(#[from] rule_engine::RuleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Session state poisoned: {0}")]
    StatePoisoned(String),
}

/// Initialize logging
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
