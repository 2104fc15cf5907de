//! Diagnosis Session Implementation

use crate::config::SessionConfig;
use crate::report::DiagnosisReport;
use crate::SessionError;
use case_intake::{CaseForm, IntakeValidator};
use rule_engine::{Case, DiagnosisEngine, RuleTable};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// What the form is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    /// Nothing submitted
    Idle,
    /// Submission accepted, result not yet shown
    Analyzing,
    /// Result panel visible
    Complete,
}

/// Snapshot for rendering
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub form: CaseForm,
    pub diagnosis: Option<DiagnosisReport>,
}

/// Scheduled completion that a reset can still cancel
struct PendingAnalysis {
    submission_id: Uuid,
    task: JoinHandle<()>,
}

struct SessionState {
    form: CaseForm,
    active_case: Option<Case>,
    report: Option<DiagnosisReport>,
    pending: Option<PendingAnalysis>,
    /// Bumped by every submit and reset; a completion only applies if it
    /// still carries the current value.
    generation: u64,
}

/// Handle returned for an accepted submission
#[derive(Debug)]
pub struct SubmissionHandle {
    submission_id: Uuid,
    outcome: oneshot::Receiver<DiagnosisReport>,
}

impl SubmissionHandle {
    pub fn submission_id(&self) -> Uuid {
        self.submission_id
    }

    /// Wait for the analysis; `None` if it was cancelled by a reset
    pub async fn outcome(self) -> Option<DiagnosisReport> {
        self.outcome.await.ok()
    }
}

/// One diagnosis form and its in-flight analysis
pub struct DiagnosisSession {
    engine: DiagnosisEngine,
    validator: IntakeValidator,
    config: SessionConfig,
    state: Arc<Mutex<SessionState>>,
}

impl DiagnosisSession {
    /// Create a session around an existing engine
    pub fn new(engine: DiagnosisEngine, config: SessionConfig) -> Self {
        info!(
            "Creating diagnosis session: {} rules, {}ms analysis delay",
            engine.table().len(),
            config.analysis_delay_ms
        );
        let validator = IntakeValidator::new(config.intake.clone());
        let state = SessionState {
            form: validator.blank_form(),
            active_case: None,
            report: None,
            pending: None,
            generation: 0,
        };

        Self {
            engine,
            validator,
            config,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Create a session, loading the rule table named in the config
    pub fn from_config(config: SessionConfig) -> Result<Self, SessionError> {
        let table = match &config.rules_path {
            Some(path) => RuleTable::from_file(path)?,
            None => RuleTable::builtin(),
        };
        Ok(Self::new(DiagnosisEngine::new(table), config))
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionState>, SessionError> {
        self.state
            .lock()
            .map_err(|e| SessionError::StatePoisoned(e.to_string()))
    }

    /// Select the species
    pub fn set_species(&self, species: impl Into<String>) -> Result<(), SessionError> {
        self.lock()?.form.species = species.into();
        Ok(())
    }

    /// Enter the age in years
    pub fn set_age(&self, age: impl Into<String>) -> Result<(), SessionError> {
        self.lock()?.form.age = age.into();
        Ok(())
    }

    /// Fill one symptom field
    pub fn set_observation(&self, index: usize, text: impl Into<String>) -> Result<(), SessionError> {
        self.lock()?.form.set_observation(index, text)?;
        Ok(())
    }

    /// Attach a photo
    pub fn attach_image(&self, file_name: impl Into<String>) -> Result<(), SessionError> {
        self.lock()?.form.attach_image(file_name);
        Ok(())
    }

    /// Submit the form.
    ///
    /// The case is evaluated immediately, but the report is only applied
    /// after the configured delay. Outside a Tokio runtime the submission
    /// is refused and the session is left untouched.
    pub fn submit(&self) -> Result<SubmissionHandle, SessionError> {
        let runtime = Handle::try_current().map_err(|e| {
            warn!("Submission rejected: {}", e);
            SessionError::NoRuntime
        })?;
        let mut state = self.lock()?;

        if let Some(pending) = &state.pending {
            warn!("Submission rejected: analysis {} still pending", pending.submission_id);
            return Err(SessionError::AnalysisInProgress);
        }

        let case = self.validator.build_case(&state.form)?;
        let result = self.engine.evaluate(&case);
        let submission_id = Uuid::new_v4();
        debug!("Submission {} evaluated to '{}'", submission_id, result.disease_name);

        state.generation += 1;
        let generation = state.generation;
        state.active_case = Some(case.clone());
        state.report = None;

        let (tx, rx) = oneshot::channel();
        let shared = Arc::clone(&self.state);
        let delay = self.config.analysis_delay();

        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let report = DiagnosisReport::new(submission_id, case, result);
            complete(&shared, generation, report, tx);
        });

        state.pending = Some(PendingAnalysis {
            submission_id,
            task,
        });
        info!("Submission {} accepted, analyzing", submission_id);

        Ok(SubmissionHandle {
            submission_id,
            outcome: rx,
        })
    }

    /// Clear the form and any result, cancelling a pending analysis
    pub fn reset(&self) -> Result<(), SessionError> {
        let mut state = self.lock()?;

        state.generation += 1;
        if let Some(pending) = state.pending.take() {
            pending.task.abort();
            warn!("Analysis {} cancelled by reset", pending.submission_id);
        }
        state.form.clear();
        state.active_case = None;
        state.report = None;

        info!("Session reset");
        Ok(())
    }

    /// Snapshot of the form and result panel
    pub fn view(&self) -> Result<SessionView, SessionError> {
        let state = self.lock()?;
        let phase = if state.pending.is_some() {
            SessionPhase::Analyzing
        } else if state.report.is_some() {
            SessionPhase::Complete
        } else {
            SessionPhase::Idle
        };

        Ok(SessionView {
            phase,
            form: state.form.clone(),
            diagnosis: state.report.clone(),
        })
    }

    /// Case behind the current submission, if any
    pub fn active_case(&self) -> Result<Option<Case>, SessionError> {
        Ok(self.lock()?.active_case.clone())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Drop for DiagnosisSession {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some(pending) = state.pending.take() {
                pending.task.abort();
            }
        }
    }
}

/// Apply a finished analysis unless a newer submit or reset superseded it
fn complete(
    state: &Mutex<SessionState>,
    generation: u64,
    report: DiagnosisReport,
    tx: oneshot::Sender<DiagnosisReport>,
) {
    let mut state = match state.lock() {
        Ok(state) => state,
        Err(e) => {
            error!("Dropping analysis {}: {}", report.submission_id, e);
            return;
        }
    };

    if state.generation != generation {
        warn!("Discarding stale analysis {}", report.submission_id);
        return;
    }

    state.pending = None;
    state.report = Some(report.clone());
    info!(
        "Analysis {} complete: {} ({}% confidence)",
        report.submission_id, report.result.disease_name, report.result.confidence
    );

    // Receiver may already be gone; the report is applied either way
    let _ = tx.send(report);
}
