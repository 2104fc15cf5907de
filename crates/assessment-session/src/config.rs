//! Session configuration

use crate::SessionError;
use case_intake::IntakeConfig;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long the form shows "Analyzing..." before the result (ms)
    pub analysis_delay_ms: u64,

    /// Form validation settings
    pub intake: IntakeConfig,

    /// Rule file; the built-in table is used when unset
    pub rules_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 2000,
            intake: IntakeConfig::default(),
            rules_path: None,
        }
    }
}

impl SessionConfig {
    /// Load from an optional file, then `VETASSIST_*` environment overrides
    /// (nested keys separated by `__`, e.g. `VETASSIST_INTAKE__OBSERVATION_SLOTS`)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        info!("Loading session config from {}", path.display());
        let config = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("VETASSIST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Parse TOML text without environment overrides
    pub fn from_toml_str(text: &str) -> Result<Self, SessionError> {
        let config = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Instant results, for tests and batch use
    pub fn immediate() -> Self {
        Self {
            analysis_delay_ms: 0,
            ..Default::default()
        }
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests that call `load` read the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.analysis_delay(), Duration::from_secs(2));
        assert_eq!(config.intake.observation_slots, 3);
        assert!(config.rules_path.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SessionConfig::from_toml_str(
            "analysis_delay_ms = 500\n[intake]\nobservation_slots = 4\nage_range = [0.0, 40.0]\n",
        )
        .unwrap();
        assert_eq!(config.analysis_delay_ms, 500);
        assert_eq!(config.intake.observation_slots, 4);
        assert_eq!(config.intake.age_range, (0.0, 40.0));
        assert!(config.rules_path.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = SessionConfig::load("does-not-exist/vetassist.toml").unwrap();
        assert_eq!(config.intake.observation_slots, 3);
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("VETASSIST_ANALYSIS_DELAY_MS", "750");
        std::env::set_var("VETASSIST_INTAKE__OBSERVATION_SLOTS", "5");

        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/vetassist.toml");
        let loaded = SessionConfig::load(path);

        std::env::remove_var("VETASSIST_ANALYSIS_DELAY_MS");
        std::env::remove_var("VETASSIST_INTAKE__OBSERVATION_SLOTS");

        let config = loaded.unwrap();
        assert_eq!(config.analysis_delay(), Duration::from_millis(750));
        assert_eq!(config.intake.observation_slots, 5);
        assert_eq!(config.intake.age_range, (0.0, f64::INFINITY));
    }

    #[test]
    fn test_shipped_config_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/vetassist.toml");
        let config = SessionConfig::from_toml_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(config.analysis_delay_ms, 2000);
        assert_eq!(config.intake.observation_slots, 3);
    }
}
