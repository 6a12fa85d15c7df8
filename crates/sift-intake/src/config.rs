//! Configuration for batch processing
//!
//! Controls the simulated upload pacing, preview length and the per-file
//! extraction timeout.

use crate::IntakeError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the batch processor
///
/// # Examples
///
/// ```
/// use sift_intake::ProcessorConfig;
///
/// // Default: 100ms per 10% upload tick
/// let config = ProcessorConfig::default();
/// assert_eq!(config.tick_interval_ms, 100);
///
/// // Instant: no pacing, for tests and scripted runs
/// let config = ProcessorConfig::instant();
/// assert_eq!(config.tick_interval_ms, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Delay before each upload progress tick (in milliseconds)
    /// Default: 100
    pub tick_interval_ms: u64,

    /// Progress increment per tick (percent)
    /// Default: 10
    pub progress_step: u8,

    /// Characters kept in the preview of a completed file
    /// Default: 200
    pub preview_chars: usize,

    /// Maximum time for one file's extraction (in seconds)
    /// Default: 120
    pub file_timeout_secs: u64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            progress_step: 10,
            preview_chars: 200,
            file_timeout_secs: 120,
        }
    }
}

impl ProcessorConfig {
    /// Default settings without upload pacing
    pub fn instant() -> Self {
        Self {
            tick_interval_ms: 0,
            ..Self::default()
        }
    }

    /// Get the tick interval as Duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Get the per-file timeout as Duration
    pub fn file_timeout(&self) -> Duration {
        Duration::from_secs(self.file_timeout_secs)
    }

    /// Progress values visited during upload, ending at 100
    pub fn progress_steps(&self) -> Vec<u8> {
        let step = self.progress_step.max(1);
        let mut steps: Vec<u8> = (0..=100u8).step_by(step as usize).collect();
        if steps.last() != Some(&100) {
            steps.push(100);
        }
        steps
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.progress_step == 0 || self.progress_step > 100 {
            return Err(IntakeError::Config(
                "progress_step must be between 1 and 100".to_string(),
            ));
        }
        if self.file_timeout_secs == 0 {
            return Err(IntakeError::Config(
                "file_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, IntakeError> {
        toml::from_str(toml_str)
            .map_err(|e| IntakeError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, IntakeError> {
        toml::to_string_pretty(self)
            .map_err(|e| IntakeError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
