//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use sift_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which extraction strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Local text and PDF parsing, no network
    #[default]
    Local,
    /// Remote generative model with local fallback
    Remote,
}

impl StrategyKind {
    /// Lowercase name used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Local => "local",
            StrategyKind::Remote => "remote",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(StrategyKind::Local),
            "remote" => Ok(StrategyKind::Remote),
            other => Err(ExtractorError::Config(format!("unknown strategy '{}'", other))),
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Strategy used for every file
    pub strategy: StrategyKind,

    /// Generative model name for the remote strategy
    pub model: String,

    /// Base URL of the generative-language API
    pub api_base: String,

    /// Maximum time for a single remote call (seconds)
    pub request_timeout_secs: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Local,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ExtractorConfig {
    /// Default settings with the remote strategy selected
    pub fn remote() -> Self {
        Self {
            strategy: StrategyKind::Remote,
            ..Self::default()
        }
    }

    /// Get the remote request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.model.trim().is_empty() {
            return Err(ExtractorError::Config("model must not be empty".to_string()));
        }
        if self.api_base.trim().is_empty() {
            return Err(ExtractorError::Config("api_base must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ExtractorError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
