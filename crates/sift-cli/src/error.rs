//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Validation rules are unusable
    #[error(transparent)]
    Gatekeeper(#[from] sift_gatekeeper::GatekeeperError),

    /// Extractor could not be set up
    #[error(transparent)]
    Extractor(#[from] sift_extractor::ExtractorError),

    /// Batch processor could not be set up
    #[error(transparent)]
    Intake(#[from] sift_intake::IntakeError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
