//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
///
/// Rejections are ordinary [`ValidationResult`](crate::ValidationResult)
/// values; this type only covers a misconfigured gatekeeper.
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
