//! Error types for batch processing

use sift_domain::InvalidTransition;
use thiserror::Error;

/// Errors that can occur while setting up or running a batch
///
/// Per-file failures are not errors here: they end up as `Error` records.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An observer could not be notified
    #[error("Observer error: {0}")]
    Observer(String),

    /// A record was asked to make an illegal status change
    #[error("Invalid status transition: {0}")]
    Transition(#[from] InvalidTransition),
}
