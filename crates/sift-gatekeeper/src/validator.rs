//! File validation logic

use crate::ValidationConfig;
use sift_domain::FileDescriptor;
use std::fmt;

const MIB: u64 = 1024 * 1024;

/// Result of file validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the file passed validation
    pub status: ValidationStatus,

    /// Rejection reason (if any)
    pub reason: Option<RejectionReason>,
}

impl ValidationResult {
    fn accepted() -> Self {
        Self {
            status: ValidationStatus::Accepted,
            reason: None,
        }
    }

    fn rejected(reason: RejectionReason) -> Self {
        Self {
            status: ValidationStatus::Rejected,
            reason: Some(reason),
        }
    }

    /// Whether the file was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// File accepted for processing
    Accepted,

    /// File rejected before processing
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// MIME type is not on the allow-list
    UnsupportedType {
        /// Declared MIME type
        mime_type: String,
    },

    /// File exceeds the size ceiling
    TooLarge {
        /// Declared size
        size_bytes: u64,
        /// Configured ceiling
        max_bytes: u64,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::UnsupportedType { .. } => write!(f, "Invalid file type"),
            RejectionReason::TooLarge { max_bytes, .. } if max_bytes % MIB == 0 => {
                write!(f, "File size exceeds {}MB limit", max_bytes / MIB)
            }
            RejectionReason::TooLarge { max_bytes, .. } => {
                write!(f, "File size exceeds {} byte limit", max_bytes)
            }
        }
    }
}

/// The Gatekeeper decides accept/reject before any processing starts
///
/// Validation is a pure function of the descriptor and the configuration.
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with the basic allow-list
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a file descriptor
    ///
    /// The type check runs first, so an unsupported file that is also too
    /// large reports the type rejection.
    pub fn validate(&self, descriptor: &FileDescriptor) -> ValidationResult {
        if !self.config.allows(&descriptor.mime_type) {
            return ValidationResult::rejected(RejectionReason::UnsupportedType {
                mime_type: descriptor.mime_type.clone(),
            });
        }

        if descriptor.size_bytes > self.config.max_size_bytes {
            return ValidationResult::rejected(RejectionReason::TooLarge {
                size_bytes: descriptor.size_bytes,
                max_bytes: self.config.max_size_bytes,
            });
        }

        ValidationResult::accepted()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::DEFAULT_MAX_SIZE_BYTES;
    use proptest::prelude::*;

    proptest! {
        /// Property: validating the same descriptor twice gives the same decision
        #[test]
        fn test_validation_idempotent(
            mime_idx in 0usize..5,
            size_bytes in 0u64..(20 * 1024 * 1024),
        ) {
            let mimes = ["text/csv", "application/pdf", "text/plain", "image/png", ""];
            let gatekeeper = Gatekeeper::new(ValidationConfig::extended());
            let descriptor = FileDescriptor {
                name: "f".to_string(),
                size_bytes,
                mime_type: mimes[mime_idx].to_string(),
                last_modified_ms: 0,
            };

            let first = gatekeeper.validate(&descriptor);
            let second = gatekeeper.validate(&descriptor);
            prop_assert_eq!(first, second);
        }

        /// Property: any allowed type is accepted iff within the ceiling
        #[test]
        fn test_size_ceiling(size_bytes: u64) {
            let gatekeeper = Gatekeeper::default_config();
            let descriptor = FileDescriptor {
                name: "f.csv".to_string(),
                size_bytes,
                mime_type: "text/csv".to_string(),
                last_modified_ms: 0,
            };
            let accepted = gatekeeper.validate(&descriptor).is_accepted();
            prop_assert_eq!(accepted, size_bytes <= DEFAULT_MAX_SIZE_BYTES);
        }
    }
}
