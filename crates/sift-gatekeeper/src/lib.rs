//! Sift Gatekeeper
//!
//! Decides whether a submitted file may enter the processing pipeline.
//!
//! The Gatekeeper provides:
//! - MIME type allow-list checking (basic or extended Office set)
//! - Size ceiling enforcement (10 MiB)
//!
//! Validation is pure: the same descriptor always gets the same decision.
//!
//! # Examples
//!
//! ```
//! use sift_domain::FileDescriptor;
//! use sift_gatekeeper::{Gatekeeper, ValidationConfig, ValidationStatus};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::basic());
//! let descriptor = FileDescriptor {
//!     name: "report.pdf".to_string(),
//!     size_bytes: 4096,
//!     mime_type: "application/pdf".to_string(),
//!     last_modified_ms: 0,
//! };
//!
//! assert_eq!(gatekeeper.validate(&descriptor).status, ValidationStatus::Accepted);
//! ```

#![warn(missing_docs)]

mod validator;
mod error;
mod config;

pub use validator::{Gatekeeper, ValidationResult, ValidationStatus, RejectionReason};
pub use error::GatekeeperError;
pub use config::{ValidationConfig, DEFAULT_MAX_SIZE_BYTES, BASIC_MIME_TYPES, OFFICE_MIME_TYPES};
