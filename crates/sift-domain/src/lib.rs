//! Sift Domain Layer
//!
//! Core data model and trait interfaces shared by every Sift crate.
//!
//! ## Key Concepts
//!
//! - **FileRecord**: one entry per submitted file, mutated in place as it moves
//!   through the pipeline
//! - **FileStatus**: lifecycle `idle → uploading → processing → completed | error`
//! - **ExtractionResult**: text plus metadata produced by an extractor,
//!   consumed immediately into a record's preview
//! - **Extractor** / **ContentGenerator**: the seams where strategies and
//!   remote backends plug in
//!
//! ## Architecture
//!
//! - No I/O and no runtime dependency
//! - Serializable model (records are emitted as JSON by the CLI)
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod extraction;
pub mod file;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use extraction::{
    now_millis, DocumentMetadata, ExtractionResult, ExtractionSummary, ProcessingStats,
    StructuredData, StructuredMetadata,
};
pub use file::{FileDescriptor, FileId, FileRecord, InvalidTransition, RawFile};
pub use status::FileStatus;
