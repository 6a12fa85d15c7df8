//! File module - the unit of work flowing through the pipeline

use crate::extraction::ExtractionSummary;
use crate::status::FileStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a file record based on UUIDv7
///
/// A fresh id is generated for every intake event, so selecting the same
/// file twice yields two distinct records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileId(u128);

impl FileId {
    /// Generate a new UUIDv7-based FileId
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_domain::FileId;
    ///
    /// let id = FileId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a FileId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a FileId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// First eight hex characters, for compact display
    pub fn short(&self) -> String {
        self.to_string()[..8].to_string()
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl From<FileId> for String {
    fn from(id: FileId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for FileId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FileId::from_string(&value)
    }
}

/// Immutable snapshot of a source file's descriptor, captured at intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    /// File name as presented by the picker
    pub name: String,

    /// Declared size in bytes
    pub size_bytes: u64,

    /// Declared MIME type (may be empty when unknown)
    pub mime_type: String,

    /// Last-modified time, milliseconds since the Unix epoch
    pub last_modified_ms: u64,
}

/// A file handed over by the presentation layer: descriptor plus content
#[derive(Debug, Clone)]
pub struct RawFile {
    /// Descriptor snapshot
    pub descriptor: FileDescriptor,

    /// Raw file content
    pub bytes: Vec<u8>,
}

impl RawFile {
    /// Build a raw file whose declared size matches its content
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        last_modified_ms: u64,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            descriptor: FileDescriptor {
                name: name.into(),
                size_bytes: bytes.len() as u64,
                mime_type: mime_type.into(),
                last_modified_ms,
            },
            bytes,
        }
    }

    /// Declared MIME type
    pub fn mime_type(&self) -> &str {
        &self.descriptor.mime_type
    }

    /// File name
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Attempted a status change the lifecycle does not allow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTransition {
    /// Status the record was in
    pub from: FileStatus,
    /// Status that was requested
    pub to: FileStatus,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status transition {} -> {}", self.from, self.to)
    }
}

impl std::error::Error for InvalidTransition {}

/// One entry per submitted file
///
/// Records are never removed; they are mutated in place as their status
/// advances. `error_message` is set only in `Error`, `preview_text` and
/// `summary` only in `Completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique identifier
    pub id: FileId,

    /// Source file descriptor
    #[serde(flatten)]
    pub descriptor: FileDescriptor,

    /// Current lifecycle status
    pub status: FileStatus,

    /// Upload progress, 0..=100
    pub progress: u8,

    /// Failure message, only in `Error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Truncated extracted text, only in `Completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<String>,

    /// Extraction metadata, only in `Completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ExtractionSummary>,
}

impl FileRecord {
    /// Create an idle record for a freshly intaked file
    pub fn new(id: FileId, descriptor: FileDescriptor) -> Self {
        Self {
            id,
            descriptor,
            status: FileStatus::Idle,
            progress: 0,
            error_message: None,
            preview_text: None,
            summary: None,
        }
    }

    fn transition(&mut self, to: FileStatus) -> Result<(), InvalidTransition> {
        if !self.status.can_transition_to(to) {
            return Err(InvalidTransition { from: self.status, to });
        }
        self.status = to;
        Ok(())
    }

    /// Enter `Uploading` with progress reset to 0
    pub fn begin_upload(&mut self) -> Result<(), InvalidTransition> {
        self.transition(FileStatus::Uploading)?;
        self.progress = 0;
        Ok(())
    }

    /// Record an upload progress tick (clamped to 100)
    pub fn set_progress(&mut self, progress: u8) -> Result<(), InvalidTransition> {
        if self.status != FileStatus::Uploading {
            return Err(InvalidTransition {
                from: self.status,
                to: FileStatus::Uploading,
            });
        }
        self.progress = progress.min(100);
        Ok(())
    }

    /// Enter `Processing`
    pub fn begin_processing(&mut self) -> Result<(), InvalidTransition> {
        self.transition(FileStatus::Processing)
    }

    /// Enter `Completed` with the preview and extraction summary
    pub fn complete(
        &mut self,
        preview_text: String,
        summary: ExtractionSummary,
    ) -> Result<(), InvalidTransition> {
        self.transition(FileStatus::Completed)?;
        self.progress = 100;
        self.preview_text = Some(preview_text);
        self.summary = Some(summary);
        self.error_message = None;
        Ok(())
    }

    /// Enter `Error` with a message
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), InvalidTransition> {
        self.transition(FileStatus::Error)?;
        self.error_message = Some(message.into());
        self.preview_text = None;
        self.summary = None;
        Ok(())
    }

    /// File name
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Size in KiB with one decimal, as shown in file lists
    pub fn size_kib(&self) -> String {
        format!("{:.1} KB", self.descriptor.size_bytes as f64 / 1024.0)
    }
}
