//! Status module - lifecycle stages for a file record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a file in the processing pipeline
///
/// Records move forward only:
/// - Idle: registered at intake, waiting for its turn
/// - Uploading: simulated transfer, progress ticks 0..=100
/// - Processing: the extractor is running
/// - Completed / Error: terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Registered, not yet started
    Idle,

    /// Simulated upload in progress
    Uploading,

    /// Extraction in progress
    Processing,

    /// Extraction succeeded (terminal)
    Completed,

    /// Validation or extraction failed (terminal)
    Error,
}

impl FileStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Idle => "idle",
            FileStatus::Uploading => "uploading",
            FileStatus::Processing => "processing",
            FileStatus::Completed => "completed",
            FileStatus::Error => "error",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(FileStatus::Idle),
            "uploading" => Some(FileStatus::Uploading),
            "processing" => Some(FileStatus::Processing),
            "completed" => Some(FileStatus::Completed),
            "error" => Some(FileStatus::Error),
            _ => None,
        }
    }

    /// Whether no further transitions can occur
    pub fn is_terminal(&self) -> bool {
        matches!(self, FileStatus::Completed | FileStatus::Error)
    }

    /// Whether moving from `self` to `next` is a legal transition
    ///
    /// Validation rejects go straight from `Idle` to `Error`.
    pub fn can_transition_to(&self, next: FileStatus) -> bool {
        use FileStatus::*;
        matches!(
            (self, next),
            (Idle, Uploading)
                | (Idle, Error)
                | (Uploading, Uploading)
                | (Uploading, Processing)
                | (Uploading, Error)
                | (Processing, Completed)
                | (Processing, Error)
        )
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FileStatus; 5] = [
        FileStatus::Idle,
        FileStatus::Uploading,
        FileStatus::Processing,
        FileStatus::Completed,
        FileStatus::Error,
    ];

    #[test]
    fn test_status_parse() {
        assert_eq!(FileStatus::parse("idle"), Some(FileStatus::Idle));
        assert_eq!(FileStatus::parse("Uploading"), Some(FileStatus::Uploading));
        assert_eq!(FileStatus::parse("ERROR"), Some(FileStatus::Error));
        assert_eq!(FileStatus::parse("done"), None);
    }

    #[test]
    fn test_status_as_str_round_trip() {
        for status in ALL {
            assert_eq!(FileStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        for from in ALL.iter().filter(|s| s.is_terminal()) {
            for to in ALL {
                assert!(!from.can_transition_to(to), "{} -> {} allowed", from, to);
            }
        }
    }

    #[test]
    fn test_happy_path_is_legal() {
        assert!(FileStatus::Idle.can_transition_to(FileStatus::Uploading));
        assert!(FileStatus::Uploading.can_transition_to(FileStatus::Processing));
        assert!(FileStatus::Processing.can_transition_to(FileStatus::Completed));
    }

    #[test]
    fn test_no_skipping_upload() {
        assert!(!FileStatus::Idle.can_transition_to(FileStatus::Processing));
        assert!(!FileStatus::Idle.can_transition_to(FileStatus::Completed));
        assert!(!FileStatus::Uploading.can_transition_to(FileStatus::Completed));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&FileStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }
}
