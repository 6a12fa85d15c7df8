//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};

/// Size ceiling shared by every preset: 10 MiB
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted by the basic allow-list
pub const BASIC_MIME_TYPES: &[&str] = &["text/csv", "application/pdf", "text/plain"];

/// Office formats added by the extended allow-list
pub const OFFICE_MIME_TYPES: &[&str] = &[
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Accepted MIME types (exact match)
    pub allowed_mime_types: Vec<String>,

    /// Largest accepted file, in bytes
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: u64,
}

fn default_max_size_bytes() -> u64 {
    DEFAULT_MAX_SIZE_BYTES
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::basic()
    }
}

impl ValidationConfig {
    /// Plain text, CSV and PDF
    pub fn basic() -> Self {
        Self {
            allowed_mime_types: BASIC_MIME_TYPES.iter().map(|s| s.to_string()).collect(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }

    /// Basic set plus Word, Excel and PowerPoint (legacy and OOXML)
    pub fn extended() -> Self {
        Self {
            allowed_mime_types: BASIC_MIME_TYPES
                .iter()
                .chain(OFFICE_MIME_TYPES.iter())
                .map(|s| s.to_string())
                .collect(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }

    /// Whether a MIME type is on the allow-list
    pub fn allows(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|t| t == mime_type)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.allowed_mime_types.is_empty() {
            return Err(GatekeeperError::Config(
                "allowed_mime_types must not be empty".to_string(),
            ));
        }
        if self.max_size_bytes == 0 {
            return Err(GatekeeperError::Config(
                "max_size_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_basic() {
        assert_eq!(ValidationConfig::default(), ValidationConfig::basic());
    }

    #[test]
    fn test_basic_config() {
        let config = ValidationConfig::basic();
        assert_eq!(config.allowed_mime_types.len(), 3);
        assert!(config.allows("text/csv"));
        assert!(!config.allows("application/msword"));
        assert_eq!(config.max_size_bytes, 10_485_760);
    }

    #[test]
    fn test_extended_config() {
        let config = ValidationConfig::extended();
        assert_eq!(config.allowed_mime_types.len(), 9);
        assert!(config.allows("application/pdf"));
        assert!(config.allows(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ));
        assert_eq!(config.max_size_bytes, ValidationConfig::basic().max_size_bytes);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ValidationConfig::basic().validate().is_ok());
        assert!(ValidationConfig::extended().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let mut config = ValidationConfig::basic();
        config.allowed_mime_types.clear();
        assert!(config.validate().is_err());

        let mut config = ValidationConfig::basic();
        config.max_size_bytes = 0;
        assert!(config.validate().is_err());
    }
}
