//! Configuration for the ingestion pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for one ingestion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Directory scanned for inbound PDFs
    pub inbox_dir: PathBuf,

    /// Root of the categorized archive tree
    pub archive_dir: PathBuf,

    /// Catalog file path
    pub catalog_path: PathBuf,

    /// Base URL the reference link is rendered under
    /// (`<base>/<category>/<filename>`)
    pub reference_base_url: String,

    /// Replacement rubric prompt; None uses the built-in rubric
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<String>,

    /// Per-document classification time budget in seconds; None means no
    /// internal timeout (expiry is treated as a service error for that
    /// document)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl IngestConfig {
    /// Per-document timeout as a Duration, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.reference_base_url.trim().is_empty() {
            return Err("reference_base_url must not be empty".to_string());
        }
        if let Some(0) = self.timeout_secs {
            return Err("timeout_secs must be greater than 0 when set".to_string());
        }
        if let Some(rubric) = &self.rubric {
            if rubric.trim().is_empty() {
                return Err("rubric must not be empty when set".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for IngestConfig {
    /// Defaults matching the layout the tool has always used: `inbox/`
    /// feeding a `papers/` archive and a version-controlled
    /// `data/papers.json` catalog.
    fn default() -> Self {
        Self {
            inbox_dir: PathBuf::from("inbox"),
            archive_dir: PathBuf::from("papers"),
            catalog_path: PathBuf::from("data/papers.json"),
            reference_base_url:
                "https://github.com/ai-sales-agent-25/VLA-RL-Papers/blob/main/papers".to_string(),
            rubric: None,
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = IngestConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_zero_timeout_invalid() {
        let mut config = IngestConfig::default();
        config.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_invalid() {
        let mut config = IngestConfig::default();
        config.reference_base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_rubric_invalid() {
        let mut config = IngestConfig::default();
        config.rubric = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = IngestConfig::default();
        config.timeout_secs = Some(300);

        let toml_str = config.to_toml().unwrap();
        let parsed = IngestConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.inbox_dir, parsed.inbox_dir);
        assert_eq!(config.archive_dir, parsed.archive_dir);
        assert_eq!(config.catalog_path, parsed.catalog_path);
        assert_eq!(config.reference_base_url, parsed.reference_base_url);
        assert_eq!(config.timeout_secs, parsed.timeout_secs);
    }
}
