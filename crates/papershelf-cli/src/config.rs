//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use papershelf_ingest::IngestConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration, stored at `~/.papershelf/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Inbox directory scanned for new PDFs
    #[serde(default = "default_inbox")]
    pub inbox_dir: PathBuf,

    /// Archive root directory
    #[serde(default = "default_archive")]
    pub archive_dir: PathBuf,

    /// Catalog file path
    #[serde(default = "default_catalog")]
    pub catalog_path: PathBuf,

    /// Base URL for rendered reference links
    #[serde(default = "default_base_url")]
    pub reference_base_url: String,

    /// Gemini model used for classification
    #[serde(default = "default_model")]
    pub model: String,

    /// Optional file holding a replacement rubric prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric_path: Option<PathBuf>,

    /// Per-document classification timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_inbox() -> PathBuf {
    PathBuf::from("inbox")
}

fn default_archive() -> PathBuf {
    PathBuf::from("papers")
}

fn default_catalog() -> PathBuf {
    PathBuf::from("data/papers.json")
}

fn default_base_url() -> String {
    IngestConfig::default().reference_base_url
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inbox_dir: default_inbox(),
            archive_dir: default_archive(),
            catalog_path: default_catalog(),
            reference_base_url: default_base_url(),
            model: default_model(),
            rubric_path: None,
            timeout_secs: None,
            color: true,
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".papershelf").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Apply command-line overrides on top of the file configuration.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(inbox) = &cli.inbox {
            self.inbox_dir = inbox.clone();
        }
        if let Some(archive) = &cli.archive {
            self.archive_dir = archive.clone();
        }
        if let Some(catalog) = &cli.catalog {
            self.catalog_path = catalog.clone();
        }
        if let Some(base_url) = &cli.base_url {
            self.reference_base_url = base_url.clone();
        }
        if let Some(model) = &cli.model {
            self.model = model.clone();
        }
        if let Some(rubric) = &cli.rubric {
            self.rubric_path = Some(rubric.clone());
        }
        if let Some(timeout) = cli.timeout_secs {
            self.timeout_secs = Some(timeout);
        }
        if cli.no_color {
            self.color = false;
        }
    }

    /// Build the pipeline configuration, reading the rubric file if one is
    /// configured.
    pub fn to_ingest_config(&self) -> Result<IngestConfig> {
        let rubric = match &self.rubric_path {
            Some(path) => Some(fs::read_to_string(path).map_err(|e| {
                CliError::Config(format!("Failed to read rubric {}: {}", path.display(), e))
            })?),
            None => None,
        };

        let config = IngestConfig {
            inbox_dir: self.inbox_dir.clone(),
            archive_dir: self.archive_dir.clone(),
            catalog_path: self.catalog_path.clone(),
            reference_base_url: self.reference_base_url.clone(),
            rubric,
            timeout_secs: self.timeout_secs,
        };
        config.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config_builds_valid_ingest_config() {
        let config = Config::default();
        let ingest = config.to_ingest_config().unwrap();
        assert_eq!(ingest.inbox_dir, PathBuf::from("inbox"));
        assert_eq!(ingest.catalog_path, PathBuf::from("data/papers.json"));
        assert!(ingest.rubric.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.model, config.model);
        assert_eq!(parsed.inbox_dir, config.inbox_dir);
        assert_eq!(parsed.color, config.color);
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = Config::default();
        let cli = Cli::parse_from(["papershelf", "--inbox", "incoming", "--no-color"]);
        config.apply_overrides(&cli);
        assert_eq!(config.inbox_dir, PathBuf::from("incoming"));
        assert!(!config.color);
        // Untouched fields keep their defaults
        assert_eq!(config.archive_dir, PathBuf::from("papers"));
    }

    #[test]
    fn test_rubric_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let rubric = dir.path().join("rubric.txt");
        fs::write(&rubric, "Classify into A or B. Return JSON.").unwrap();

        let mut config = Config::default();
        config.rubric_path = Some(rubric);
        let ingest = config.to_ingest_config().unwrap();
        assert_eq!(
            ingest.rubric.as_deref(),
            Some("Classify into A or B. Return JSON.")
        );
    }

    #[test]
    fn test_missing_rubric_file_is_config_error() {
        let mut config = Config::default();
        config.rubric_path = Some(PathBuf::from("/no/such/rubric.txt"));
        assert!(matches!(
            config.to_ingest_config(),
            Err(CliError::Config(_))
        ));
    }
}
