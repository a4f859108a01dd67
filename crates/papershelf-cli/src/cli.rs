//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Papershelf - classify and file a directory of PDF papers.
///
/// Scans the inbox for PDFs, classifies each one against the rubric via
/// the Gemini API, moves it into a category directory under the archive
/// root, and appends a record to the JSON catalog.
#[derive(Debug, Parser)]
#[command(name = "papershelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Inbox directory to scan for new PDFs
    #[arg(short, long)]
    pub inbox: Option<PathBuf>,

    /// Archive root directory
    #[arg(short, long)]
    pub archive: Option<PathBuf>,

    /// Catalog file path
    #[arg(short = 'c', long)]
    pub catalog: Option<PathBuf>,

    /// Base URL for rendered reference links
    #[arg(long)]
    pub base_url: Option<String>,

    /// Gemini model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// File containing a replacement rubric prompt
    #[arg(long)]
    pub rubric: Option<PathBuf>,

    /// Per-document classification timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["papershelf"]);
        assert!(cli.inbox.is_none());
        assert!(cli.model.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "papershelf",
            "--inbox",
            "incoming",
            "--archive",
            "filed",
            "--model",
            "gemini-3-flash-preview",
            "--timeout-secs",
            "300",
            "--no-color",
        ]);
        assert_eq!(cli.inbox.unwrap(), PathBuf::from("incoming"));
        assert_eq!(cli.archive.unwrap(), PathBuf::from("filed"));
        assert_eq!(cli.model.as_deref(), Some("gemini-3-flash-preview"));
        assert_eq!(cli.timeout_secs, Some(300));
        assert!(cli.no_color);
    }
}
