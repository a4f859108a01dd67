//! Output formatting for the CLI.

use colored::*;
use papershelf_ingest::{DocumentStatus, IngestReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// One status line per processed document.
    pub fn status_line(&self, filename: &str, status: &DocumentStatus) -> String {
        match status {
            DocumentStatus::Recorded { category } => {
                self.colorize(&format!("✓ {} → {}", filename, category), "green")
            }
            DocumentStatus::Skipped => {
                self.colorize(&format!("- {} already cataloged", filename), "yellow")
            }
            DocumentStatus::Failed { reason, detail } => {
                self.colorize(&format!("✗ {} [{}] {}", filename, reason, detail), "red")
            }
        }
    }

    /// Summary table of the whole run.
    pub fn report_table(&self, report: &IngestReport) -> String {
        if report.outcomes.is_empty() {
            return self.colorize("No inbound documents found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["File", "Outcome", "Category / Reason"]);

        for outcome in &report.outcomes {
            let (state, detail) = match &outcome.status {
                DocumentStatus::Recorded { category } => ("recorded", category.clone()),
                DocumentStatus::Skipped => ("skipped", "duplicate".to_string()),
                DocumentStatus::Failed { reason, .. } => ("failed", reason.to_string()),
            };
            builder.push_record([outcome.filename.as_str(), state, detail.as_str()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Final counts line.
    pub fn summary(&self, report: &IngestReport) -> String {
        let line = format!(
            "{} recorded, {} skipped, {} failed",
            report.recorded(),
            report.skipped(),
            report.failed()
        );
        if report.failed() > 0 {
            self.colorize(&line, "yellow")
        } else {
            self.colorize(&line, "green")
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}
