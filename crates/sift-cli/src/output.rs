//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sift_domain::{FileId, FileRecord, FileStatus};
use sift_intake::StatusObserver;
use std::collections::HashMap;
use std::sync::Mutex;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the final records.
    pub fn format_records(&self, records: &[FileRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_records_json(records),
            OutputFormat::Table => self.format_records_table(records),
            OutputFormat::Quiet => self.format_records_quiet(records),
        }
    }

    /// Format records as JSON.
    fn format_records_json(&self, records: &[FileRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[FileRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("No files processed.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Size", "Status", "Words", "Pages", "Details"]);

        for record in records {
            let (words, pages) = match &record.summary {
                Some(summary) => (
                    summary.word_count.to_string(),
                    summary.page_count.map(|p| p.to_string()).unwrap_or_default(),
                ),
                None => (String::new(), String::new()),
            };
            let details = match record.status {
                FileStatus::Error => record.error_message.clone().unwrap_or_default(),
                _ => record
                    .preview_text
                    .as_deref()
                    .map(|p| single_line(p, 60))
                    .unwrap_or_default(),
            };
            builder.push_record([
                record.id.short(),
                record.name().to_string(),
                record.size_kib(),
                self.status_label(record.status),
                words,
                pages,
                details,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format records in quiet mode (ID and status).
    fn format_records_quiet(&self, records: &[FileRecord]) -> Result<String> {
        let lines: Vec<String> = records
            .iter()
            .map(|r| format!("{} {}", r.id, r.status))
            .collect();
        Ok(lines.join("\n"))
    }

    /// One line describing a record's current state.
    pub fn progress_line(&self, record: &FileRecord) -> String {
        let status = self.status_label(record.status);
        match record.status {
            FileStatus::Uploading => {
                format!("{} {} {}%", status, record.name(), record.progress)
            }
            FileStatus::Error => format!(
                "{} {}: {}",
                status,
                record.name(),
                record.error_message.as_deref().unwrap_or_default()
            ),
            FileStatus::Completed => {
                let words = record.summary.as_ref().map(|s| s.word_count).unwrap_or(0);
                format!("{} {} ({} words)", status, record.name(), words)
            }
            _ => format!("{} {}", status, record.name()),
        }
    }

    /// Status name, colored by outcome.
    pub fn status_label(&self, status: FileStatus) -> String {
        let color = match status {
            FileStatus::Idle => "none",
            FileStatus::Uploading | FileStatus::Processing => "blue",
            FileStatus::Completed => "green",
            FileStatus::Error => "red",
        };
        self.colorize(status.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Collapse whitespace and cut to `max_chars` characters.
fn single_line(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > max_chars {
        let mut cut: String = flat.chars().take(max_chars).collect();
        cut.push('…');
        cut
    } else {
        flat
    }
}

/// Prints a line to stderr whenever a record changes status.
///
/// Upload progress is printed at every tick.
pub struct ProgressPrinter {
    formatter: Formatter,
    seen: Mutex<HashMap<FileId, (FileStatus, u8)>>,
}

impl ProgressPrinter {
    /// Create a printer using `formatter` for colors.
    pub fn new(formatter: Formatter) -> Self {
        Self {
            formatter,
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Lines for every record whose state changed since the last snapshot.
    pub fn changed_lines(&self, records: &[FileRecord]) -> Vec<String> {
        let mut seen = self
            .seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut lines = Vec::new();

        for record in records {
            let state = (record.status, record.progress);
            let previous = seen.insert(record.id, state);
            if previous != Some(state) {
                lines.push(self.formatter.progress_line(record));
            }
        }
        lines
    }
}

impl StatusObserver for ProgressPrinter {
    fn on_update(&self, records: &[FileRecord]) {
        for line in self.changed_lines(records) {
            eprintln!("{}", line);
        }
    }
}
