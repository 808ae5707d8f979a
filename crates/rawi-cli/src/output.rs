//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rawi_domain::IndexEntry;
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
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

    /// Format a list of index entries.
    pub fn format_entries(&self, entries: &[IndexEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Table => self.format_entries_table(entries),
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|e| e.identifier.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_entries_table(&self, entries: &[IndexEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok(self.colorize("No authors found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Identifier", "Full Name", "Birth", "Death", "Era"]);

        for entry in entries {
            builder.push_record([
                entry.identifier.clone(),
                entry.full_name.clone().unwrap_or_default(),
                entry.birth_year.map(|y| y.to_string()).unwrap_or_default(),
                entry.death_year.map(|y| y.to_string()).unwrap_or_default(),
                entry.era.clone().unwrap_or_default(),
            ]);
        }

        let table = builder
            .build()
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        Ok(table)
    }

    /// Format a full record as canonical JSON.
    pub fn format_record(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(message, "yellow")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(message, "red")
    }

    /// Format an informational message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "cyan")
    }

    fn colorize(&self, message: &str, color: &str) -> String {
        if !self.color_enabled {
            return message.to_string();
        }
        match color {
            "green" => message.green().to_string(),
            "yellow" => message.yellow().to_string(),
            "red" => message.red().to_string(),
            "cyan" => message.cyan().to_string(),
            _ => message.to_string(),
        }
    }
}
