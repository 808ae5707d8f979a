//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rawi - extract structured author biographies from Arabic PDFs.
#[derive(Debug, Parser)]
#[command(name = "rawi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Storage directory for records and the index
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => Self::Table,
            CliFormat::Json => Self::Json,
            CliFormat::Quiet => Self::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract author records from a PDF document
    Extract(ExtractArgs),

    /// Show the stored record for one author identifier
    Get(GetArgs),

    /// Search the index by identifier or full name
    Search(SearchArgs),

    /// List every indexed author
    List,

    /// Export all stored records to a single JSON file
    Export(ExportArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Path to the PDF document
    pub pdf: PathBuf,

    /// Generation service API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Generation model to use
    #[arg(long)]
    pub model: Option<String>,

    /// Write the aggregate export of this run to this path
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write per-author .txt/.json artifacts into this directory
    #[arg(long)]
    pub artifacts: Option<PathBuf>,
}

/// Arguments for the get command.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Author identifier ("<ordinal> - <name>")
    pub identifier: String,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Term matched case-insensitively against identifier or full name
    pub term: String,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Destination file for the merged JSON object
    pub destination: PathBuf,
}
