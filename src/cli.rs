use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Run summary format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl From<SummaryFormat> for OutputFormat {
    fn from(format: SummaryFormat) -> Self {
        match format {
            SummaryFormat::Text => Self::Text,
            SummaryFormat::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hepplot")]
#[command(author, version, about = "Render event-generator histogram tables into a multi-page report")]
#[command(long_about = "Reads out03plot-0.dat .. out03plot-5.dat and writes a four-page \
    HTML/SVG report (one chart per printed page).\n\n\
    Exit codes:\n  \
    0 - Report written\n  \
    1 - Missing or malformed input table\n  \
    2 - Configuration or output error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the run summary and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory containing the input tables
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Output document path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a layout configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files and use the built-in layout
    #[arg(long)]
    pub no_config: bool,

    /// Run summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SummaryFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
