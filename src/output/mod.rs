//! Run summaries printed after a report is written, and the SVG primitives.

mod json;
pub mod svg;
mod text;

use std::path::PathBuf;

use serde::Serialize;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::PageInfo;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Config file used; `None` for the built-in layout.
    pub config: Option<PathBuf>,
    pub pages: Vec<PageInfo>,
}

/// Trait for formatting a run summary into various output formats.
pub trait OutputFormatter {
    /// Format the summary into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summary: &RunSummary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
