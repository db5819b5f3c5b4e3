use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR};

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: column {column}: '{token}' is not a number")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
    },

    #[error("{path}:{line}: expected {expected} columns, found {found}")]
    ColumnCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Failed to write report: {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report document is already closed")]
    DocumentClosed,

    #[error("Cannot finalize an empty page: add at least one series first")]
    EmptyPage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PlotError {
    /// Coarse category used in logs and the JSON run summary.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Parse { .. } | Self::ColumnCount { .. } => "Parse",
            Self::OutputWrite { .. } | Self::DocumentClosed | Self::EmptyPage => "Output",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Process exit code for this error.
    ///
    /// Missing or malformed input tables map to [`EXIT_INPUT_ERROR`]; everything
    /// else (configuration, output document) maps to [`EXIT_CONFIG_ERROR`].
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::FileRead { .. } | Self::Parse { .. } | Self::ColumnCount { .. } => {
                EXIT_INPUT_ERROR
            }
            _ => EXIT_CONFIG_ERROR,
        }
    }

    /// Wrap an IO failure on the output document.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
