//! Parsing of input tables.

use std::path::{Path, PathBuf};

use crate::error::{PlotError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::{DataTable, TableSchema};

/// Parse table text into a [`DataTable`].
///
/// Blank lines are skipped; every other line must hold exactly
/// `schema.columns()` whitespace-separated floating-point fields.
///
/// # Errors
/// Returns [`PlotError::Parse`] for a non-numeric field and
/// [`PlotError::ColumnCount`] for a record of the wrong width.
pub fn parse_table(content: &str, path: &Path, schema: TableSchema) -> Result<DataTable> {
    let expected = schema.columns();
    let mut values = Vec::with_capacity(content.len() / 8);

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != expected {
            return Err(PlotError::ColumnCount {
                path: path.to_path_buf(),
                line: line_number,
                expected,
                found: fields.len(),
            });
        }

        for (column, token) in fields.iter().enumerate() {
            let value = token.parse::<f64>().map_err(|_| PlotError::Parse {
                path: path.to_path_buf(),
                line: line_number,
                column: column + 1,
                token: (*token).to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(DataTable::from_rows(path.to_path_buf(), schema, values))
}

/// Loads tables relative to a data directory.
///
/// Every call re-reads the file; nothing is cached between loads.
#[derive(Debug)]
pub struct TableLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    data_dir: PathBuf,
}

impl TableLoader<RealFileSystem> {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(RealFileSystem, data_dir)
    }
}

impl<F: FileSystem> TableLoader<F> {
    #[must_use]
    pub fn with_fs(fs: F, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            data_dir: data_dir.into(),
        }
    }

    /// Directory relative paths are resolved against.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve a table path against the data directory. Absolute paths pass through.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    /// Read and parse one table.
    ///
    /// # Errors
    /// Returns [`PlotError::FileRead`] if the file is missing or unreadable, or
    /// a parse error from [`parse_table`].
    pub fn load(&self, path: &Path, schema: TableSchema) -> Result<DataTable> {
        let full_path = self.resolve(path);
        let content =
            self.fs
                .read_to_string(&full_path)
                .map_err(|source| PlotError::FileRead {
                    path: full_path.clone(),
                    source,
                })?;

        let table = parse_table(&content, &full_path, schema)?;
        tracing::debug!(
            path = %full_path.display(),
            records = table.len(),
            columns = table.column_count(),
            "loaded table"
        );
        Ok(table)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
