//! Whitespace-delimited numeric tables written by the event generator.

mod loader;

pub use loader::{TableLoader, parse_table};

use std::path::{Path, PathBuf};

/// Declared column layout of an input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSchema {
    /// `x y` pairs for line series.
    Line,
    /// `x weight width` triples for histogram series.
    Histogram,
}

impl TableSchema {
    /// Number of fields every record must carry.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Line => 2,
            Self::Histogram => 3,
        }
    }
}

/// Column index of the independent variable.
pub const X_COLUMN: usize = 0;
/// Column index of the dependent variable or histogram weight.
pub const Y_COLUMN: usize = 1;
/// Column index of the bin width (histogram tables only).
pub const WIDTH_COLUMN: usize = 2;

/// A fully loaded table. Records are stored row-major and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    path: PathBuf,
    schema: TableSchema,
    values: Vec<f64>,
}

impl DataTable {
    /// Build a table from already-parsed records.
    ///
    /// Callers guarantee every record has `schema.columns()` values.
    pub(crate) fn from_rows(path: PathBuf, schema: TableSchema, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len() % schema.columns(), 0);
        Self {
            path,
            schema,
            values,
        }
    }

    /// File the table was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn schema(&self) -> TableSchema {
        self.schema
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len() / self.schema.columns()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.schema.columns()
    }

    /// Iterate over records as slices of `column_count()` values.
    pub fn records(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.schema.columns())
    }

    /// Copy one column out as an independent sequence.
    ///
    /// Returns `None` if the schema has no such column.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.schema.columns()).then(|| self.records().map(|r| r[index]).collect())
    }

    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.records().map(|r| r[X_COLUMN]).collect()
    }

    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.records().map(|r| r[Y_COLUMN]).collect()
    }

    /// Bin widths, present only for histogram tables.
    #[must_use]
    pub fn widths(&self) -> Option<Vec<f64>> {
        self.column(WIDTH_COLUMN)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
