//! Drives a full report: load each page's tables, render, finalize, close.

use std::io::Write;
use std::path::PathBuf;

use crate::chart::{
    Chart, HistogramInput, LineInput, PageOptions, render_histogram_page, render_line_page,
};
use crate::config::{PageConfig, PageKind, ReportConfig, SeriesConfig};
use crate::error::{PlotError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::svg::ChartColor;
use crate::report::ReportDocument;
use crate::table::{TableLoader, TableSchema};

/// Renders the pages of a [`ReportConfig`] into a [`ReportDocument`].
#[derive(Debug)]
pub struct ReportGenerator<F: FileSystem = RealFileSystem> {
    config: ReportConfig,
    loader: TableLoader<F>,
}

impl ReportGenerator<RealFileSystem> {
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        let loader = TableLoader::new(config.report.data_dir.clone());
        Self { config, loader }
    }
}

impl<F: FileSystem> ReportGenerator<F> {
    #[must_use]
    pub fn with_fs(config: ReportConfig, fs: F) -> Self {
        let loader = TableLoader::with_fs(fs, config.report.data_dir.clone());
        Self { config, loader }
    }

    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Load the tables for `page` and render them into a fresh chart.
    ///
    /// # Errors
    /// Returns table loading errors, or [`PlotError::Config`] for a series whose
    /// source or colour does not resolve.
    pub fn build_page(&self, page: &PageConfig) -> Result<Chart> {
        let options = PageOptions {
            title: page.title.clone(),
            x_label: page.x_label.clone(),
            y_label: page.y_label.clone(),
            y_scale: page.y_scale,
            y_format: page.y_format,
            legend: page.legend,
        };

        match page.kind {
            PageKind::Histogram => {
                let inputs = page
                    .series
                    .iter()
                    .map(|series| -> Result<HistogramInput> {
                        let path = self.source_path(series)?;
                        Ok(HistogramInput {
                            table: self.loader.load(&path, TableSchema::Histogram)?,
                            label: series.label.clone(),
                            color: series_color(series)?,
                            layout: series.bins,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                render_histogram_page(Chart::default(), inputs, &options)
            }
            PageKind::Line => {
                let inputs = page
                    .series
                    .iter()
                    .map(|series| -> Result<LineInput> {
                        let path = self.source_path(series)?;
                        Ok(LineInput {
                            table: self.loader.load(&path, TableSchema::Line)?,
                            label: series.label.clone(),
                            color: series_color(series)?,
                            style: series.style,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(render_line_page(Chart::default(), inputs, &options))
            }
        }
    }

    /// Render every configured page in order, then close the document.
    ///
    /// Stops at the first failing page; the document is left open so its
    /// `Drop` still terminates the file.
    ///
    /// # Errors
    /// Returns the first table, render or output error.
    pub fn run<W: Write>(&self, document: &mut ReportDocument<W>) -> Result<()> {
        for page in &self.config.pages {
            let mut chart = self.build_page(page)?;
            document.finalize_page(&mut chart)?;
        }
        document.close()?;
        Ok(())
    }

    fn source_path(&self, series: &SeriesConfig) -> Result<PathBuf> {
        self.config
            .sources
            .get(&series.source)
            .cloned()
            .ok_or_else(|| PlotError::Config(format!("unknown source '{}'", series.source)))
    }
}

fn series_color(series: &SeriesConfig) -> Result<Option<ChartColor>> {
    series
        .color
        .as_deref()
        .map(|value| {
            ChartColor::parse(value)
                .ok_or_else(|| PlotError::Config(format!("invalid colour '{value}'")))
        })
        .transpose()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
