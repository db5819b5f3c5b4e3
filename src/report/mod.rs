//! The multi-page report document.
//!
//! A [`ReportDocument`] exclusively owns its writer. Pages are rendered and
//! written in the order they are finalized; [`ReportDocument::close`] writes the
//! trailer exactly once. A document dropped while still open writes the
//! trailer and flushes on a best-effort basis.

mod template;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::mem;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::chart::{Chart, PageState};
use crate::error::{PlotError, Result};
use crate::output::svg::ChartRenderer;

/// Name used in error messages for documents not backed by a file.
const IN_MEMORY: &str = "<memory>";

/// What was written for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub number: usize,
    pub title: String,
    pub series: Vec<String>,
}

/// Append-only document of rendered chart pages.
pub struct ReportDocument<W: Write> {
    writer: Option<W>,
    path: PathBuf,
    renderer: ChartRenderer,
    pages: Vec<PageInfo>,
}

impl ReportDocument<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write the document header.
    ///
    /// # Errors
    /// Returns [`PlotError::OutputWrite`] if the file cannot be created or written.
    pub fn create(path: impl AsRef<Path>, title: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| PlotError::output(path, e))?;
        tracing::debug!(path = %path.display(), "created report document");
        Self::open(BufWriter::new(file), path.to_path_buf(), title)
    }
}

impl<W: Write> ReportDocument<W> {
    /// Start a document on an arbitrary writer.
    ///
    /// # Errors
    /// Returns [`PlotError::OutputWrite`] if the header cannot be written.
    pub fn from_writer(writer: W, title: &str) -> Result<Self> {
        Self::open(writer, PathBuf::from(IN_MEMORY), title)
    }

    fn open(mut writer: W, path: PathBuf, title: &str) -> Result<Self> {
        writer
            .write_all(template::header(title).as_bytes())
            .map_err(|e| PlotError::output(&path, e))?;
        Ok(Self {
            writer: Some(writer),
            path,
            renderer: ChartRenderer::default(),
            pages: Vec::new(),
        })
    }

    /// Use a different figure geometry for subsequent pages.
    #[must_use]
    pub fn with_renderer(mut self, renderer: ChartRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn pages(&self) -> &[PageInfo] {
        &self.pages
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    /// Render `chart` as the next page and reset it to an empty chart.
    ///
    /// Returns the 1-based number of the page just written.
    ///
    /// # Errors
    /// - [`PlotError::DocumentClosed`] after [`close`](Self::close).
    /// - [`PlotError::EmptyPage`] if the chart has no series; the chart is left untouched.
    /// - [`PlotError::OutputWrite`] if writing fails.
    pub fn finalize_page(&mut self, chart: &mut Chart) -> Result<usize> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(PlotError::DocumentClosed);
        };
        if chart.state() == PageState::Empty {
            return Err(PlotError::EmptyPage);
        }

        let chart = mem::take(chart);
        let number = self.pages.len() + 1;
        let svg = self.renderer.render(&chart);
        writer
            .write_all(template::page(number, &svg).as_bytes())
            .map_err(|e| PlotError::output(&self.path, e))?;

        tracing::info!(page = number, title = %chart.title, "finalized page");
        let series = chart.series().iter().map(|s| s.label().to_string()).collect();
        self.pages.push(PageInfo {
            number,
            title: chart.title,
            series,
        });
        Ok(number)
    }

    /// Write the trailer, flush, and hand back the writer.
    ///
    /// # Errors
    /// - [`PlotError::DocumentClosed`] if the document was already closed.
    /// - [`PlotError::OutputWrite`] if writing or flushing fails.
    pub fn close(&mut self) -> Result<W> {
        let mut writer = self.writer.take().ok_or(PlotError::DocumentClosed)?;
        write_trailer(&mut writer, self.pages.len()).map_err(|e| PlotError::output(&self.path, e))?;
        tracing::info!(path = %self.path.display(), pages = self.pages.len(), "closed report");
        Ok(writer)
    }
}

fn write_trailer<W: Write>(writer: &mut W, page_count: usize) -> std::io::Result<()> {
    writer.write_all(template::footer(page_count).as_bytes())?;
    writer.flush()
}

impl<W: Write> Drop for ReportDocument<W> {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take()
            && let Err(e) = write_trailer(&mut writer, self.pages.len())
        {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to finish report document"
            );
        }
    }
}

impl<W: Write> std::fmt::Debug for ReportDocument<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportDocument")
            .field("path", &self.path)
            .field("pages", &self.pages.len())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
