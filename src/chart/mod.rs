//! The page-level chart model.
//!
//! A [`Chart`] is an owned value: render operations take it, add series and
//! hand it back; [`crate::report::ReportDocument::finalize_page`] consumes its
//! contents and leaves it empty for the next page.

mod render;
mod scale;
mod series;
mod ticks;

pub use render::{
    HistogramInput, LineInput, PageOptions, render_histogram_page, render_line_page,
};
pub use scale::{AXIS_MARGIN, AxisScale, ScaleRange, nice_step};
pub use series::{
    Bin, BinLayout, HistogramSeries, LineSeries, Series, bins_from_edges, bins_from_widths,
};
pub use ticks::{TickFormat, TickLabels, superscript, symlog_label};

use crate::output::svg::ChartColor;

/// Lifecycle of a page's chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No series yet; the initial state and the state after finalization.
    Empty,
    /// At least one series has been added.
    Populated,
}

/// Where the legend is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
}

/// One page's worth of plot state.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: AxisScale,
    pub y_format: TickFormat,
    pub legend: bool,
    series: Vec<Series>,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            y_scale: AxisScale::Linear,
            y_format: TickFormat::Plain,
            legend: true,
            series: Vec::new(),
        }
    }
}

impl Chart {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub const fn with_y_scale(mut self, scale: AxisScale) -> Self {
        self.y_scale = scale;
        self
    }

    #[must_use]
    pub const fn with_y_format(mut self, format: TickFormat) -> Self {
        self.y_format = format;
        self
    }

    #[must_use]
    pub const fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Add a series; moves the chart to [`PageState::Populated`].
    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    #[must_use]
    pub fn state(&self) -> PageState {
        if self.series.is_empty() {
            PageState::Empty
        } else {
            PageState::Populated
        }
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Colour for the next series when none is given explicitly.
    #[must_use]
    pub fn next_color(&self) -> ChartColor {
        ChartColor::cycle(self.series.len())
    }

    /// Smallest and largest x over all series.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.series.iter().flat_map(Series::coordinates).map(|(x, _)| x))
    }

    /// Smallest and largest y over all series. Histograms pull the range to zero.
    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let (lo, hi) = extent(self.series.iter().flat_map(Series::coordinates).map(|(_, y)| y))?;
        if self.has_histogram() {
            Some((lo.min(0.0), hi.max(0.0)))
        } else {
            Some((lo, hi))
        }
    }

    #[must_use]
    pub fn has_histogram(&self) -> bool {
        self.series.iter().any(Series::is_histogram)
    }

    /// Upper corner with fewer data points beneath it, given fitted ranges.
    #[must_use]
    pub fn best_legend_corner(&self, x_range: &ScaleRange, y_range: &ScaleRange) -> LegendCorner {
        let mut right = 0usize;
        let mut left = 0usize;
        for (x, y) in self.series.iter().flat_map(Series::coordinates) {
            if y_range.normalize(y) < 0.6 {
                continue;
            }
            if x_range.normalize(x) >= 0.5 {
                right += 1;
            } else {
                left += 1;
            }
        }
        if right > left {
            LegendCorner::UpperLeft
        } else {
            LegendCorner::UpperRight
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
