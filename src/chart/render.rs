//! Page render operations: add histogram or line series to a chart.

use crate::error::Result;
use crate::output::svg::{ChartColor, LineStyle};
use crate::table::DataTable;

use super::{AxisScale, BinLayout, Chart, HistogramSeries, LineSeries, Series, TickFormat};

/// Page-level decorations applied by the render operations.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: AxisScale,
    pub y_format: TickFormat,
    pub legend: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            y_scale: AxisScale::Linear,
            y_format: TickFormat::Plain,
            legend: true,
        }
    }
}

impl PageOptions {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    fn apply(&self, chart: &mut Chart) {
        chart.title.clone_from(&self.title);
        chart.x_label.clone_from(&self.x_label);
        chart.y_label.clone_from(&self.y_label);
        chart.y_scale = self.y_scale;
        chart.y_format = self.y_format;
        chart.legend = self.legend;
    }
}

/// A loaded table to draw as a step histogram.
#[derive(Debug, Clone)]
pub struct HistogramInput {
    pub table: DataTable,
    pub label: String,
    pub color: Option<ChartColor>,
    pub layout: BinLayout,
}

/// A loaded table to draw as a line.
#[derive(Debug, Clone)]
pub struct LineInput {
    pub table: DataTable,
    pub label: String,
    pub color: Option<ChartColor>,
    pub style: LineStyle,
}

/// Overlay one step histogram per input on `chart`.
///
/// Inputs are consumed; their tables are dropped once the bins are built.
///
/// # Errors
/// Propagates bin construction errors from [`HistogramSeries::from_table`].
pub fn render_histogram_page(
    mut chart: Chart,
    inputs: Vec<HistogramInput>,
    options: &PageOptions,
) -> Result<Chart> {
    options.apply(&mut chart);
    for input in inputs {
        let color = input.color.unwrap_or_else(|| chart.next_color());
        let series = HistogramSeries::from_table(&input.table, input.layout, input.label, color)?;
        tracing::debug!(
            label = %series.label,
            bins = series.bins.len(),
            "added histogram series"
        );
        chart.add_series(Series::Histogram(series));
    }
    Ok(chart)
}

/// Overlay one line per input on `chart`.
#[must_use]
pub fn render_line_page(mut chart: Chart, inputs: Vec<LineInput>, options: &PageOptions) -> Chart {
    options.apply(&mut chart);
    for input in inputs {
        let color = input.color.unwrap_or_else(|| chart.next_color());
        let series = LineSeries::from_table(&input.table, input.label, color, input.style);
        tracing::debug!(
            label = %series.label,
            points = series.points.len(),
            "added line series"
        );
        chart.add_series(Series::Line(series));
    }
    chart
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
