//! Plot series: step histograms and polylines.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};
use crate::output::svg::{ChartColor, LineStyle};
use crate::table::DataTable;

/// How a histogram table's columns describe its bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinLayout {
    /// Record `i` is the bin `[x_i, x_i + width_i)` with weight `y_i`.
    /// Without a width column the bin ends at the next record's `x`.
    #[default]
    Widths,
    /// Column 2 lists bin edges; each record's `x` is filled into the bin that
    /// contains it with weight `y`. Matches the event generator's own
    /// table writer, which emits bin centres next to lower edges.
    Edges,
}

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub weight: f64,
}

/// A histogram drawn as an outlined step function.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub label: String,
    pub color: ChartColor,
    pub bins: Vec<Bin>,
}

impl HistogramSeries {
    /// Build bins from a loaded table.
    ///
    /// # Errors
    /// Returns [`PlotError::Config`] when the `edges` layout is requested for a
    /// table without an edge column.
    pub fn from_table(
        table: &DataTable,
        layout: BinLayout,
        label: impl Into<String>,
        color: ChartColor,
    ) -> Result<Self> {
        let xs = table.xs();
        let ys = table.ys();
        let bins = match layout {
            BinLayout::Widths => bins_from_widths(&xs, &ys, table.widths().as_deref()),
            BinLayout::Edges => {
                let edges = table.widths().ok_or_else(|| {
                    PlotError::Config(format!(
                        "{}: 'edges' bin layout needs a third column",
                        table.path().display()
                    ))
                })?;
                bins_from_edges(&xs, &ys, &edges)
            }
        };

        Ok(Self {
            label: label.into(),
            color,
            bins,
        })
    }
}

/// Bins from lower edges and explicit (or inferred) widths.
#[must_use]
pub fn bins_from_widths(xs: &[f64], ys: &[f64], widths: Option<&[f64]>) -> Vec<Bin> {
    xs.iter()
        .zip(ys)
        .enumerate()
        .map(|(i, (&lower, &weight))| {
            let width = match widths {
                Some(widths) => widths[i],
                None => inferred_width(xs, i),
            };
            Bin {
                lower,
                upper: lower + width,
                weight,
            }
        })
        .collect()
}

fn inferred_width(xs: &[f64], i: usize) -> f64 {
    match (xs.get(i), xs.get(i + 1)) {
        (Some(x), Some(next)) => next - x,
        _ if i > 0 => xs[i] - xs[i - 1],
        _ => 1.0,
    }
}

/// Weighted histogram of `xs` over sorted, de-duplicated `edges`.
///
/// Non-finite values and values outside the outer edges are dropped; the last
/// bin includes its upper edge.
#[must_use]
pub fn bins_from_edges(xs: &[f64], ys: &[f64], edges: &[f64]) -> Vec<Bin> {
    let mut edges: Vec<f64> = edges.iter().copied().filter(|e| e.is_finite()).collect();
    edges.sort_by(f64::total_cmp);
    edges.dedup();
    if edges.len() < 2 {
        return Vec::new();
    }

    let mut bins: Vec<Bin> = edges
        .windows(2)
        .map(|w| Bin {
            lower: w[0],
            upper: w[1],
            weight: 0.0,
        })
        .collect();
    let last_edge = edges[edges.len() - 1];

    for (&x, &y) in xs.iter().zip(ys) {
        if !x.is_finite() || x < edges[0] || x > last_edge {
            continue;
        }
        let index = edges.partition_point(|&e| e <= x).saturating_sub(1);
        let index = index.min(bins.len() - 1);
        bins[index].weight += y;
    }
    bins
}

/// A polyline through `(x, y)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub color: ChartColor,
    pub style: LineStyle,
    pub points: Vec<(f64, f64)>,
}

impl LineSeries {
    #[must_use]
    pub fn from_table(
        table: &DataTable,
        label: impl Into<String>,
        color: ChartColor,
        style: LineStyle,
    ) -> Self {
        let points = table.records().map(|r| (r[0], r[1])).collect();
        Self {
            label: label.into(),
            color,
            style,
            points,
        }
    }
}

/// Any series that can be placed on a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Histogram(HistogramSeries),
    Line(LineSeries),
}

impl Series {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Histogram(h) => &h.label,
            Self::Line(l) => &l.label,
        }
    }

    #[must_use]
    pub const fn color(&self) -> &ChartColor {
        match self {
            Self::Histogram(h) => &h.color,
            Self::Line(l) => &l.color,
        }
    }

    /// Stroke style used for the series and its legend sample.
    #[must_use]
    pub const fn line_style(&self) -> LineStyle {
        match self {
            Self::Histogram(_) => LineStyle::Solid,
            Self::Line(l) => l.style,
        }
    }

    #[must_use]
    pub const fn is_histogram(&self) -> bool {
        matches!(self, Self::Histogram(_))
    }

    /// Every `(x, y)` coordinate the series touches when drawn.
    #[must_use]
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        match self {
            Self::Histogram(h) => h
                .bins
                .iter()
                .flat_map(|b| [(b.lower, b.weight), (b.upper, b.weight)])
                .collect(),
            Self::Line(l) => l.points.clone(),
        }
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
