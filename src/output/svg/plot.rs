//! Renders a [`Chart`] page into a standalone SVG figure.

use crate::chart::{
    AxisScale, Chart, LegendCorner, ScaleRange, Series, TickFormat, superscript, symlog_label,
};

use super::builder::SvgBuilder;
use super::element::{Axis, Frame, Line, SvgElement, Text};
use super::legend::{Legend, LegendEntry};
use super::style::{ChartColor, TextAnchor};

/// Plot area inside the figure, in SVG units.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn to_screen(&self, x_pos: f64, y_pos: f64) -> (f64, f64) {
        (
            x_pos.mul_add(self.width, self.left),
            y_pos.mul_add(-self.height, self.bottom()),
        )
    }
}

/// Figure geometry used to lay out every page.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            margin_left: 80.0,
            margin_right: 24.0,
            margin_top: 56.0,
            margin_bottom: 60.0,
        }
    }
}

impl ChartRenderer {
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: self.margin_left,
            top: self.margin_top,
            width: self.width - self.margin_left - self.margin_right,
            height: self.height - self.margin_top - self.margin_bottom,
        }
    }

    /// Render the chart. An empty chart renders a placeholder message.
    #[must_use]
    pub fn render(&self, chart: &Chart) -> String {
        let builder = SvgBuilder::new(self.width, self.height)
            .with_title(&chart.title)
            .with_class("chart");

        let (Some((x_min, x_max)), Some((y_min, y_max))) = (chart.x_extent(), chart.y_extent())
        else {
            let empty = Text::new(self.width / 2.0, self.height / 2.0, "No data available")
                .with_font_size(14.0);
            return builder.push_element(&empty).build();
        };

        let area = self.plot_area();
        let x_range = ScaleRange::fit(AxisScale::Linear, x_min, x_max, false);
        let y_range = ScaleRange::fit(chart.y_scale, y_min, y_max, chart.has_histogram());

        let mut builder = builder;
        for series in chart.series() {
            builder = builder.push_element(&series_line(series, &area, &x_range, &y_range));
        }

        builder = builder
            .push_element(&Frame {
                x: area.left,
                y: area.top,
                width: area.width,
                height: area.height,
                color: ChartColor::css_var("axis"),
            })
            .push_element(&x_axis(&area, &x_range))
            .push_raw(y_axis(&area, &y_range, chart.y_format));

        if chart.legend {
            let corner = chart.best_legend_corner(&x_range, &y_range);
            builder = builder.push_element(&legend(chart, &area, corner));
        }

        builder.push_raw(self.decorations(chart, &area)).build()
    }

    fn decorations(&self, chart: &Chart, area: &PlotArea) -> String {
        let title = Text::new(self.width / 2.0, area.top - 18.0, &chart.title)
            .with_font_size(15.0)
            .bold();
        let x_label = Text::new(
            area.left + area.width / 2.0,
            self.height - 14.0,
            &chart.x_label,
        )
        .with_font_size(13.0);
        let y_label = Text::new(18.0, area.top + area.height / 2.0, &chart.y_label)
            .with_font_size(13.0)
            .rotated(-90.0);

        [title, x_label, y_label]
            .iter()
            .filter(|t| !t.content.is_empty())
            .map(|t| t.render() + "\n")
            .collect()
    }
}

fn series_line(series: &Series, area: &PlotArea, x: &ScaleRange, y: &ScaleRange) -> Line {
    let data_points = match series {
        Series::Histogram(h) => step_outline(h.bins.iter().map(|b| (b.lower, b.upper, b.weight))),
        Series::Line(l) => l.points.clone(),
    };
    let points = data_points
        .into_iter()
        .filter(|(px, py)| px.is_finite() && py.is_finite())
        .map(|(px, py)| area.to_screen(x.normalize(px), y.normalize(py)))
        .collect();

    Line::new(points, series.color().clone())
        .with_style(series.line_style())
        .with_title(series.label())
}

/// Outline of a step histogram, starting and ending on the zero baseline.
///
/// Gaps between non-adjacent bins drop back to the baseline.
fn step_outline(bins: impl Iterator<Item = (f64, f64, f64)>) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = Vec::new();
    let mut previous_upper: Option<f64> = None;

    for (lower, upper, weight) in bins {
        match previous_upper {
            Some(prev) if (prev - lower).abs() <= f64::EPSILON * prev.abs().max(1.0) => {}
            Some(prev) => {
                points.push((prev, 0.0));
                points.push((lower, 0.0));
            }
            None => points.push((lower, 0.0)),
        }
        points.push((lower, weight));
        points.push((upper, weight));
        previous_upper = Some(upper);
    }
    if let Some(last) = previous_upper {
        points.push((last, 0.0));
    }
    points
}

fn x_axis(area: &PlotArea, range: &ScaleRange) -> Axis {
    let ticks = range.ticks();
    let values: Vec<f64> = ticks.iter().map(|(v, _)| *v).collect();
    let labels = TickFormat::Plain.label(&values).labels;
    Axis::horizontal(area.left, area.bottom(), area.width).with_labels(
        ticks
            .iter()
            .zip(labels)
            .map(|((_, pos), label)| (*pos, label))
            .collect(),
    )
}

fn y_axis(area: &PlotArea, range: &ScaleRange, format: TickFormat) -> String {
    let ticks = range.ticks();
    let values: Vec<f64> = ticks.iter().map(|(v, _)| *v).collect();

    let (labels, multiplier) = match range.scale {
        AxisScale::Symlog { .. } => (values.iter().map(|v| symlog_label(*v)).collect(), None),
        AxisScale::Linear => {
            let formatted = format.label(&values);
            (formatted.labels, formatted.multiplier)
        }
    };

    let axis = Axis::vertical(area.left, area.bottom(), area.height).with_labels(
        ticks
            .iter()
            .zip(labels)
            .map(|((_, pos), label)| (*pos, label))
            .collect(),
    );

    let mut output = axis.render();
    if let Some(exponent) = multiplier {
        let content = format!("\u{d7}10{}", superscript(exponent));
        let text = Text::new(area.left, area.top - 4.0, content)
            .with_anchor(TextAnchor::Start)
            .with_font_size(11.0);
        output.push_str(&text.render());
        output.push('\n');
    }
    output
}

fn legend(chart: &Chart, area: &PlotArea, corner: LegendCorner) -> Legend {
    let entries = chart
        .series()
        .iter()
        .filter(|s| !s.label().is_empty())
        .map(|s| LegendEntry {
            label: s.label().to_string(),
            color: s.color().clone(),
            style: s.line_style(),
        })
        .collect();

    match corner {
        LegendCorner::UpperRight => Legend::new(entries, area.right(), area.top, true),
        LegendCorner::UpperLeft => Legend::new(entries, area.left, area.top, false),
    }
}

#[cfg(test)]
#[path = "plot_tests.rs"]
mod tests;
