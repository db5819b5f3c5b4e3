//! Primitive SVG elements: axes, polylines, text and the plot frame.

use std::fmt::Write;

use super::format::{coord, html_escape};
use super::style::{ChartColor, LineStyle, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis line with ticks and labels.
///
/// Tick positions are fractions of the axis length: `0.0` is the origin end,
/// `1.0` the far end (right for horizontal, top for vertical axes).
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::css_var("axis"),
            tick_length: 5.0,
            font_size: 11.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
            coord(self.x),
            coord(self.y),
            coord(end_x),
            coord(end_y)
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                coord(tick.start_x),
                coord(tick.start_y),
                coord(tick.end_x),
                coord(tick.end_y)
            );

            let escaped_label = html_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                coord(tick.label_x),
                coord(tick.label_y),
                tick.anchor,
                self.font_size
            );
        }

        output
    }
}

/// An open polyline, used for line series and histogram outlines.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub style: LineStyle,
    /// Accessible description shown as a hover tooltip.
    pub title: Option<String>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 1.5,
            style: LineStyle::Solid,
            title: None,
        }
    }

    #[must_use]
    pub const fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// SVG path data (`M x,y L x,y ...`) for the points.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            let _ = write!(path, "{command}{},{}", coord(*x), coord(*y));
        }
        path
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();
        let dash = self
            .style
            .dasharray()
            .map(|d| format!(r#" stroke-dasharray="{d}""#))
            .unwrap_or_default();

        let open = format!(
            r#"<path d="{}" fill="none" stroke="{color}" stroke-width="{}"{dash} stroke-linejoin="miter""#,
            self.path_data(),
            self.stroke_width
        );

        match &self.title {
            Some(title) => format!(
                "{open}>\n    <title>{}</title>\n</path>\n",
                html_escape(title)
            ),
            None => format!("{open}/>\n"),
        }
    }
}

/// A text label, optionally rotated about its anchor point.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub color: ChartColor,
    pub rotate: Option<f64>,
    pub bold: bool,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: TextAnchor::Middle,
            font_size: 12.0,
            color: ChartColor::css_var("text"),
            rotate: None,
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let (x, y) = (coord(self.x), coord(self.y));
        let transform = self
            .rotate
            .map(|deg| format!(r#" transform="rotate({deg} {x} {y})""#))
            .unwrap_or_default();
        let weight = if self.bold {
            r#" font-weight="600""#
        } else {
            ""
        };
        format!(
            r#"<text x="{x}" y="{y}" text-anchor="{}" fill="{}" font-size="{}"{weight}{transform}>{}</text>"#,
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.content)
        )
    }
}

/// Outline of the plotting area.
#[derive(Debug, Clone)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
}

impl SvgElement for Frame {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
            coord(self.x),
            coord(self.y),
            coord(self.width),
            coord(self.height),
            self.color.to_css()
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
