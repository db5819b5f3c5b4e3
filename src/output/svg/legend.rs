//! Frameless legend listing series labels next to style samples.

use std::fmt::Write;

use super::element::{Line, SvgElement, Text};
use super::style::{ChartColor, LineStyle, TextAnchor};

const SAMPLE_LENGTH: f64 = 24.0;
const ROW_HEIGHT: f64 = 18.0;
const INSET: f64 = 10.0;
/// Rough glyph width used to right-align the legend block.
const CHAR_WIDTH: f64 = 6.5;

/// One legend row.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: ChartColor,
    pub style: LineStyle,
}

/// Legend anchored to an upper corner of the plot area.
#[derive(Debug, Clone)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    /// Corner x: left edge of the plot area when `align_right` is false,
    /// right edge otherwise.
    pub x: f64,
    pub y: f64,
    pub align_right: bool,
    pub font_size: f64,
}

impl Legend {
    #[must_use]
    pub const fn new(entries: Vec<LegendEntry>, x: f64, y: f64, align_right: bool) -> Self {
        Self {
            entries,
            x,
            y,
            align_right,
            font_size: 11.0,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn block_width(&self) -> f64 {
        let longest = self
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);
        (longest as f64).mul_add(CHAR_WIDTH, SAMPLE_LENGTH + 6.0)
    }
}

impl SvgElement for Legend {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let left = if self.align_right {
            self.x - INSET - self.block_width()
        } else {
            self.x + INSET
        };

        let mut output = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let row_y = ROW_HEIGHT.mul_add(i as f64, self.y + INSET + ROW_HEIGHT / 2.0);

            let sample = Line::new(
                vec![(left, row_y), (left + SAMPLE_LENGTH, row_y)],
                entry.color.clone(),
            )
            .with_style(entry.style);
            output.push_str(&sample.render());

            let label_x = left + SAMPLE_LENGTH + 6.0;
            let label = Text::new(label_x, row_y + self.font_size / 3.0, &entry.label)
                .with_anchor(TextAnchor::Start)
                .with_font_size(self.font_size);
            let _ = writeln!(output, "{}", label.render());
        }
        output
    }
}

#[cfg(test)]
#[path = "legend_tests.rs"]
mod tests;
