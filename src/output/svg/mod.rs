//! SVG chart generation primitives for report pages.
//!
//! Building blocks for accessible, scalable figures:
//! - viewBox-based scaling (renders at any size)
//! - CSS variable integration for theme colors (`var(--color-*)`)
//! - `<title>` elements for screen readers and hover tooltips

mod builder;
mod element;
mod format;
mod legend;
mod plot;
mod style;

pub use builder::SvgBuilder;
pub use element::{Axis, AxisOrientation, Frame, Line, SvgElement, Text};
pub use format::{coord, html_escape};
pub use legend::{Legend, LegendEntry};
pub use plot::ChartRenderer;
pub use style::{COLOR_CYCLE, ChartColor, LineStyle, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
