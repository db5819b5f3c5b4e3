//! SVG styling primitives: colors, line dashes and text anchoring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default series colors, in order of use on a page.
pub const COLOR_CYCLE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Named colors accepted in configuration files.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("blue", "#0000ff"),
    ("crimson", "#dc143c"),
    ("darkgreen", "#006400"),
    ("forestgreen", "#228b22"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("grey", "#808080"),
    ("magenta", "#ff00ff"),
    ("navy", "#000080"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("red", "#ff0000"),
    ("royalblue", "#4169e1"),
    ("teal", "#008080"),
];

/// Series or text colour: a hex literal or a themed CSS variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#4169e1")
    Hex(String),
    /// CSS variable reference (e.g., "text" → "var(--color-text)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// The `index`-th color of [`COLOR_CYCLE`], wrapping around.
    #[must_use]
    pub fn cycle(index: usize) -> Self {
        Self::hex(COLOR_CYCLE[index % COLOR_CYCLE.len()])
    }

    /// Parse a color name (`royalblue`) or a `#rgb` / `#rrggbb` hex literal.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(digits) = value.strip_prefix('#') {
            let valid =
                matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
            return valid.then(|| Self::hex(&value.to_ascii_lowercase()));
        }
        let lower = value.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, hex)| Self::hex(hex))
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }
}

/// Stroke pattern of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Value for the SVG `stroke-dasharray` attribute, if any.
    #[must_use]
    pub const fn dasharray(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("7,4"),
            Self::Dotted => Some("1.5,3"),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dashed => write!(f, "dashed"),
            Self::Dotted => write!(f, "dotted"),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
