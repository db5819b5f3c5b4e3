use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::chart::{AxisScale, BinLayout, TickFormat};
use crate::output::svg::LineStyle;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default output document.
pub const DEFAULT_OUTPUT: &str = "out03plot.html";

/// Logical source names of the built-in layout, in file order.
pub const DEFAULT_SOURCES: [&str; 6] = [
    "hard_pt",
    "multiplicity_total",
    "multiplicity_charged",
    "rapidity_y",
    "pseudorapidity_eta",
    "charged_pt",
];

/// Full report layout: where the tables live and what each page shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub report: ReportSettings,

    /// Logical source name -> table path (relative to `report.data_dir`).
    ///
    /// Entries given in a file are layered over [`default_sources`].
    #[serde(default)]
    pub sources: IndexMap<String, PathBuf>,

    /// Pages in output order `[[page]]`.
    #[serde(default = "default_pages", rename = "page")]
    pub pages: Vec<PageConfig>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: None,
            report: ReportSettings::default(),
            sources: default_sources(),
            pages: default_pages(),
        }
    }
}

impl ReportConfig {
    /// Add every built-in source the config does not already define.
    pub fn fill_default_sources(&mut self) {
        for (name, path) in default_sources() {
            self.sources.entry(name).or_insert(path);
        }
    }
}

/// Document-level settings `[report]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSettings {
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_title")]
    pub title: String,

    /// Figure width in SVG units.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Figure height in SVG units.
    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            data_dir: default_data_dir(),
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Histogram,
    Line,
}

/// One page `[[page]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    pub kind: PageKind,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub x_label: String,

    #[serde(default)]
    pub y_label: String,

    #[serde(default)]
    pub y_scale: AxisScale,

    #[serde(default)]
    pub y_format: TickFormat,

    #[serde(default = "default_true")]
    pub legend: bool,

    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

/// One series on a page `[[page.series]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Key into [`ReportConfig::sources`].
    pub source: String,

    #[serde(default)]
    pub label: String,

    /// Colour name or hex literal; the page's colour cycle when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Line pages only.
    #[serde(default)]
    pub style: LineStyle,

    /// Histogram pages only.
    #[serde(default)]
    pub bins: BinLayout,
}

impl SeriesConfig {
    fn new(source: &str, label: &str) -> Self {
        Self {
            source: source.to_string(),
            label: label.to_string(),
            color: None,
            style: LineStyle::Solid,
            bins: BinLayout::Widths,
        }
    }

    fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    const fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

const fn default_true() -> bool {
    true
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_title() -> String {
    "out03plot".to_string()
}

const fn default_width() -> f64 {
    640.0
}

const fn default_height() -> f64 {
    480.0
}

/// `out03plot-0.dat` .. `out03plot-5.dat` under their logical names.
#[must_use]
pub fn default_sources() -> IndexMap<String, PathBuf> {
    DEFAULT_SOURCES
        .iter()
        .enumerate()
        .map(|(i, name)| ((*name).to_string(), PathBuf::from(format!("out03plot-{i}.dat"))))
        .collect()
}

/// The four standard pages.
#[must_use]
pub fn default_pages() -> Vec<PageConfig> {
    let scientific = TickFormat::scientific(-2, 3);
    vec![
        PageConfig {
            kind: PageKind::Histogram,
            title: "p⊥ scale of hard interaction".to_string(),
            x_label: "p⊥ (GeV)".to_string(),
            y_label: "dσ/dp⊥ (nb/GeV)".to_string(),
            y_scale: AxisScale::symlog(5.71),
            y_format: TickFormat::Plain,
            legend: true,
            series: vec![SeriesConfig::new("hard_pt", "p⊥ of 2 → 2 process")],
        },
        PageConfig {
            kind: PageKind::Histogram,
            title: "Total and charged particle multiplicities".to_string(),
            x_label: "n".to_string(),
            y_label: "dP/dn".to_string(),
            y_scale: AxisScale::Linear,
            y_format: scientific,
            legend: true,
            series: vec![
                SeriesConfig::new("multiplicity_total", "total").with_color("royalblue"),
                SeriesConfig::new("multiplicity_charged", "charged (even only!)")
                    .with_color("orange"),
            ],
        },
        PageConfig {
            kind: PageKind::Line,
            title: "Charged (pseudo)rapidity distribution".to_string(),
            x_label: "y or η".to_string(),
            y_label: "dn_charged/d(y/η)".to_string(),
            y_scale: AxisScale::Linear,
            y_format: scientific,
            legend: true,
            series: vec![
                SeriesConfig::new("rapidity_y", "dn_charged/dy"),
                SeriesConfig::new("pseudorapidity_eta", "dn_charged/dη")
                    .with_color("magenta")
                    .with_style(LineStyle::Dashed),
            ],
        },
        PageConfig {
            kind: PageKind::Histogram,
            title: "Charged p⊥ spectrum".to_string(),
            x_label: "p⊥ (GeV)".to_string(),
            y_label: "dn_charged/dp⊥ (GeV⁻¹)".to_string(),
            y_scale: AxisScale::symlog(0.21),
            y_format: TickFormat::Plain,
            legend: true,
            series: vec![SeriesConfig::new("charged_pt", "charged")],
        },
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
