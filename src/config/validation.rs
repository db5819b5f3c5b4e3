//! Semantic checks on a parsed report layout.

use crate::chart::{AxisScale, TickFormat};
use crate::error::{PlotError, Result};
use crate::output::svg::ChartColor;

use super::model::{CONFIG_VERSION, PageConfig, ReportConfig};

/// Validate version, figure size and every page.
///
/// # Errors
/// Returns [`PlotError::Config`] naming the first offending field.
pub fn validate_config(config: &ReportConfig) -> Result<()> {
    validate_version(config.version.as_deref())?;

    let settings = &config.report;
    if !(settings.width.is_finite() && settings.width > 0.0)
        || !(settings.height.is_finite() && settings.height > 0.0)
    {
        return Err(PlotError::Config(format!(
            "report.width and report.height must be positive, got {}x{}",
            settings.width, settings.height
        )));
    }

    if config.pages.is_empty() {
        return Err(PlotError::Config(
            "at least one [[page]] is required".to_string(),
        ));
    }

    for (i, page) in config.pages.iter().enumerate() {
        validate_page(config, i, page)?;
    }
    Ok(())
}

fn validate_version(version: Option<&str>) -> Result<()> {
    match version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(PlotError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_page(config: &ReportConfig, index: usize, page: &PageConfig) -> Result<()> {
    let name = format!("page[{index}]");

    if page.series.is_empty() {
        return Err(PlotError::Config(format!("{name} has no series")));
    }

    if let AxisScale::Symlog { linear_threshold } = page.y_scale
        && !(linear_threshold.is_finite() && linear_threshold > 0.0)
    {
        return Err(PlotError::Config(format!(
            "{name}.y_scale.linear_threshold must be positive, got {linear_threshold}"
        )));
    }

    if let TickFormat::Scientific {
        lower_exp,
        upper_exp,
    } = page.y_format
        && lower_exp >= upper_exp
    {
        return Err(PlotError::Config(format!(
            "{name}.y_format.lower_exp ({lower_exp}) must be less than upper_exp ({upper_exp})"
        )));
    }

    for (j, series) in page.series.iter().enumerate() {
        if !config.sources.contains_key(&series.source) {
            return Err(PlotError::Config(format!(
                "{name}.series[{j}] refers to unknown source '{}'",
                series.source
            )));
        }
        if let Some(color) = &series.color
            && ChartColor::parse(color).is_none()
        {
            return Err(PlotError::Config(format!(
                "{name}.series[{j}].color '{color}' is not a known colour name or hex value"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
