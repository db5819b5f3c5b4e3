//! Tick label formatting.

use serde::{Deserialize, Serialize};

/// How numeric tick labels are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum TickFormat {
    #[default]
    Plain,
    /// Scale labels by a shared power of ten when the order of magnitude of the
    /// largest tick is at most `lower_exp` or at least `upper_exp`.
    Scientific { lower_exp: i32, upper_exp: i32 },
}

impl TickFormat {
    #[must_use]
    pub const fn scientific(lower_exp: i32, upper_exp: i32) -> Self {
        Self::Scientific {
            lower_exp,
            upper_exp,
        }
    }

    /// Format tick values for display.
    #[must_use]
    pub fn label(self, ticks: &[f64]) -> TickLabels {
        let largest = ticks.iter().map(|t| t.abs()).fold(0.0_f64, f64::max);

        let multiplier = match self {
            Self::Plain => None,
            Self::Scientific {
                lower_exp,
                upper_exp,
            } => order_of_magnitude(largest).filter(|&e| e <= lower_exp || e >= upper_exp),
        };

        let scale = multiplier.map_or(1.0, |e| 10f64.powi(e));
        let scaled: Vec<f64> = ticks.iter().map(|t| t / scale).collect();
        let decimals = decimals_for(&scaled);
        let labels = scaled.iter().map(|&v| format_value(v, decimals)).collect();

        TickLabels { labels, multiplier }
    }
}

/// Labels for a set of ticks plus an optional shared `×10^e` multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickLabels {
    pub labels: Vec<String>,
    pub multiplier: Option<i32>,
}

/// Label for a tick on a symmetric-log axis: decades as `10ⁿ`, the rest plain.
#[must_use]
pub fn symlog_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10();
    if (exponent - exponent.round()).abs() < 1e-9 {
        #[allow(clippy::cast_possible_truncation)]
        let exponent = exponent.round() as i32;
        let sign = if value < 0.0 { "\u{2212}" } else { "" };
        format!("{sign}10{}", superscript(exponent))
    } else {
        format_value(value, decimals_for(&[value]))
    }
}

/// Render an integer with Unicode superscript digits.
#[must_use]
pub fn superscript(value: i32) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => '\u{207b}',
            '0' => '\u{2070}',
            '1' => '\u{b9}',
            '2' => '\u{b2}',
            '3' => '\u{b3}',
            '4' => '\u{2074}',
            '5' => '\u{2075}',
            '6' => '\u{2076}',
            '7' => '\u{2077}',
            '8' => '\u{2078}',
            _ => '\u{2079}',
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn order_of_magnitude(value: f64) -> Option<i32> {
    (value > 0.0 && value.is_finite()).then(|| value.log10().floor() as i32)
}

/// Fewest decimals (up to 6) that keep every value distinct from its rounding.
fn decimals_for(values: &[f64]) -> usize {
    (0..=6)
        .find(|&d| {
            let factor = 10f64.powi(i32::try_from(d).unwrap_or(6));
            values
                .iter()
                .all(|v| ((v * factor).round() - v * factor).abs() < 1e-6)
        })
        .unwrap_or(6)
}

fn format_value(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    // Avoid "-0" labels.
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text.replacen('-', "\u{2212}", 1)
    }
}

#[cfg(test)]
#[path = "ticks_tests.rs"]
mod tests;
