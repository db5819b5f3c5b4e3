//! Axis scales, domain fitting and tick generation.
//!
//! A [`ScaleRange`] maps data values to the unit interval `[0, 1]` through the
//! scale's transform, which is what the SVG axis and series renderers consume.

use serde::{Deserialize, Serialize};

/// Fraction of the transformed span added as margin on each side.
pub const AXIS_MARGIN: f64 = 0.05;

/// Target number of intervals for linear tick generation.
const TARGET_TICKS: f64 = 5.0;

/// Decade ticks beyond this count are thinned to every other one.
const MAX_DECADE_TICKS: usize = 8;

/// Width of the symlog linear band `[0, threshold]`, in decades.
const SYMLOG_LINEAR_WIDTH: f64 = 1.0 / (1.0 - 1.0 / 10.0);

/// How data values are placed along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    /// Linear inside `±linear_threshold`, base-10 logarithmic beyond it.
    Symlog { linear_threshold: f64 },
}

impl AxisScale {
    #[must_use]
    pub const fn symlog(linear_threshold: f64) -> Self {
        Self::Symlog { linear_threshold }
    }

    /// Map a data value into scale space.
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Symlog { linear_threshold } => {
                let magnitude = value.abs();
                if magnitude <= linear_threshold {
                    value / linear_threshold * SYMLOG_LINEAR_WIDTH
                } else {
                    let decades = (magnitude / linear_threshold).log10();
                    value.signum() * (SYMLOG_LINEAR_WIDTH + decades)
                }
            }
        }
    }

    /// Map a scale-space value back to data space.
    #[must_use]
    pub fn inverse(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Symlog { linear_threshold } => {
                let magnitude = value.abs();
                if magnitude <= SYMLOG_LINEAR_WIDTH {
                    value / SYMLOG_LINEAR_WIDTH * linear_threshold
                } else {
                    let decades = magnitude - SYMLOG_LINEAR_WIDTH;
                    value.signum() * linear_threshold * 10f64.powf(decades)
                }
            }
        }
    }

    /// Tick positions (in data space) covering `[lo, hi]`.
    #[must_use]
    pub fn ticks(self, lo: f64, hi: f64) -> Vec<f64> {
        match self {
            Self::Linear => linear_ticks(lo, hi),
            Self::Symlog { linear_threshold } => symlog_ticks(lo, hi, linear_threshold),
        }
    }
}

/// A fitted axis: a scale plus its visible domain in scale space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    pub scale: AxisScale,
    lo: f64,
    hi: f64,
}

impl ScaleRange {
    /// Fit a range around data extents `[min, max]`.
    ///
    /// A margin of [`AXIS_MARGIN`] is added in scale space on each side, except
    /// that a lower bound of exactly zero stays at zero when `sticky_zero` is set
    /// (histograms rest on the baseline).
    #[must_use]
    pub fn fit(scale: AxisScale, min: f64, max: f64, sticky_zero: bool) -> Self {
        let (mut lo, mut hi) = (scale.transform(min), scale.transform(max));
        if hi < lo {
            std::mem::swap(&mut lo, &mut hi);
        }
        let span = if (hi - lo).abs() > f64::EPSILON {
            hi - lo
        } else if lo.abs() > f64::EPSILON {
            lo.abs()
        } else {
            1.0
        };

        let keep_lo = sticky_zero && lo == 0.0;
        if !keep_lo {
            lo = span.mul_add(-AXIS_MARGIN, lo);
        }
        hi = span.mul_add(AXIS_MARGIN, hi);

        Self { scale, lo, hi }
    }

    /// Visible domain in data space.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.scale.inverse(self.lo), self.scale.inverse(self.hi))
    }

    /// Position of `value` within the range, `0.0` at the low end.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        (self.scale.transform(value) - self.lo) / (self.hi - self.lo)
    }

    /// Ticks inside the visible domain with their normalized positions.
    #[must_use]
    pub fn ticks(&self) -> Vec<(f64, f64)> {
        let (lo, hi) = self.domain();
        self.scale
            .ticks(lo, hi)
            .into_iter()
            .map(|value| (value, self.normalize(value)))
            .filter(|(_, pos)| (-1e-9..=1.0 + 1e-9).contains(pos))
            .collect()
    }
}

/// Round a raw step to 1, 2 or 5 times a power of ten.
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let exponent = raw.log10().floor();
    let base = 10f64.powf(exponent);
    let fraction = raw / base;
    let nice = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

#[allow(clippy::cast_possible_truncation)]
fn linear_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if hi <= lo {
        return vec![lo];
    }
    let step = nice_step((hi - lo) / TARGET_TICKS);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;

    (first..=last)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let value = i as f64 * step;
            // Snap accumulated rounding noise around zero.
            if value.abs() < step * 1e-9 { 0.0 } else { value }
        })
        .collect()
}

fn symlog_ticks(lo: f64, hi: f64, threshold: f64) -> Vec<f64> {
    let mut ticks = Vec::new();

    if lo < 0.0 {
        let mut negative: Vec<f64> = decades(threshold, -lo).into_iter().map(|d| -d).collect();
        negative.reverse();
        ticks.extend(negative);
    }
    if lo <= 0.0 && hi >= 0.0 {
        ticks.push(0.0);
    }
    if hi > 0.0 {
        ticks.extend(decades(threshold, hi));
    }

    if ticks.len() < 2 && hi > threshold {
        ticks.push(threshold);
        ticks.sort_by(f64::total_cmp);
    }
    ticks
}

/// Powers of ten in `[threshold, limit]`, thinned when there are too many.
#[allow(clippy::cast_possible_truncation)]
fn decades(threshold: f64, limit: f64) -> Vec<f64> {
    if limit < threshold {
        return Vec::new();
    }
    let first = threshold.log10().ceil() as i32;
    let last = limit.log10().floor() as i32;
    let all: Vec<f64> = (first..=last).map(|k| 10f64.powi(k)).collect();

    if all.len() > MAX_DECADE_TICKS {
        all.into_iter().step_by(2).collect()
    } else {
        all
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
