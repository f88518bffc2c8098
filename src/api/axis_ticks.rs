use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::AxisRange;
use crate::error::{ChartError, ChartResult};

/// Distance from the outermost categorical position to the axis edge, in
/// domain units.
pub const CATEGORICAL_AXIS_PADDING: f64 = 0.5;

const NICE_STEP_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const MAX_TICK_LABEL_DECIMALS: usize = 10;
/// Value spans narrower than this are treated as a single value.
const MIN_VALUE_AXIS_SPAN: f64 = 1e-300;
const MAX_TICKS_PER_TARGET: usize = 4;

/// The two axes of an interval chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    /// Horizontal axis with one position per interval record.
    Categorical,
    /// Vertical axis over interval values.
    Value,
}

impl AxisKind {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Categorical)
    }
}

pub type AxisTicks = SmallVec<[f64; 16]>;

/// Axis domain and major tick positions resolved for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibratedAxis {
    pub kind: AxisKind,
    pub domain: (f64, f64),
    pub tick_step: f64,
    pub ticks: AxisTicks,
}

impl CalibratedAxis {
    #[must_use]
    pub fn tick_label(&self, value: f64) -> String {
        format_tick_value(value, self.tick_step)
    }
}

/// Categorical axis: one tick per integer position inside `range`, domain
/// padded by half a slot on each side.
#[must_use]
pub fn calibrate_categorical_axis(range: AxisRange, fallback_domain: (f64, f64)) -> CalibratedAxis {
    let Some((low, high)) = range.bounds() else {
        return CalibratedAxis {
            kind: AxisKind::Categorical,
            domain: fallback_domain,
            tick_step: 1.0,
            ticks: AxisTicks::new(),
        };
    };

    let first = low.ceil() as i64;
    let last = high.floor() as i64;
    CalibratedAxis {
        kind: AxisKind::Categorical,
        domain: (
            low - CATEGORICAL_AXIS_PADDING,
            high + CATEGORICAL_AXIS_PADDING,
        ),
        tick_step: 1.0,
        ticks: (first..=last).map(|position| position as f64).collect(),
    }
}

/// Value axis: widens `range` outward to whole "nice" steps sized for about
/// `target_ticks` ticks.
///
/// A zero-width range is padded by half its magnitude (or 0.5 near zero)
/// first. Every finite range calibrates, up to `±f64::MAX`.
pub fn calibrate_value_axis(
    range: AxisRange,
    target_ticks: usize,
    fallback_domain: (f64, f64),
) -> ChartResult<CalibratedAxis> {
    let (mut low, mut high) = range.bounds().unwrap_or(fallback_domain);
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(ChartError::InvalidData(format!(
            "value axis range must be finite and ordered, got [{low}, {high}]"
        )));
    }
    if high - low < MIN_VALUE_AXIS_SPAN {
        let center = low / 2.0 + high / 2.0;
        let pad = if center.abs() < MIN_VALUE_AXIS_SPAN {
            0.5
        } else {
            center.abs() * 0.5
        };
        low = (center - pad).max(f64::MIN);
        high = (center + pad).min(f64::MAX);
    }

    // Divide before subtracting so spans wider than f64::MAX stay finite.
    let target_ticks = target_ticks.max(2);
    let divisor = target_ticks as f64;
    let step = nice_step_for(high / divisor - low / divisor)?;

    let nice_low = (low / step).floor() * step;
    let nice_high = (high / step).ceil() * step;
    let domain = (
        if nice_low.is_finite() { nice_low } else { low },
        if nice_high.is_finite() { nice_high } else { high },
    );

    let first = (domain.0 / step - 1e-9).ceil();
    let last = (domain.1 / step + 1e-9).floor();
    let count = ((last - first).max(0.0) as usize + 1).min(target_ticks * MAX_TICKS_PER_TARGET);
    let ticks = (0..count)
        .map(|index| (first + index as f64) * step)
        .collect();

    Ok(CalibratedAxis {
        kind: AxisKind::Value,
        domain,
        tick_step: step,
        ticks,
    })
}

/// Smallest step from {1, 2, 2.5, 5} x 10^k that splits `span` into at most
/// `target_ticks` intervals.
pub fn nice_tick_step(span: f64, target_ticks: usize) -> ChartResult<f64> {
    if !span.is_finite() || span <= 0.0 {
        return Err(ChartError::InvalidData(
            "tick span must be finite and > 0".to_owned(),
        ));
    }
    nice_step_for(span / target_ticks.max(1) as f64)
}

fn nice_step_for(raw: f64) -> ChartResult<f64> {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    if !raw.is_finite() || raw <= 0.0 || !magnitude.is_normal() {
        return Err(ChartError::InvalidData(format!(
            "raw tick step must be finite and > 0, got {raw}"
        )));
    }

    let normalized = raw / magnitude;
    let multiplier = NICE_STEP_MULTIPLIERS
        .into_iter()
        .find(|candidate| *candidate >= normalized - 1e-9)
        .unwrap_or(10.0);
    let step = multiplier * magnitude;
    // Rounding up past f64::MAX keeps the raw step.
    Ok(if step.is_finite() { step } else { raw })
}

/// Number of decimals needed to tell ticks `step` apart.
#[must_use]
pub fn tick_label_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }

    let mut decimals = 0;
    let mut scaled = step;
    while decimals < MAX_TICK_LABEL_DECIMALS
        && (scaled - scaled.round()).abs() > 1e-9 * scaled.abs().max(1.0)
    {
        decimals += 1;
        scaled *= 10.0;
    }
    decimals
}

#[must_use]
pub fn format_tick_value(value: f64, step: f64) -> String {
    let precision = tick_label_precision(step);
    // Accumulated float error can leave "-0.00".
    let value = if value.abs() < step.abs() * 1e-9 {
        0.0
    } else {
        value
    };
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_picks_round_multipliers() {
        assert_eq!(nice_tick_step(4.0, 5).expect("step"), 1.0);
        assert_eq!(nice_tick_step(10.0, 5).expect("step"), 2.0);
        assert_eq!(nice_tick_step(12.0, 5).expect("step"), 2.5);
        assert!((nice_tick_step(0.03, 5).expect("step") - 0.01).abs() < 1e-12);
        assert!(nice_tick_step(0.0, 5).is_err());
    }

    #[test]
    fn tick_labels_use_step_precision() {
        assert_eq!(format_tick_value(3.0, 1.0), "3");
        assert_eq!(format_tick_value(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick_value(7.5, 2.5), "7.5");
        assert_eq!(format_tick_value(-1e-17, 0.1), "0.0");
    }
}
