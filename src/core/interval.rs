use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// One named interval: a point estimate with upper and lower bounds.
///
/// `lower <= mean <= upper` is expected but not checked. Out-of-order bounds
/// simply draw an inverted whisker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    pub label: String,
    pub mean: f64,
    pub upper: f64,
    pub lower: f64,
    pub emphasized: bool,
}

impl IntervalRecord {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        mean: f64,
        upper: f64,
        lower: f64,
        emphasized: bool,
    ) -> Self {
        Self {
            label: label.into(),
            mean,
            upper,
            lower,
            emphasized,
        }
    }

    pub fn from_decimal(
        label: impl Into<String>,
        mean: Decimal,
        upper: Decimal,
        lower: Decimal,
        emphasized: bool,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            label,
            decimal_to_f64(mean, "mean")?,
            decimal_to_f64(upper, "upper")?,
            decimal_to_f64(lower, "lower")?,
            emphasized,
        ))
    }

    /// `true` when all three values are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.upper.is_finite() && self.lower.is_finite()
    }
}
