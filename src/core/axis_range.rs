/// Expand-only `{min, max}` accumulator for one axis.
///
/// A fresh range holds the `(+inf, -inf)` sentinel meaning "no data yet".
/// Non-finite inputs never widen the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AxisRange {
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` until both ends have been set from finite data.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.min.is_finite() && self.max.is_finite())
    }

    /// Widens the range so `min <= lower` and `max >= upper`.
    ///
    /// The two ends are tracked independently: an inverted pair
    /// (`lower > upper`) is accepted as-is.
    pub fn expand(&mut self, lower: f64, upper: f64) {
        if lower.is_finite() && lower < self.min {
            self.min = lower;
        }
        if upper.is_finite() && upper > self.max {
            self.max = upper;
        }
    }

    pub fn include(&mut self, value: f64) {
        self.expand(value, value);
    }

    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let mut merged = self;
        merged.expand(other.min, other.max);
        merged
    }

    /// Ordered `(low, high)` pair, or `None` while empty.
    #[must_use]
    pub fn bounds(self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        Some((self.min.min(self.max), self.min.max(self.max)))
    }
}

#[cfg(test)]
mod tests {
    use super::AxisRange;

    #[test]
    fn non_finite_values_are_ignored() {
        let mut range = AxisRange::EMPTY;
        range.expand(f64::NAN, f64::INFINITY);
        assert!(range.is_empty());

        range.expand(-1.0, f64::NAN);
        assert_eq!(range.min, -1.0);
        assert!(range.is_empty());

        range.include(3.0);
        assert_eq!(range.bounds(), Some((-1.0, 3.0)));
    }

    #[test]
    fn inverted_pair_orders_on_read() {
        let mut range = AxisRange::EMPTY;
        range.expand(5.0, 1.0);
        assert_eq!(range, AxisRange::new(5.0, 1.0));
        assert_eq!(range.bounds(), Some((1.0, 5.0)));
    }
}
