use tracing::{debug, trace};

use crate::core::{AxisRange, IntervalRecord};

/// Ordered interval records plus the axis ranges derived from them.
///
/// Records are append-only until [`IntervalSeries::clear_all`]. The record
/// stored at internal index `i` is displayed at categorical position `i + 1`.
/// Both ranges are maintained eagerly on insertion, so reading them never
/// scans the records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalSeries {
    records: Vec<IntervalRecord>,
    index_range: AxisRange,
    value_range: AxisRange,
}

impl IntervalSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its 1-based display position.
    pub fn add_interval(
        &mut self,
        label: impl Into<String>,
        mean: f64,
        upper: f64,
        lower: f64,
        emphasized: bool,
    ) -> usize {
        self.push(IntervalRecord::new(label, mean, upper, lower, emphasized))
    }

    /// Appends an already-built record and returns its 1-based display position.
    pub fn push(&mut self, record: IntervalRecord) -> usize {
        self.value_range.expand(record.lower, record.upper);
        self.records.push(record);

        let position = self.records.len();
        self.index_range.expand(1.0, position as f64);
        trace!(count = position, "append interval");
        position
    }

    /// Removes every record and resets both ranges to the empty sentinel.
    pub fn clear_all(&mut self) {
        if !self.records.is_empty() {
            debug!(removed = self.records.len(), "clear interval series");
        }
        self.records.clear();
        self.index_range.reset();
        self.value_range.reset();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at 0-based internal index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IntervalRecord> {
        self.records.get(index)
    }

    /// Record at 1-based categorical position. Fractional positions truncate.
    #[must_use]
    pub fn get_at_position(&self, position: f64) -> Option<&IntervalRecord> {
        if !position.is_finite() || position < 1.0 {
            return None;
        }
        self.records.get(position.trunc() as usize - 1)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &IntervalRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[IntervalRecord] {
        &self.records
    }

    /// Categorical range `1..=len`, empty while the series is empty.
    #[must_use]
    pub fn index_range(&self) -> AxisRange {
        self.index_range
    }

    /// `[min(lower), max(upper)]` over finite bounds.
    #[must_use]
    pub fn value_range(&self) -> AxisRange {
        self.value_range
    }
}
