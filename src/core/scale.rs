use crate::error::{ChartError, ChartResult};

/// Affine map from a data domain onto a pixel span.
///
/// The pixel span may be reversed (`range_start > range_end`), which is how
/// value axes put larger values nearer the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to pixels. Non-finite input yields non-finite output.
    ///
    /// Domain differences are taken on halved values so that domains wider
    /// than `f64::MAX` still map.
    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value / 2.0 - self.domain_start / 2.0)
            / (self.domain_end / 2.0 - self.domain_start / 2.0);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        let half_span = self.domain_end / 2.0 - self.domain_start / 2.0;
        self.domain_start + normalized * half_span + normalized * half_span
    }
}
