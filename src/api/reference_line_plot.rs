use tracing::warn;

use crate::core::AxisRange;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RenderFrame};

use super::{CoordinateTransform, PlotSeries, RenderStyle};

/// Horizontal reference line across the whole plot width, e.g. a null-effect
/// line at zero behind a forest plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalLinePlot {
    pub value: f64,
    pub stroke_width: f64,
}

impl HorizontalLinePlot {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            stroke_width: 1.0,
        }
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> ChartResult<Self> {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "reference line stroke width must be finite and > 0, got {stroke_width}"
            )));
        }
        self.stroke_width = stroke_width;
        Ok(self)
    }
}

impl PlotSeries for HorizontalLinePlot {
    fn has_content(&self) -> bool {
        self.value.is_finite()
    }

    fn x_range(&self) -> AxisRange {
        AxisRange::EMPTY
    }

    fn y_range(&self) -> AxisRange {
        let mut range = AxisRange::EMPTY;
        range.include(self.value);
        range
    }

    fn paint_content(
        &self,
        frame: &mut RenderFrame,
        transform: &dyn CoordinateTransform,
        style: &RenderStyle,
    ) -> ChartResult<()> {
        if !self.has_content() {
            return Ok(());
        }
        let bounds = transform.plot_bounds();
        let y = transform.transform_y(self.value);
        let line = LinePrimitive::new(
            bounds.left(),
            y,
            bounds.right(),
            y,
            self.stroke_width,
            style.reference_line_color,
        );
        if let Err(err) = line.validate() {
            warn!(value = self.value, error = %err, "skipping invalid reference line");
            return Ok(());
        }
        frame.push_line(line);
        Ok(())
    }
}
