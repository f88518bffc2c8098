use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{AxisRange, IntervalRecord, IntervalSeries};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{AxisKind, CoordinateTransform, PlotSeries, RenderStyle, TickPaint};

/// Half-width of the whisker caps, in categorical domain units.
pub const WHISKER_HALF_WIDTH: f64 = 0.1;
/// Arm half-length of the mean cross, in pixels. Does not scale with zoom.
pub const MEAN_CROSS_ARM_PX: f64 = 2.0;
pub const EMPHASIZED_STROKE_WIDTH_PX: f64 = 2.0;
pub const REGULAR_STROKE_WIDTH_PX: f64 = 1.0;

/// Pixel geometry of one "I-beam plus cross" glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhiskerGlyph {
    /// 1-based categorical position.
    pub position: usize,
    pub x: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_upper: f64,
    pub y_lower: f64,
    pub y_mean: f64,
    pub stroke_width: f64,
}

impl WhiskerGlyph {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.x,
            self.x_left,
            self.x_right,
            self.y_upper,
            self.y_lower,
            self.y_mean,
        ]
        .iter()
        .all(|value| value.is_finite())
    }

    /// Upper cap, stem, lower cap, then the two cross arms.
    #[must_use]
    pub fn lines(&self, color: Color) -> [LinePrimitive; 5] {
        let width = self.stroke_width;
        let arm = MEAN_CROSS_ARM_PX;
        [
            LinePrimitive::new(
                self.x_left,
                self.y_upper,
                self.x_right,
                self.y_upper,
                width,
                color,
            ),
            LinePrimitive::new(self.x, self.y_upper, self.x, self.y_lower, width, color),
            LinePrimitive::new(
                self.x_left,
                self.y_lower,
                self.x_right,
                self.y_lower,
                width,
                color,
            ),
            LinePrimitive::new(
                self.x - arm,
                self.y_mean - arm,
                self.x + arm,
                self.y_mean + arm,
                width,
                color,
            ),
            LinePrimitive::new(
                self.x + arm,
                self.y_mean - arm,
                self.x - arm,
                self.y_mean + arm,
                width,
                color,
            ),
        ]
    }
}

#[must_use]
pub fn project_whisker(
    record: &IntervalRecord,
    position: usize,
    transform: &dyn CoordinateTransform,
) -> WhiskerGlyph {
    let center = position as f64;
    WhiskerGlyph {
        position,
        x: transform.transform_x(center),
        x_left: transform.transform_x(center - WHISKER_HALF_WIDTH),
        x_right: transform.transform_x(center + WHISKER_HALF_WIDTH),
        y_upper: transform.transform_y(record.upper),
        y_lower: transform.transform_y(record.lower),
        y_mean: transform.transform_y(record.mean),
        stroke_width: if record.emphasized {
            EMPHASIZED_STROKE_WIDTH_PX
        } else {
            REGULAR_STROKE_WIDTH_PX
        },
    }
}

/// Projects every record of `series` in display order.
#[must_use]
pub fn project_whiskers(
    series: &IntervalSeries,
    transform: &dyn CoordinateTransform,
) -> Vec<WhiskerGlyph> {
    series
        .iter()
        .enumerate()
        .map(|(index, record)| project_whisker(record, index + 1, transform))
        .collect()
}

/// Interval (forest) plot: one whisker glyph per record and record labels on
/// the categorical axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalPlot {
    series: IntervalSeries,
}

impl IntervalPlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_series(series: IntervalSeries) -> Self {
        Self { series }
    }

    #[must_use]
    pub fn series(&self) -> &IntervalSeries {
        &self.series
    }

    pub fn add_interval(
        &mut self,
        label: impl Into<String>,
        mean: f64,
        upper: f64,
        lower: f64,
        emphasized: bool,
    ) -> usize {
        self.series.add_interval(label, mean, upper, lower, emphasized)
    }

    pub fn push(&mut self, record: IntervalRecord) -> usize {
        self.series.push(record)
    }

    pub fn clear_all(&mut self) {
        self.series.clear_all();
    }
}

impl PlotSeries for IntervalPlot {
    fn has_content(&self) -> bool {
        !self.series.is_empty()
    }

    fn x_range(&self) -> AxisRange {
        self.series.index_range()
    }

    fn y_range(&self) -> AxisRange {
        self.series.value_range()
    }

    fn paint_content(
        &self,
        frame: &mut RenderFrame,
        transform: &dyn CoordinateTransform,
        style: &RenderStyle,
    ) -> ChartResult<()> {
        for (index, record) in self.series.iter().enumerate() {
            let glyph = project_whisker(record, index + 1, transform);
            if !glyph.is_finite() {
                warn!(
                    position = glyph.position,
                    label = %record.label,
                    "skipping interval glyph with non-finite coordinates"
                );
                continue;
            }
            frame.extend_lines(glyph.lines(style.glyph_color));
        }
        Ok(())
    }

    fn paint_axis_tick(
        &self,
        frame: &mut RenderFrame,
        transform: &dyn CoordinateTransform,
        style: &RenderStyle,
        axis: AxisKind,
        position: f64,
    ) -> ChartResult<TickPaint> {
        if axis != AxisKind::Categorical || self.series.is_empty() {
            return Ok(TickPaint::Default);
        }
        let Some(record) = self.series.get_at_position(position) else {
            trace!(position, "categorical tick has no interval record");
            return Ok(TickPaint::Default);
        };

        let x = transform.transform_x(position);
        let bottom = transform.plot_bounds().bottom();
        let tick_size = style.major_tick_size_px;
        frame.push_line(LinePrimitive::new(
            x,
            bottom,
            x,
            bottom + tick_size,
            style.axis_stroke_width,
            style.axis_color,
        ));

        if !record.label.is_empty() {
            frame.push_text(TextPrimitive::new(
                record.label.clone(),
                x,
                bottom + tick_size * 1.25 + style.x_tick_label_offset_px,
                style.tick_label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }
        Ok(TickPaint::Painted)
    }
}
