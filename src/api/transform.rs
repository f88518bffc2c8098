use crate::core::{LinearScale, PlotBounds};
use crate::error::ChartResult;

use super::CalibratedAxis;

/// Domain-to-pixel mapping a plot paints against.
///
/// The chart container owns scale and offset; plots only call through this
/// trait.
pub trait CoordinateTransform {
    fn transform_x(&self, value: f64) -> f64;
    fn transform_y(&self, value: f64) -> f64;
    fn plot_bounds(&self) -> PlotBounds;
}

/// Transform built from the two calibrated axes of one frame.
///
/// The categorical axis runs left to right. The value axis runs bottom to
/// top, so larger values get smaller pixel `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    x_scale: LinearScale,
    y_scale: LinearScale,
    bounds: PlotBounds,
}

impl AxisTransform {
    pub fn new(
        x_axis: &CalibratedAxis,
        y_axis: &CalibratedAxis,
        bounds: PlotBounds,
    ) -> ChartResult<Self> {
        let x_scale = LinearScale::new(
            x_axis.domain.0,
            x_axis.domain.1,
            bounds.left(),
            bounds.right(),
        )?;
        let y_scale = LinearScale::new(
            y_axis.domain.0,
            y_axis.domain.1,
            bounds.bottom(),
            bounds.top(),
        )?;
        Ok(Self {
            x_scale,
            y_scale,
            bounds,
        })
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }
}

impl CoordinateTransform for AxisTransform {
    fn transform_x(&self, value: f64) -> f64 {
        self.x_scale.domain_to_pixel(value)
    }

    fn transform_y(&self, value: f64) -> f64 {
        self.y_scale.domain_to_pixel(value)
    }

    fn plot_bounds(&self) -> PlotBounds {
        self.bounds
    }
}
