use crate::core::AxisRange;
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::{AxisKind, CoordinateTransform, RenderStyle};

/// Outcome of [`PlotSeries::paint_axis_tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPaint {
    /// The plot drew the tick; the container must not draw it again.
    Painted,
    /// The container draws its default numeric tick.
    Default,
}

/// Capability a plot exposes to the chart container.
///
/// The container owns axes, transform and renderer. A plot contributes
/// ranges, paints its content, and may take over individual axis ticks.
pub trait PlotSeries {
    /// Whether the plot has anything to draw.
    fn has_content(&self) -> bool;

    /// Range this plot needs on the horizontal (categorical) axis.
    fn x_range(&self) -> AxisRange;

    /// Range this plot needs on the vertical (value) axis.
    fn y_range(&self) -> AxisRange;

    /// Called once per frame after the transform is known.
    fn calibrate(&mut self, _transform: &dyn CoordinateTransform) {}

    fn paint_content(
        &self,
        frame: &mut RenderFrame,
        transform: &dyn CoordinateTransform,
        style: &RenderStyle,
    ) -> ChartResult<()>;

    fn paint_axis_tick(
        &self,
        _frame: &mut RenderFrame,
        _transform: &dyn CoordinateTransform,
        _style: &RenderStyle,
        _axis: AxisKind,
        _position: f64,
    ) -> ChartResult<TickPaint> {
        Ok(TickPaint::Default)
    }
}
