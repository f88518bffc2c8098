use tracing::debug;

use crate::core::{AxisRange, PlotBounds, Viewport};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{
    AxisKind, AxisTransform, CalibratedAxis, ChartEngineConfig, CoordinateTransform,
    InvalidationLevel, PlotSeries, RenderStyle, TickPaint, calibrate_categorical_axis,
    calibrate_value_axis,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Baseline shift that vertically centers a label on a value-axis tick.
const VALUE_LABEL_BASELINE_RATIO: f64 = 0.35;

/// Chart container: owns the renderer, axes, style and invalidation state,
/// and paints the injected primary plot, or the extra plots while the
/// primary plot is empty.
///
/// Not thread-safe by contract. Keep every call on the thread that owns the
/// UI.
pub struct ChartEngine<P: PlotSeries, R: Renderer> {
    renderer: R,
    plot: P,
    plots: Vec<Box<dyn PlotSeries>>,
    config: ChartEngineConfig,
    bounds: PlotBounds,
    pending_invalidation: InvalidationLevel,
    last_frame: Option<RenderFrame>,
}

impl<P: PlotSeries, R: Renderer> ChartEngine<P, R> {
    pub fn new(renderer: R, plot: P, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let bounds = config.margins.plot_bounds(config.viewport)?;

        Ok(Self {
            renderer,
            plot,
            plots: Vec::new(),
            config,
            bounds,
            pending_invalidation: InvalidationLevel::Full,
            last_frame: None,
        })
    }

    #[must_use]
    pub fn plot(&self) -> &P {
        &self.plot
    }

    /// Mutates the primary plot and requests a full repaint.
    pub fn update_plot<T>(&mut self, update: impl FnOnce(&mut P) -> T) -> T {
        let output = update(&mut self.plot);
        self.invalidate(InvalidationLevel::Full);
        output
    }

    /// Adds a plot drawn only while the primary plot has no content. Its
    /// ranges still widen the axes.
    pub fn add_plot(&mut self, plot: Box<dyn PlotSeries>) {
        self.plots.push(plot);
        self.invalidate(InvalidationLevel::Full);
    }

    /// Drops every extra plot along with the last materialized frame.
    pub fn remove_all_plots(&mut self) {
        self.plots.clear();
        self.last_frame = None;
        self.invalidate(InvalidationLevel::Full);
    }

    #[must_use]
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    /// The primary plot decides when it has content; otherwise any extra
    /// plot with content counts.
    #[must_use]
    pub fn has_contents(&self) -> bool {
        self.plot.has_content() || self.plots.iter().any(|plot| plot.has_content())
    }

    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        self.plots
            .iter()
            .fold(self.plot.x_range(), |range, plot| range.union(plot.x_range()))
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        self.plots
            .iter()
            .fold(self.plot.y_range(), |range, plot| range.union(plot.y_range()))
    }

    /// Categorical (x) and value (y) axes for the current ranges.
    pub fn calibrated_axes(&self) -> ChartResult<(CalibratedAxis, CalibratedAxis)> {
        let x_axis = calibrate_categorical_axis(self.x_range(), self.config.fallback_domain);
        let y_axis = calibrate_value_axis(
            self.y_range(),
            self.config.value_axis_target_ticks,
            self.config.fallback_domain,
        )?;
        Ok((x_axis, y_axis))
    }

    pub fn coordinate_transform(&self) -> ChartResult<AxisTransform> {
        let (x_axis, y_axis) = self.calibrated_axes()?;
        AxisTransform::new(&x_axis, &y_axis, self.bounds)
    }

    /// Materializes the scene for the current state without rendering it.
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        let style = &self.config.render_style;

        if !self.has_contents() {
            paint_no_data(&mut frame, self.bounds, style);
            debug!(texts = frame.texts.len(), "built empty chart frame");
            return Ok(frame);
        }

        let (x_axis, y_axis) = self.calibrated_axes()?;
        let transform = AxisTransform::new(&x_axis, &y_axis, self.bounds)?;
        self.plot.calibrate(&transform);
        for plot in &mut self.plots {
            plot.calibrate(&transform);
        }

        paint_plot_frame(&mut frame, self.bounds, style);
        for axis in [&y_axis, &x_axis] {
            for &position in &axis.ticks {
                let painted =
                    self.plot
                        .paint_axis_tick(&mut frame, &transform, style, axis.kind, position)?;
                if painted == TickPaint::Default {
                    paint_default_tick(&mut frame, &transform, style, axis, position);
                }
            }
        }

        // A primary plot with content replaces the extra plots entirely.
        if self.plot.has_content() {
            self.plot.paint_content(&mut frame, &transform, style)?;
        } else {
            for plot in self.plots.iter().filter(|plot| plot.has_content()) {
                plot.paint_content(&mut frame, &transform, style)?;
            }
        }

        debug!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "built chart frame"
        );
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.finish_render(frame);
        Ok(())
    }

    /// Renders into an external Cairo context, e.g. from a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.finish_render(frame);
        Ok(())
    }

    fn finish_render(&mut self, frame: RenderFrame) {
        self.last_frame = Some(frame);
        self.pending_invalidation = InvalidationLevel::None;
    }

    /// Frame handed to the renderer by the last successful render.
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.pending_invalidation
    }

    /// Asks for a redraw without any state change.
    pub fn request_repaint(&mut self) {
        self.invalidate(InvalidationLevel::Light);
    }

    fn invalidate(&mut self, level: InvalidationLevel) {
        self.pending_invalidation = self.pending_invalidation.max(level);
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let bounds = self.config.margins.plot_bounds(viewport)?;
        debug!(width = viewport.width, height = viewport.height, "set viewport");
        self.config.viewport = viewport;
        self.bounds = bounds;
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    #[must_use]
    pub fn plot_bounds(&self) -> PlotBounds {
        self.bounds
    }

    #[must_use]
    pub fn render_style(&self) -> &RenderStyle {
        &self.config.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        debug!("set render style");
        self.config.render_style = style;
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn paint_plot_frame(frame: &mut RenderFrame, bounds: PlotBounds, style: &RenderStyle) {
    frame.push_line(LinePrimitive::new(
        bounds.left(),
        bounds.top(),
        bounds.left(),
        bounds.bottom(),
        style.axis_stroke_width,
        style.axis_color,
    ));
    frame.push_line(LinePrimitive::new(
        bounds.left(),
        bounds.bottom(),
        bounds.right(),
        bounds.bottom(),
        style.axis_stroke_width,
        style.axis_color,
    ));
}

fn paint_default_tick(
    frame: &mut RenderFrame,
    transform: &dyn CoordinateTransform,
    style: &RenderStyle,
    axis: &CalibratedAxis,
    position: f64,
) {
    let bounds = transform.plot_bounds();
    let tick_size = style.major_tick_size_px;
    let label = axis.tick_label(position);

    match axis.kind {
        AxisKind::Value => {
            let y = transform.transform_y(position);
            frame.push_line(LinePrimitive::new(
                bounds.left() - tick_size,
                y,
                bounds.left(),
                y,
                style.axis_stroke_width,
                style.axis_color,
            ));
            frame.push_text(TextPrimitive::new(
                label,
                bounds.left() - tick_size - style.y_tick_label_offset_px,
                y + style.tick_label_font_size_px * VALUE_LABEL_BASELINE_RATIO,
                style.tick_label_font_size_px,
                style.label_color,
                TextHAlign::Right,
            ));
        }
        AxisKind::Categorical => {
            let x = transform.transform_x(position);
            frame.push_line(LinePrimitive::new(
                x,
                bounds.bottom(),
                x,
                bounds.bottom() + tick_size,
                style.axis_stroke_width,
                style.axis_color,
            ));
            frame.push_text(TextPrimitive::new(
                label,
                x,
                bounds.bottom() + tick_size * 1.25 + style.x_tick_label_offset_px,
                style.tick_label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }
    }
}

fn paint_no_data(frame: &mut RenderFrame, bounds: PlotBounds, style: &RenderStyle) {
    if style.no_data_text.is_empty() {
        return;
    }
    frame.push_text(TextPrimitive::new(
        style.no_data_text.clone(),
        bounds.center_x(),
        bounds.center_y(),
        style.tick_label_font_size_px,
        style.label_color,
        TextHAlign::Center,
    ));
}
