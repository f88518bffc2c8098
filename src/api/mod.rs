//! Chart container and the plots it hosts.

mod axis_ticks;
mod engine;
mod engine_config;
mod interval_chart;
mod interval_plot;
mod invalidation;
mod plot_series;
mod reference_line_plot;
mod render_style;
mod transform;

pub use axis_ticks::{
    AxisKind, AxisTicks, CATEGORICAL_AXIS_PADDING, CalibratedAxis, calibrate_categorical_axis,
    calibrate_value_axis, format_tick_value, nice_tick_step, tick_label_precision,
};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use interval_chart::IntervalChart;
pub use interval_plot::{
    EMPHASIZED_STROKE_WIDTH_PX, IntervalPlot, MEAN_CROSS_ARM_PX, REGULAR_STROKE_WIDTH_PX,
    WHISKER_HALF_WIDTH, WhiskerGlyph, project_whisker, project_whiskers,
};
pub use invalidation::InvalidationLevel;
pub use plot_series::{PlotSeries, TickPaint};
pub use reference_line_plot::HorizontalLinePlot;
pub use render_style::RenderStyle;
pub use transform::{AxisTransform, CoordinateTransform};
