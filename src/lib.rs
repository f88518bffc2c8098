//! interval-chart: confidence-interval (forest plot) charts.
//!
//! An [`IntervalChart`] stores named intervals (mean, upper, lower, emphasis),
//! keeps its axis ranges up to date on every insertion, and paints each
//! interval as a whisker-and-cross glyph into a backend-agnostic
//! [`render::RenderFrame`]. Any [`render::Renderer`] can consume the frame.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig, IntervalChart, IntervalPlot, PlotSeries};
pub use core::{IntervalRecord, IntervalSeries};
pub use error::{ChartError, ChartResult};
