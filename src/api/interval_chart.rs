use tracing::debug;

use crate::core::IntervalSeries;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, IntervalPlot};

/// Chart container hosting an [`IntervalPlot`].
pub type IntervalChart<R> = ChartEngine<IntervalPlot, R>;

impl<R: Renderer> ChartEngine<IntervalPlot, R> {
    /// Creates an empty interval chart.
    pub fn interval_chart(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::new(renderer, IntervalPlot::new(), config)
    }

    /// Appends an interval at the next categorical position and requests a
    /// full repaint. Returns the 1-based position.
    ///
    /// Bounds are not validated; see [`IntervalSeries::add_interval`].
    pub fn add_interval(
        &mut self,
        label: impl Into<String>,
        mean: f64,
        upper: f64,
        lower: f64,
        emphasized: bool,
    ) -> usize {
        self.update_plot(|plot| plot.add_interval(label, mean, upper, lower, emphasized))
    }

    /// Removes every interval and extra plot, resets both axis ranges and
    /// drops the last materialized frame.
    pub fn clear_all(&mut self) {
        debug!(
            intervals = self.plot().series().len(),
            plots = self.plot_count(),
            "clear interval chart"
        );
        self.update_plot(IntervalPlot::clear_all);
        self.remove_all_plots();
    }

    #[must_use]
    pub fn intervals(&self) -> &IntervalSeries {
        self.plot().series()
    }
}
