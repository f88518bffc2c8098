use serde::{Deserialize, Serialize};

use crate::core::{PlotMargins, Viewport};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can keep chart setup in a JSON file.
/// Only `viewport` is required; every other field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_value_axis_target_ticks")]
    pub value_axis_target_ticks: usize,
    /// Domain used by an axis that has no data yet.
    #[serde(default = "default_fallback_domain")]
    pub fallback_domain: (f64, f64),
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            value_axis_target_ticks: default_value_axis_target_ticks(),
            fallback_domain: default_fallback_domain(),
            render_style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_value_axis_target_ticks(mut self, target_ticks: usize) -> Self {
        self.value_axis_target_ticks = target_ticks;
        self
    }

    #[must_use]
    pub fn with_fallback_domain(mut self, min: f64, max: f64) -> Self {
        self.fallback_domain = (min, max);
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.margins.plot_bounds(self.viewport)?;
        if self.value_axis_target_ticks < 2 {
            return Err(ChartError::InvalidConfig(
                "value axis target ticks must be >= 2".to_owned(),
            ));
        }
        let (min, max) = self.fallback_domain;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidConfig(
                "fallback domain must be finite with min < max".to_owned(),
            ));
        }
        self.render_style.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_value_axis_target_ticks() -> usize {
    5
}

fn default_fallback_domain() -> (f64, f64) {
    (0.0, 1.0)
}
