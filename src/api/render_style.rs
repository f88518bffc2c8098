use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for axes, labels and glyphs of the current render frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub label_color: Color,
    /// Single foreground color shared by every whisker glyph.
    pub glyph_color: Color,
    pub reference_line_color: Color,
    pub major_tick_size_px: f64,
    pub tick_label_font_size_px: f64,
    /// Extra gap between the categorical tick end and the label baseline.
    pub x_tick_label_offset_px: f64,
    /// Gap between the value-axis tick end and the right edge of its label.
    pub y_tick_label_offset_px: f64,
    /// Placeholder drawn when nothing has content. Empty disables it.
    pub no_data_text: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            axis_stroke_width: 1.0,
            label_color: Color::BLACK,
            glyph_color: Color::BLACK,
            reference_line_color: Color::rgb(0.55, 0.55, 0.55),
            major_tick_size_px: 5.0,
            tick_label_font_size_px: 11.0,
            x_tick_label_offset_px: 12.0,
            y_tick_label_offset_px: 4.0,
            no_data_text: "No data".to_owned(),
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.axis_color.validate()?;
        self.label_color.validate()?;
        self.glyph_color.validate()?;
        self.reference_line_color.validate()?;

        if !self.axis_stroke_width.is_finite() || self.axis_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.tick_label_font_size_px.is_finite() || self.tick_label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "tick label font size must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("major tick size", self.major_tick_size_px),
            ("x tick label offset", self.x_tick_label_offset_px),
            ("y tick label offset", self.y_tick_label_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
