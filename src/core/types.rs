use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for axis ticks and labels, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 56.0,
            right: 16.0,
            top: 16.0,
            bottom: 40.0,
        }
    }
}

impl PlotMargins {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Resolves the plot rectangle left inside `viewport` after margins.
    pub fn plot_bounds(self, viewport: Viewport) -> ChartResult<PlotBounds> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for (side, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }

        let width = f64::from(viewport.width) - self.left - self.right;
        let height = f64::from(viewport.height) - self.top - self.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "plot margins leave no drawable area in {}x{} viewport",
                viewport.width, viewport.height
            )));
        }

        Ok(PlotBounds {
            x: self.left,
            y: self.top,
            width,
            height,
        })
    }
}

/// Plot rectangle in pixel space. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotBounds {
    #[must_use]
    pub fn left(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.y + self.height / 2.0
    }
}
