pub mod axis_range;
pub mod interval;
pub mod interval_series;
pub mod primitives;
pub mod scale;
pub mod types;

pub use axis_range::AxisRange;
pub use interval::IntervalRecord;
pub use interval_series::IntervalSeries;
pub use scale::LinearScale;
pub use types::{PlotBounds, PlotMargins, Viewport};
