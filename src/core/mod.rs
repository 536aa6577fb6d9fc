pub mod path;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod types;

pub use path::{Curve, PathCommand, series_path_commands};
pub use scale::{ContinuousScale, ScaleKind};
pub use series::{ExtractedValues, SeriesColumn, extract, group_series, is_truthy};
pub use ticks::{AxisTicks, TimeInterval, axis_ticks, x_tick_count, y_tick_count};
pub use types::{Margins, PlotArea, Viewport, finite_max, finite_min};
