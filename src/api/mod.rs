mod axis;
mod chart;
mod options;

pub use axis::{AxisScene, bottom_axis, left_axis};
pub use chart::{build_line_chart, render_line_chart};
pub use options::{ChartStyle, DEFAULT_PALETTE, LineChartOptions, TimeSeriesDatum};
