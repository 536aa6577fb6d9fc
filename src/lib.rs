//! linechart-svg: static SVG line charts from tabular time-series data.
//!
//! The crate is a pure, synchronous transformation: records plus options in,
//! a detached SVG document string out. Accessor functions project arbitrary
//! record shapes into x/y columns; an optional category accessor turns the
//! same builder into a multi-series chart with one stroked path and end
//! label per series.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartStyle, LineChartOptions, TimeSeriesDatum, build_line_chart, render_line_chart};
pub use error::{ChartError, ChartResult};
