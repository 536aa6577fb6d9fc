use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::core::{Curve, Margins, PlotArea, ScaleKind, Viewport};
use crate::error::{ChartError, ChartResult};

/// Default ordered series palette (the classic ten-color categorical scheme).
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Convenience record for callers without their own row type.
///
/// `time` is a Unix epoch timestamp in milliseconds; `value` is the plotted
/// measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesDatum {
    pub time: f64,
    pub value: f64,
}

impl TimeSeriesDatum {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    /// Builds a datum from an RFC 3339 timestamp, the shape data loaders
    /// usually hand over before charting.
    pub fn from_rfc3339(timestamp: &str, value: f64) -> ChartResult<Self> {
        let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|err| {
            ChartError::InvalidInput(format!("unparseable timestamp `{timestamp}`: {err}"))
        })?;
        Ok(Self {
            time: parsed.timestamp_millis() as f64,
            value,
        })
    }
}

/// Rendering parameters with documented defaults.
///
/// This type is serializable so host applications can persist/load chart
/// styling without inventing their own ad-hoc format; unknown-age documents
/// fall back to defaults per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default)]
    pub curve: Curve,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_x_scale")]
    pub x_scale: ScaleKind,
    #[serde(default = "default_y_scale")]
    pub y_scale: ScaleKind,
    /// Explicit x pixel extent `[left, right]`; derived from margins when absent.
    #[serde(default)]
    pub x_range: Option<(f64, f64)>,
    /// Explicit y pixel extent `[bottom, top]`; derived from margins when absent.
    #[serde(default)]
    pub y_range: Option<(f64, f64)>,
    /// Lower bound of the y domain. Zero keeps bars-to-baseline honesty for
    /// quantity data; set to another finite value for tightly framed axes.
    #[serde(default)]
    pub y_baseline: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_line_end")]
    pub stroke_linecap: String,
    #[serde(default = "default_line_end")]
    pub stroke_linejoin: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_stroke_opacity")]
    pub stroke_opacity: f64,
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    400
}

fn default_x_scale() -> ScaleKind {
    ScaleKind::Time
}

fn default_y_scale() -> ScaleKind {
    ScaleKind::Linear
}

fn default_color() -> String {
    "currentColor".to_owned()
}

fn default_line_end() -> String {
    "round".to_owned()
}

fn default_stroke_width() -> f64 {
    1.5
}

fn default_stroke_opacity() -> f64 {
    1.0
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            curve: Curve::default(),
            margins: Margins::default(),
            width: default_width(),
            height: default_height(),
            x_scale: default_x_scale(),
            y_scale: default_y_scale(),
            x_range: None,
            y_range: None,
            y_baseline: 0.0,
            color: default_color(),
            stroke_linecap: default_line_end(),
            stroke_linejoin: default_line_end(),
            stroke_width: default_stroke_width(),
            stroke_opacity: default_stroke_opacity(),
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::new(self.viewport(), self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let plot = self.plot_area();
        if !plot.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidOptions(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_opacity.is_finite() || !(0.0..=1.0).contains(&self.stroke_opacity) {
            return Err(ChartError::InvalidOptions(
                "stroke opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.y_baseline.is_finite() {
            return Err(ChartError::InvalidOptions(
                "y baseline must be finite".to_owned(),
            ));
        }
        for (name, range) in [("x_range", self.x_range), ("y_range", self.y_range)] {
            if let Some((a, b)) = range {
                if !a.is_finite() || !b.is_finite() {
                    return Err(ChartError::InvalidOptions(format!(
                        "{name} bounds must be finite"
                    )));
                }
            }
        }
        if self.color.is_empty() {
            return Err(ChartError::InvalidOptions(
                "stroke color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidOptions(format!("style serialization failed: {err}")))
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        let style: Self = serde_json::from_str(json).map_err(|err| {
            ChartError::InvalidOptions(format!("style deserialization failed: {err}"))
        })?;
        style.validate()?;
        Ok(style)
    }
}

/// Per-invocation chart configuration: accessors, axis caption, styling.
///
/// `get_x` and `get_y` project each record into numeric x/y values; the
/// optional `get_series` accessor yields a category key per record and
/// switches the builder into multi-series mode.
pub struct LineChartOptions<'a, D> {
    pub(crate) get_x: Box<dyn Fn(&D) -> f64 + 'a>,
    pub(crate) get_y: Box<dyn Fn(&D) -> f64 + 'a>,
    pub(crate) get_series: Option<Box<dyn Fn(&D) -> String + 'a>>,
    pub(crate) y_label: String,
    pub(crate) palette: Vec<String>,
    pub(crate) style: ChartStyle,
}

impl<'a, D> LineChartOptions<'a, D> {
    pub fn new(
        get_x: impl Fn(&D) -> f64 + 'a,
        get_y: impl Fn(&D) -> f64 + 'a,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            get_x: Box::new(get_x),
            get_y: Box::new(get_y),
            get_series: None,
            y_label: y_label.into(),
            palette: DEFAULT_PALETTE.iter().map(|&c| c.to_owned()).collect(),
            style: ChartStyle::default(),
        }
    }

    /// Enables multi-series grouping with a category accessor.
    #[must_use]
    pub fn with_series(mut self, get_series: impl Fn(&D) -> String + 'a) -> Self {
        self.get_series = Some(Box::new(get_series));
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the ordered series palette, cycled by series index.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    #[must_use]
    pub fn is_multi_series(&self) -> bool {
        self.get_series.is_some()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.style.validate()?;
        if self.y_label.is_empty() {
            return Err(ChartError::InvalidOptions(
                "y-axis label must not be empty".to_owned(),
            ));
        }
        if self.get_series.is_some() && self.palette.is_empty() {
            return Err(ChartError::InvalidOptions(
                "multi-series charts need a non-empty palette".to_owned(),
            ));
        }
        Ok(())
    }
}

impl<D> std::fmt::Debug for LineChartOptions<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineChartOptions")
            .field("y_label", &self.y_label)
            .field("multi_series", &self.get_series.is_some())
            .field("palette", &self.palette)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
