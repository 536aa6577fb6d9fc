use serde::{Deserialize, Serialize};

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};

/// Stroke styling shared by line and path primitives.
///
/// Colors are CSS paint strings passed through to the SVG output verbatim,
/// so values like `currentColor` or `steelblue` keep their meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub opacity: f64,
    pub linecap: String,
    pub linejoin: String,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "currentColor".to_owned(),
            width: 1.5,
            opacity: 1.0,
            linecap: "round".to_owned(),
            linejoin: "round".to_owned(),
        }
    }
}

impl StrokeStyle {
    /// Hairline stroke used for axis lines and tick marks.
    #[must_use]
    pub fn axis() -> Self {
        Self {
            color: "currentColor".to_owned(),
            width: 1.0,
            opacity: 1.0,
            linecap: "butt".to_owned(),
            linejoin: "miter".to_owned(),
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.color.is_empty() {
            return Err(ChartError::InvalidOptions(
                "stroke color must not be empty".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidOptions(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidOptions(
                "stroke opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one straight segment in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: StrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: StrokeStyle) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidInput(
                "line coordinates must be finite".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// Draw command for one stroked, unfilled path in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub stroke: StrokeStyle,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(commands: Vec<PathCommand>, stroke: StrokeStyle) -> Self {
        Self { commands, stroke }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.commands.is_empty() {
            return Err(ChartError::InvalidInput(
                "path primitive must carry at least one command".to_owned(),
            ));
        }
        for command in &self.commands {
            let finite = match *command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                    x.is_finite() && y.is_finite()
                }
                PathCommand::CubicTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    x1.is_finite()
                        && y1.is_finite()
                        && x2.is_finite()
                        && y2.is_finite()
                        && x.is_finite()
                        && y.is_finite()
                }
            };
            if !finite {
                return Err(ChartError::InvalidInput(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        self.stroke.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Draw command for one label in pixel space.
///
/// `dy_em` is emitted as an em-unit `dy` attribute so labels baseline-align
/// the way axis text does in hand-authored SVG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub dy_em: f64,
    pub font_size_px: f64,
    pub color: String,
    pub anchor: TextAnchor,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: impl Into<String>,
        anchor: TextAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            dy_em: 0.0,
            font_size_px,
            color: color.into(),
            anchor,
        }
    }

    #[must_use]
    pub fn with_dy_em(mut self, dy_em: f64) -> Self {
        self.dy_em = dy_em;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidInput(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.dy_em.is_finite() {
            return Err(ChartError::InvalidInput(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidOptions(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if self.color.is_empty() {
            return Err(ChartError::InvalidOptions(
                "text color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
