use serde::{Deserialize, Serialize};

/// Outer chart size in pixels.
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

/// Plot inset in pixels, measured from each viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

impl Margins {
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
    }
}

/// Viewport with margins applied, exposing the plot-area edges used as
/// scale ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl PlotArea {
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self { viewport, margins }
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn right(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.right
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.bottom
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.right() - self.left()
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.bottom() - self.top()
    }

    /// True when the margins leave a drawable region.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.viewport.is_valid()
            && self.margins.is_finite()
            && self.inner_width() > 0.0
            && self.inner_height() > 0.0
    }
}

/// Minimum of the finite values in `values`, ignoring NaN and infinities.
#[must_use]
pub fn finite_min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f64::min)
}

/// Maximum of the finite values in `values`, ignoring NaN and infinities.
#[must_use]
pub fn finite_max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f64::max)
}
