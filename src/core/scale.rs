use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Which scale family an axis uses.
///
/// Both kinds evaluate the same affine domain-to-range mapping; the kind
/// drives tick generation and label formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    /// Domain values are Unix epoch milliseconds.
    Time,
    Linear,
}

/// Continuous forward mapping from a domain interval to a pixel interval.
///
/// Inversion is intentionally not offered; the chart builder only ever maps
/// data values into screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousScale {
    kind: ScaleKind,
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl ContinuousScale {
    pub fn new(
        kind: ScaleKind,
        domain: (f64, f64),
        range: (f64, f64),
    ) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidInput(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidOptions(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            kind,
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value into the pixel range.
    ///
    /// A collapsed domain (start == end) maps every value to the range
    /// midpoint so single-point series still land inside the plot.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}
