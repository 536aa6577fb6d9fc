//! Axis scene builders.
//!
//! Pure functions that turn a scale plus plot geometry into line and text
//! primitives. Layout constants follow common hand-authored SVG axes: 6 px
//! tick marks, labels padded 9 px past the tick, 10 px sans-serif type.

use crate::core::{AxisTicks, ContinuousScale, PlotArea, axis_ticks, x_tick_count, y_tick_count};
use crate::render::{LinePrimitive, StrokeStyle, TextAnchor, TextPrimitive};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const LABEL_FONT_SIZE: f64 = 10.0;
const GRIDLINE_OPACITY: f64 = 0.1;

/// Primitives for one rendered axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisScene {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

fn scale_ticks(scale: &ContinuousScale, count: usize) -> AxisTicks {
    let (start, stop) = scale.domain();
    axis_ticks(scale.kind(), start, stop, count)
}

/// Bottom axis: a domain line with outer ticks suppressed, downward tick
/// marks, and centered labels beneath them.
#[must_use]
pub fn bottom_axis(scale: &ContinuousScale, plot: PlotArea) -> AxisScene {
    let mut scene = AxisScene::default();
    let y = plot.bottom();
    let (range_start, range_end) = scale.range();

    scene.lines.push(LinePrimitive::new(
        range_start,
        y,
        range_end,
        y,
        StrokeStyle::axis(),
    ));

    let ticks = scale_ticks(scale, x_tick_count(f64::from(plot.viewport.width)));
    for (value, label) in ticks.values.iter().zip(&ticks.labels) {
        let x = scale.position(*value);
        scene
            .lines
            .push(LinePrimitive::new(x, y, x, y + TICK_SIZE, StrokeStyle::axis()));
        scene.texts.push(
            TextPrimitive::new(
                label.clone(),
                x,
                y + TICK_SIZE + TICK_PADDING,
                LABEL_FONT_SIZE,
                "currentColor",
                TextAnchor::Middle,
            )
            .with_dy_em(0.71),
        );
    }

    scene
}

/// Left axis: no domain line, leftward tick marks with right-anchored
/// labels, faint gridlines across the plot, and the axis caption at the
/// top-left corner of the chart.
#[must_use]
pub fn left_axis(scale: &ContinuousScale, plot: PlotArea, y_label: &str) -> AxisScene {
    let mut scene = AxisScene::default();
    let x = plot.left();

    let ticks = scale_ticks(scale, y_tick_count(f64::from(plot.viewport.height)));
    for (value, label) in ticks.values.iter().zip(&ticks.labels) {
        let y = scale.position(*value);
        scene
            .lines
            .push(LinePrimitive::new(x - TICK_SIZE, y, x, y, StrokeStyle::axis()));
        scene.lines.push(LinePrimitive::new(
            x,
            y,
            plot.right(),
            y,
            StrokeStyle::axis().with_opacity(GRIDLINE_OPACITY),
        ));
        scene.texts.push(
            TextPrimitive::new(
                label.clone(),
                x - TICK_SIZE - TICK_PADDING,
                y,
                LABEL_FONT_SIZE,
                "currentColor",
                TextAnchor::End,
            )
            .with_dy_em(0.32),
        );
    }

    scene.texts.push(TextPrimitive::new(
        y_label,
        0.0,
        10.0,
        LABEL_FONT_SIZE,
        "currentColor",
        TextAnchor::Start,
    ));

    scene
}
