//! The chart-construction pipeline.
//!
//! One parameterized builder covers single- and multi-series charts: a
//! category accessor on the options switches grouping on, everything else is
//! shared. The pipeline is a pure function from (records, options) to a
//! [`RenderFrame`], staged as extraction, validity, scales, paths, render.

use tracing::debug;

use crate::api::axis::{AxisScene, bottom_axis, left_axis};
use crate::api::options::LineChartOptions;
use crate::core::{
    ContinuousScale, finite_max, finite_min, group_series, series_path_commands,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{PathPrimitive, RenderFrame, StrokeStyle, TextAnchor, TextPrimitive, frame_to_svg};

const SERIES_LABEL_OFFSET: f64 = 4.0;
const SERIES_LABEL_FONT_SIZE: f64 = 10.0;

/// Builds the backend-agnostic scene for one chart.
///
/// Fails with [`ChartError::InvalidInput`] on an empty record sequence, when
/// every y-value is non-finite, or when no finite x-value remains to span
/// the x domain; styling problems surface as [`ChartError::InvalidOptions`]
/// before any geometry is computed.
pub fn build_line_chart<D>(
    data: &[D],
    options: &LineChartOptions<'_, D>,
) -> ChartResult<RenderFrame> {
    options.validate()?;
    let style = options.style();
    let plot = style.plot_area();

    let extracted = crate::core::extract(
        data,
        options.get_x.as_ref(),
        options.get_y.as_ref(),
        options.get_series.as_deref(),
    )?;
    debug!(
        records = data.len(),
        valid = extracted.validity.iter().filter(|&&v| v).count(),
        "extracted chart columns"
    );

    let x_domain = match (finite_min(&extracted.xs), finite_max(&extracted.xs)) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            return Err(ChartError::InvalidInput(
                "all x-values are non-finite".to_owned(),
            ));
        }
    };
    // extract() guarantees at least one finite y.
    let y_max = finite_max(&extracted.ys).unwrap_or(style.y_baseline);

    let x_range = style.x_range.unwrap_or((plot.left(), plot.right()));
    let y_range = style.y_range.unwrap_or((plot.bottom(), plot.top()));
    let x_scale = ContinuousScale::new(style.x_scale, x_domain, x_range)?;
    let y_scale = ContinuousScale::new(style.y_scale, (style.y_baseline, y_max), y_range)?;

    let series = group_series(&extracted);
    debug!(series = series.len(), "grouped series columns");

    let mut frame = RenderFrame::new(style.viewport());
    append_scene(&mut frame, bottom_axis(&x_scale, plot));
    append_scene(&mut frame, left_axis(&y_scale, plot, options.y_label()));

    let xs_px: Vec<f64> = extracted.xs.iter().map(|&x| x_scale.position(x)).collect();

    for (index, column) in series.iter().enumerate() {
        let ys_px: Vec<Option<f64>> = column
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if extracted.validity[i] {
                    value.map(|y| y_scale.position(y))
                } else {
                    None
                }
            })
            .collect();

        let commands = series_path_commands(&xs_px, &ys_px, style.curve);
        if commands.is_empty() {
            // Every point of this series is a gap; nothing to stroke.
            continue;
        }

        let color = series_color(options, index);
        frame.paths.push(PathPrimitive::new(
            commands,
            StrokeStyle {
                color: color.clone(),
                width: style.stroke_width,
                opacity: style.stroke_opacity,
                linecap: style.stroke_linecap.clone(),
                linejoin: style.stroke_linejoin.clone(),
            },
        ));

        if options.is_multi_series() {
            // End-of-line label at the last defined value, so short series
            // never index past their own data.
            if let Some(last_y) = last_defined_pixel(&ys_px) {
                frame.texts.push(
                    TextPrimitive::new(
                        column.key.clone(),
                        plot.right() + SERIES_LABEL_OFFSET,
                        last_y,
                        SERIES_LABEL_FONT_SIZE,
                        color,
                        TextAnchor::Start,
                    )
                    .with_dy_em(0.32),
                );
            }
        }
    }

    frame.validate()?;
    Ok(frame)
}

/// Builds the chart and materializes it as a standalone SVG document string.
pub fn render_line_chart<D>(
    data: &[D],
    options: &LineChartOptions<'_, D>,
) -> ChartResult<String> {
    let frame = build_line_chart(data, options)?;
    frame_to_svg(&frame)
}

fn append_scene(frame: &mut RenderFrame, scene: AxisScene) {
    frame.lines.extend(scene.lines);
    frame.texts.extend(scene.texts);
}

fn series_color<D>(options: &LineChartOptions<'_, D>, index: usize) -> String {
    if options.is_multi_series() {
        options.palette[index % options.palette.len()].clone()
    } else {
        options.style().color.clone()
    }
}

fn last_defined_pixel(ys_px: &[Option<f64>]) -> Option<f64> {
    ys_px.iter().rev().find_map(|v| *v)
}
