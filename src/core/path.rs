use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Interpolation method used to connect consecutive defined points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Curve {
    #[default]
    Linear,
    /// Horizontal segment first, then a vertical step at the next point.
    StepAfter,
    /// Shape-preserving cubic interpolation (Fritsch-Carlson tangents).
    MonotoneX,
}

/// One SVG path command in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
}

impl PathCommand {
    #[must_use]
    pub fn end_point(self) -> (f64, f64) {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => (x, y),
            Self::CubicTo { x, y, .. } => (x, y),
        }
    }
}

type Run = SmallVec<[(f64, f64); 16]>;

/// Builds path commands for one series over the shared index grid.
///
/// `xs_px` holds the scaled x position for every global index; `ys_px` holds
/// the scaled y position where the series is defined and `None` where the
/// validity mask or the series' sparse column leaves a gap. Each contiguous
/// defined stretch becomes one `MoveTo`-led run, so gaps break the stroke
/// without disturbing index alignment.
#[must_use]
pub fn series_path_commands(
    xs_px: &[f64],
    ys_px: &[Option<f64>],
    curve: Curve,
) -> Vec<PathCommand> {
    debug_assert_eq!(xs_px.len(), ys_px.len());

    let mut commands = Vec::new();
    let mut run: Run = SmallVec::new();

    for (i, maybe_y) in ys_px.iter().enumerate() {
        match maybe_y {
            Some(y) => run.push((xs_px[i], *y)),
            None => {
                flush_run(&mut commands, &run, curve);
                run.clear();
            }
        }
    }
    flush_run(&mut commands, &run, curve);

    commands
}

fn flush_run(commands: &mut Vec<PathCommand>, run: &[(f64, f64)], curve: Curve) {
    let Some(&(x0, y0)) = run.first() else {
        return;
    };
    commands.push(PathCommand::MoveTo { x: x0, y: y0 });

    match curve {
        Curve::Linear => {
            for &(x, y) in &run[1..] {
                commands.push(PathCommand::LineTo { x, y });
            }
        }
        Curve::StepAfter => {
            let mut prev_y = y0;
            for &(x, y) in &run[1..] {
                commands.push(PathCommand::LineTo { x, y: prev_y });
                commands.push(PathCommand::LineTo { x, y });
                prev_y = y;
            }
        }
        Curve::MonotoneX => emit_monotone(commands, run),
    }
}

/// Cubic segments with Fritsch-Carlson tangents; monotone stretches of the
/// data stay monotone on screen.
fn emit_monotone(commands: &mut Vec<PathCommand>, run: &[(f64, f64)]) {
    let n = run.len();
    if n < 2 {
        return;
    }
    if n == 2 {
        commands.push(PathCommand::LineTo { x: run[1].0, y: run[1].1 });
        return;
    }

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(run[i - 1], run[i], run[i + 1]);
    }
    tangents[0] = endpoint_tangent(run[0], run[1], tangents[1]);
    tangents[n - 1] = endpoint_tangent(run[n - 2], run[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (x0, y0) = run[i];
        let (x1, y1) = run[i + 1];
        let dx = (x1 - x0) / 3.0;
        if dx == 0.0 {
            commands.push(PathCommand::LineTo { x: x1, y: y1 });
            continue;
        }
        commands.push(PathCommand::CubicTo {
            x1: x0 + dx,
            y1: y0 + dx * tangents[i],
            x2: x1 - dx,
            y2: y1 - dx * tangents[i + 1],
            x: x1,
            y: y1,
        });
    }
}

fn interior_tangent(prev: (f64, f64), here: (f64, f64), next: (f64, f64)) -> f64 {
    let h0 = here.0 - prev.0;
    let h1 = next.0 - here.0;
    let s0 = if h0 != 0.0 { (here.1 - prev.1) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (next.1 - here.1) / h1 } else { 0.0 };
    if s0 * s1 <= 0.0 {
        // Local extremum: a flat tangent preserves monotonicity.
        return 0.0;
    }
    let weighted = (s0 * h1 + s1 * h0) / (h0 + h1);
    let limit = 3.0 * s0.abs().min(s1.abs());
    weighted.signum() * weighted.abs().min(limit)
}

fn endpoint_tangent(a: (f64, f64), b: (f64, f64), inner_tangent: f64) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 {
        return inner_tangent;
    }
    (3.0 * (b.1 - a.1) / h - inner_tangent) / 2.0
}
