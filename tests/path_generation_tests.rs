use linechart_svg::core::{Curve, PathCommand, series_path_commands};

fn defined(ys: &[f64]) -> Vec<Option<f64>> {
    ys.iter().map(|&y| Some(y)).collect()
}

#[test]
fn linear_curve_emits_moveto_then_linetos() {
    let xs = [0.0, 10.0, 20.0];
    let ys = defined(&[5.0, 15.0, 10.0]);
    let commands = series_path_commands(&xs, &ys, Curve::Linear);

    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo { x: 0.0, y: 5.0 },
            PathCommand::LineTo { x: 10.0, y: 15.0 },
            PathCommand::LineTo { x: 20.0, y: 10.0 },
        ]
    );
}

#[test]
fn gaps_split_the_path_into_runs() {
    let xs = [0.0, 10.0, 20.0, 30.0, 40.0];
    let ys = vec![Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)];
    let commands = series_path_commands(&xs, &ys, Curve::Linear);

    let moveto_count = commands
        .iter()
        .filter(|c| matches!(c, PathCommand::MoveTo { .. }))
        .count();
    assert_eq!(moveto_count, 2);
    assert_eq!(commands.len(), 4);
    assert_eq!(commands[2], PathCommand::MoveTo { x: 30.0, y: 3.0 });
}

#[test]
fn command_endpoints_cover_exactly_the_defined_indices() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = vec![Some(0.5), None, Some(1.5), Some(2.5)];
    let commands = series_path_commands(&xs, &ys, Curve::Linear);

    let endpoints: Vec<(f64, f64)> = commands.iter().map(|c| c.end_point()).collect();
    assert_eq!(endpoints, vec![(0.0, 0.5), (2.0, 1.5), (3.0, 2.5)]);
}

#[test]
fn all_gaps_yield_no_commands() {
    let xs = [0.0, 1.0];
    let ys = vec![None, None];
    assert!(series_path_commands(&xs, &ys, Curve::Linear).is_empty());
}

#[test]
fn single_defined_point_yields_a_lone_moveto() {
    let xs = [0.0, 1.0, 2.0];
    let ys = vec![None, Some(7.0), None];
    let commands = series_path_commands(&xs, &ys, Curve::MonotoneX);

    assert_eq!(commands, vec![PathCommand::MoveTo { x: 1.0, y: 7.0 }]);
}

#[test]
fn step_after_inserts_horizontal_then_vertical_segments() {
    let xs = [0.0, 10.0];
    let ys = defined(&[2.0, 6.0]);
    let commands = series_path_commands(&xs, &ys, Curve::StepAfter);

    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo { x: 0.0, y: 2.0 },
            PathCommand::LineTo { x: 10.0, y: 2.0 },
            PathCommand::LineTo { x: 10.0, y: 6.0 },
        ]
    );
}

#[test]
fn monotone_two_point_run_degrades_to_a_straight_segment() {
    let xs = [0.0, 10.0];
    let ys = defined(&[2.0, 6.0]);
    let commands = series_path_commands(&xs, &ys, Curve::MonotoneX);

    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo { x: 0.0, y: 2.0 },
            PathCommand::LineTo { x: 10.0, y: 6.0 },
        ]
    );
}

#[test]
fn monotone_curve_emits_cubics_through_every_point() {
    let xs = [0.0, 10.0, 20.0, 30.0];
    let ys = defined(&[0.0, 5.0, 5.0, 10.0]);
    let commands = series_path_commands(&xs, &ys, Curve::MonotoneX);

    assert_eq!(commands.len(), 4);
    assert!(matches!(commands[0], PathCommand::MoveTo { .. }));
    for (i, command) in commands[1..].iter().enumerate() {
        match *command {
            PathCommand::CubicTo { x: cx, y: cy, .. } => {
                assert!((cx - xs[i + 1]).abs() <= 1e-9);
                assert!((cy - ys[i + 1].expect("defined")).abs() <= 1e-9);
            }
            other => panic!("expected cubic segment, got {other:?}"),
        }
    }
}

#[test]
fn monotone_segments_never_overshoot_on_monotone_data() {
    // Strictly increasing data: every control point must stay inside the
    // segment's y-interval, the shape-preservation contract.
    let xs = [0.0, 10.0, 20.0, 30.0, 40.0];
    let ys = defined(&[0.0, 1.0, 4.0, 9.0, 16.0]);
    let commands = series_path_commands(&xs, &ys, Curve::MonotoneX);

    let mut prev_y = 0.0;
    for command in &commands[1..] {
        if let PathCommand::CubicTo { y1, y2, y, .. } = *command {
            assert!(y1 >= prev_y - 1e-9 && y1 <= y + 1e-9);
            assert!(y2 >= prev_y - 1e-9 && y2 <= y + 1e-9);
            prev_y = y;
        }
    }
}
