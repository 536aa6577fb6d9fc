use linechart_svg::core::{ContinuousScale, ScaleKind};

#[test]
fn linear_scale_maps_domain_endpoints_to_range_endpoints() {
    let scale =
        ContinuousScale::new(ScaleKind::Linear, (0.0, 100.0), (40.0, 610.0)).expect("valid scale");

    assert!((scale.position(0.0) - 40.0).abs() <= 1e-9);
    assert!((scale.position(100.0) - 610.0).abs() <= 1e-9);
    assert!((scale.position(50.0) - 325.0).abs() <= 1e-9);
}

#[test]
fn inverted_range_plots_larger_values_higher() {
    // y ranges run bottom-to-top, so the range is descending in pixels.
    let scale =
        ContinuousScale::new(ScaleKind::Linear, (0.0, 20.0), (370.0, 20.0)).expect("valid scale");

    let low = scale.position(0.0);
    let high = scale.position(20.0);
    assert!((low - 370.0).abs() <= 1e-9);
    assert!((high - 20.0).abs() <= 1e-9);
    assert!(high < low);
}

#[test]
fn collapsed_domain_maps_to_range_midpoint() {
    let scale =
        ContinuousScale::new(ScaleKind::Time, (5.0, 5.0), (0.0, 600.0)).expect("valid scale");

    assert!((scale.position(5.0) - 300.0).abs() <= 1e-9);
    assert!((scale.position(123.0) - 300.0).abs() <= 1e-9);
}

#[test]
fn non_finite_domain_is_rejected() {
    let result = ContinuousScale::new(ScaleKind::Linear, (f64::NAN, 1.0), (0.0, 100.0));
    assert!(result.is_err());

    let result = ContinuousScale::new(ScaleKind::Linear, (0.0, f64::INFINITY), (0.0, 100.0));
    assert!(result.is_err());
}

#[test]
fn non_finite_range_is_rejected() {
    let result = ContinuousScale::new(ScaleKind::Linear, (0.0, 1.0), (0.0, f64::NAN));
    assert!(result.is_err());
}

#[test]
fn extrapolation_beyond_the_domain_is_affine() {
    let scale =
        ContinuousScale::new(ScaleKind::Linear, (0.0, 10.0), (0.0, 100.0)).expect("valid scale");

    assert!((scale.position(20.0) - 200.0).abs() <= 1e-9);
    assert!((scale.position(-10.0) + 100.0).abs() <= 1e-9);
}
