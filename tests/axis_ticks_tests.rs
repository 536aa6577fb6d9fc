use linechart_svg::core::ticks::{
    TimeInterval, format_linear_tick, linear_ticks, tick_increment, time_ticks,
};
use linechart_svg::core::{ScaleKind, axis_ticks, x_tick_count, y_tick_count};

#[test]
fn tick_counts_follow_pixel_heuristics() {
    // width / 80 and height / 40, the defaults for a 640x400 chart.
    assert_eq!(x_tick_count(640.0), 8);
    assert_eq!(y_tick_count(400.0), 10);
    assert_eq!(x_tick_count(0.0), 1);
    assert_eq!(y_tick_count(f64::NAN), 1);
}

#[test]
fn linear_ticks_land_on_nice_multiples() {
    let ticks = linear_ticks(0.0, 20.0, 10);
    assert_eq!(
        ticks,
        vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0]
    );
}

#[test]
fn linear_ticks_handle_fractional_steps() {
    let ticks = linear_ticks(0.0, 1.0, 10);
    assert_eq!(ticks.len(), 11);
    assert!((ticks[1] - 0.1).abs() <= 1e-12);
    assert!((ticks[10] - 1.0).abs() <= 1e-12);
}

#[test]
fn linear_ticks_stay_within_the_domain() {
    let ticks = linear_ticks(0.3, 9.7, 10);
    assert!(!ticks.is_empty());
    for tick in &ticks {
        assert!(*tick >= 0.3 && *tick <= 9.7, "tick {tick} out of domain");
    }
}

#[test]
fn reversed_domain_yields_descending_ticks() {
    let ticks = linear_ticks(20.0, 0.0, 10);
    assert_eq!(ticks.first(), Some(&20.0));
    assert_eq!(ticks.last(), Some(&0.0));
}

#[test]
fn degenerate_domain_yields_single_tick() {
    assert_eq!(linear_ticks(5.0, 5.0, 10), vec![5.0]);
    assert!(linear_ticks(f64::NAN, 1.0, 10).is_empty());
}

#[test]
fn linear_tick_labels_match_step_precision() {
    assert_eq!(format_linear_tick(4.0, 2.0), "4");
    assert_eq!(format_linear_tick(0.4, 0.1), "0.4");
    assert_eq!(format_linear_tick(0.25, 0.05), "0.25");
}

#[test]
fn tick_increment_picks_one_two_five() {
    assert!((tick_increment(0.0, 100.0, 10) - 10.0).abs() <= 1e-12);
    assert!((tick_increment(0.0, 50.0, 10) - 5.0).abs() <= 1e-12);
    assert!((tick_increment(0.0, 20.0, 10) - 2.0).abs() <= 1e-12);
}

#[test]
fn one_day_span_uses_three_hour_ticks() {
    let day_millis = 86_400_000.0;
    let (ticks, interval) = time_ticks(0.0, day_millis, 8);

    assert_eq!(interval, TimeInterval::Hours(3));
    assert_eq!(ticks.len(), 9);
    assert!((ticks[0] - 0.0).abs() <= 1e-9);
    assert!((ticks[1] - 3.0 * 3_600_000.0).abs() <= 1e-9);
    assert!((ticks[8] - day_millis).abs() <= 1e-9);
}

#[test]
fn multi_year_span_ticks_on_january_first() {
    // 2010-01-01 through 2020-01-01 in epoch millis.
    let start = 1_262_304_000_000.0;
    let stop = 1_577_836_800_000.0;
    let (ticks, interval) = time_ticks(start, stop, 8);

    assert_eq!(interval, TimeInterval::Years(1));
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks.first().copied(), Some(start));
    assert_eq!(ticks.last().copied(), Some(stop));
}

#[test]
fn time_axis_labels_use_span_appropriate_patterns() {
    let day_millis = 86_400_000.0;
    let labeled = axis_ticks(ScaleKind::Time, 0.0, day_millis, 8);
    assert_eq!(labeled.labels.first().map(String::as_str), Some("00:00"));
    assert_eq!(labeled.labels.last().map(String::as_str), Some("00:00"));

    let yearly = axis_ticks(
        ScaleKind::Time,
        1_262_304_000_000.0, // 2010-01-01
        1_577_836_800_000.0, // 2020-01-01
        8,
    );
    assert_eq!(yearly.labels.first().map(String::as_str), Some("2010"));
}

#[test]
fn linear_axis_ticks_pair_values_and_labels() {
    let labeled = axis_ticks(ScaleKind::Linear, 0.0, 20.0, 10);
    assert_eq!(labeled.values.len(), labeled.labels.len());
    assert_eq!(labeled.labels.first().map(String::as_str), Some("0"));
    assert_eq!(labeled.labels.last().map(String::as_str), Some("20"));
}
