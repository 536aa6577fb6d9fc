use criterion::{Criterion, criterion_group, criterion_main};
use linechart_svg::api::{LineChartOptions, TimeSeriesDatum, build_line_chart};
use linechart_svg::core::{Curve, series_path_commands};
use std::hint::black_box;

fn bench_path_generation_10k(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| 40.0 + f64::from(i) * 0.057).collect();
    let ys: Vec<Option<f64>> = (0..10_000)
        .map(|i| {
            // Sprinkle gaps so run splitting is exercised.
            if i % 97 == 0 {
                None
            } else {
                Some(370.0 - 350.0 * (f64::from(i) * 0.001).sin().abs())
            }
        })
        .collect();

    c.bench_function("path_generation_10k_linear", |b| {
        b.iter(|| series_path_commands(black_box(&xs), black_box(&ys), Curve::Linear))
    });

    c.bench_function("path_generation_10k_monotone", |b| {
        b.iter(|| series_path_commands(black_box(&xs), black_box(&ys), Curve::MonotoneX))
    });
}

fn bench_full_chart_build_10k(c: &mut Criterion) {
    let data: Vec<TimeSeriesDatum> = (0..10_000)
        .map(|i| {
            let t = 1_600_000_000_000.0 + f64::from(i) * 60_000.0;
            TimeSeriesDatum::new(t, 50.0 + (f64::from(i) * 0.01).sin() * 25.0)
        })
        .collect();
    let options = LineChartOptions::new(
        |d: &TimeSeriesDatum| d.time,
        |d: &TimeSeriesDatum| d.value,
        "value",
    );

    c.bench_function("full_chart_build_10k", |b| {
        b.iter(|| build_line_chart(black_box(&data), &options).expect("build"))
    });
}

criterion_group!(benches, bench_path_generation_10k, bench_full_chart_build_10k);
criterion_main!(benches);
