use chrono::{DateTime, Datelike, Months, TimeZone, Utc};

use crate::core::scale::ScaleKind;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2)

/// Suggested tick count for a horizontal axis spanning `width_px` pixels.
#[must_use]
pub fn x_tick_count(width_px: f64) -> usize {
    tick_count_for_span(width_px, 80.0)
}

/// Suggested tick count for a vertical axis spanning `height_px` pixels.
#[must_use]
pub fn y_tick_count(height_px: f64) -> usize {
    tick_count_for_span(height_px, 40.0)
}

fn tick_count_for_span(span_px: f64, spacing_px: f64) -> usize {
    if !span_px.is_finite() || span_px <= 0.0 {
        return 1;
    }
    ((span_px / spacing_px).round() as usize).max(1)
}

/// Nice tick step for roughly `count` ticks over `[start, stop]`.
///
/// Steps are powers of ten times 1, 2, or 5. A negative return value `-d`
/// encodes the fractional step `1/d`, which keeps sub-unit ticks exact.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / (count.max(1) as f64);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Roughly `count` nicely rounded values covering `[start, stop]`.
///
/// Ticks fall on multiples of the step and never leave the interval.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);

    let mut ticks = if step > 0.0 {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = (last - first + 1.0).max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) * step).collect::<Vec<_>>()
    } else if step < 0.0 {
        let denom = -step;
        let first = (lo * denom).ceil();
        let last = (hi * denom).floor();
        let n = (last - first + 1.0).max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) / denom).collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    if reversed {
        ticks.reverse();
    }
    ticks
}

/// Formats a linear tick value with just enough decimals for its step.
#[must_use]
pub fn format_linear_tick(value: f64, step: f64) -> String {
    let decimals = if step.abs() >= 1.0 || step == 0.0 {
        0
    } else {
        (-step.abs().log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}

/// Calendar-aware tick interval for time axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    Seconds(u32),
    Minutes(u32),
    Hours(u32),
    Days(u32),
    Months(u32),
    Years(u32),
}

impl TimeInterval {
    const MILLIS_SECOND: f64 = 1_000.0;
    const MILLIS_MINUTE: f64 = 60_000.0;
    const MILLIS_HOUR: f64 = 3_600_000.0;
    const MILLIS_DAY: f64 = 86_400_000.0;
    const MILLIS_MONTH: f64 = 30.0 * 86_400_000.0;
    const MILLIS_YEAR: f64 = 365.0 * 86_400_000.0;

    /// Approximate interval width in milliseconds, used for selection only.
    #[must_use]
    fn approx_millis(self) -> f64 {
        match self {
            Self::Seconds(n) => f64::from(n) * Self::MILLIS_SECOND,
            Self::Minutes(n) => f64::from(n) * Self::MILLIS_MINUTE,
            Self::Hours(n) => f64::from(n) * Self::MILLIS_HOUR,
            Self::Days(n) => f64::from(n) * Self::MILLIS_DAY,
            Self::Months(n) => f64::from(n) * Self::MILLIS_MONTH,
            Self::Years(n) => f64::from(n) * Self::MILLIS_YEAR,
        }
    }

    /// Picks the interval whose width best matches `span_millis / count`.
    #[must_use]
    pub fn select(span_millis: f64, count: usize) -> Self {
        const LADDER: [TimeInterval; 16] = [
            TimeInterval::Seconds(1),
            TimeInterval::Seconds(5),
            TimeInterval::Seconds(15),
            TimeInterval::Seconds(30),
            TimeInterval::Minutes(1),
            TimeInterval::Minutes(5),
            TimeInterval::Minutes(15),
            TimeInterval::Minutes(30),
            TimeInterval::Hours(1),
            TimeInterval::Hours(3),
            TimeInterval::Hours(6),
            TimeInterval::Hours(12),
            TimeInterval::Days(1),
            TimeInterval::Days(2),
            TimeInterval::Days(7),
            TimeInterval::Months(1),
        ];

        let target = span_millis / (count.max(1) as f64);
        if !target.is_finite() || target <= 0.0 {
            return Self::Seconds(1);
        }

        for pair in LADDER.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            if target < (current.approx_millis() * next.approx_millis()).sqrt() {
                return current;
            }
        }
        if target < (Self::Months(1).approx_millis() * Self::Months(3).approx_millis()).sqrt() {
            return Self::Months(1);
        }
        if target < (Self::Months(3).approx_millis() * Self::Years(1).approx_millis()).sqrt() {
            return Self::Months(3);
        }

        // Multi-year spans reuse the 1-2-5 ladder on year counts.
        let years = tick_increment(0.0, target / Self::MILLIS_YEAR, 1).max(1.0);
        Self::Years(years as u32)
    }

    /// Smallest tick on or after `millis`, aligned to the interval grid.
    #[must_use]
    fn ceil(self, millis: f64) -> Option<DateTime<Utc>> {
        let dt = Utc.timestamp_millis_opt(millis.ceil() as i64).single()?;
        let floored = self.floor_datetime(dt)?;
        if floored == dt {
            Some(floored)
        } else {
            self.advance(floored)
        }
    }

    fn floor_datetime(self, dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let aligned_millis = |unit_millis: i64, dt: DateTime<Utc>| {
            let t = dt.timestamp_millis();
            Utc.timestamp_millis_opt(t.div_euclid(unit_millis) * unit_millis)
                .single()
        };
        match self {
            Self::Seconds(n) => aligned_millis(i64::from(n) * 1_000, dt),
            Self::Minutes(n) => aligned_millis(i64::from(n) * 60_000, dt),
            Self::Hours(n) => aligned_millis(i64::from(n) * 3_600_000, dt),
            Self::Days(n) => aligned_millis(i64::from(n) * 86_400_000, dt),
            Self::Months(n) => {
                let month0 = dt.month0() - dt.month0() % n;
                Utc.with_ymd_and_hms(dt.year(), month0 + 1, 1, 0, 0, 0).single()
            }
            Self::Years(n) => {
                let n = n.max(1) as i32;
                let year = dt.year().div_euclid(n) * n;
                Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()
            }
        }
    }

    fn advance(self, dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Seconds(n) => dt.checked_add_signed(chrono::Duration::seconds(i64::from(n))),
            Self::Minutes(n) => dt.checked_add_signed(chrono::Duration::minutes(i64::from(n))),
            Self::Hours(n) => dt.checked_add_signed(chrono::Duration::hours(i64::from(n))),
            Self::Days(n) => dt.checked_add_signed(chrono::Duration::days(i64::from(n))),
            Self::Months(n) => dt.checked_add_months(Months::new(n)),
            Self::Years(n) => dt.checked_add_months(Months::new(n.saturating_mul(12))),
        }
    }

    /// `chrono` format pattern appropriate for this interval's granularity.
    #[must_use]
    pub fn label_pattern(self) -> &'static str {
        match self {
            Self::Seconds(_) => "%H:%M:%S",
            Self::Minutes(_) | Self::Hours(_) => "%H:%M",
            Self::Days(_) => "%b %d",
            Self::Months(_) => "%b %Y",
            Self::Years(_) => "%Y",
        }
    }
}

/// Roughly `count` interval-aligned ticks over `[start, stop]` epoch millis.
#[must_use]
pub fn time_ticks(start: f64, stop: f64, count: usize) -> (Vec<f64>, TimeInterval) {
    let interval = TimeInterval::select((stop - start).abs(), count);
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return (Vec::new(), interval);
    }

    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let mut ticks = Vec::new();
    let mut cursor = interval.ceil(lo);
    // Hard cap keeps a pathological span from looping forever.
    let cap = count.saturating_mul(4).max(16);
    while let Some(dt) = cursor {
        let millis = dt.timestamp_millis() as f64;
        if millis > hi || ticks.len() >= cap {
            break;
        }
        ticks.push(millis);
        cursor = interval.advance(dt);
    }

    if stop < start {
        ticks.reverse();
    }
    (ticks, interval)
}

/// Formats one time tick value (epoch millis) with the interval's pattern.
#[must_use]
pub fn format_time_tick(millis: f64, interval: TimeInterval) -> String {
    let Some(dt) = Utc.timestamp_millis_opt(millis.round() as i64).single() else {
        return "nan".to_owned();
    };
    dt.format(interval.label_pattern()).to_string()
}

/// Ticks plus preformatted labels for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

/// Generates ticks and labels for a scale kind over `[start, stop]`.
#[must_use]
pub fn axis_ticks(kind: ScaleKind, start: f64, stop: f64, count: usize) -> AxisTicks {
    match kind {
        ScaleKind::Linear => {
            let values = linear_ticks(start, stop, count);
            let step = tick_increment(start.min(stop), start.max(stop), count);
            let step = if step < 0.0 { -1.0 / step } else { step };
            let labels = values
                .iter()
                .map(|&v| format_linear_tick(v, step))
                .collect();
            AxisTicks { values, labels }
        }
        ScaleKind::Time => {
            let (values, interval) = time_ticks(start, stop, count);
            let labels = values
                .iter()
                .map(|&v| format_time_tick(v, interval))
                .collect();
            AxisTicks { values, labels }
        }
    }
}
