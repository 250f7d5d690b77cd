#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use price_forecast::HistoricalDataPoint;

pub fn start_date() -> NaiveDate {
    // A Monday
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// History with the given closes on consecutive calendar days
pub fn history_from_closes(closes: &[f64]) -> Vec<HistoricalDataPoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            HistoricalDataPoint::new(
                start_date() + Duration::days(i as i64),
                close - 0.5,
                close + 1.0,
                close - 1.0,
                close,
                1_000_000.0 + (i % 7) as f64 * 10_000.0,
            )
        })
        .collect()
}

/// Wavy upward-drifting series, deterministic
pub fn sample_history(len: usize) -> Vec<HistoricalDataPoint> {
    let closes: Vec<f64> = (0..len)
        .map(|i| 100.0 + 5.0 * (i as f64 * 0.3).sin() + 0.2 * i as f64)
        .collect();
    history_from_closes(&closes)
}

/// Same as `sample_history` but ending on `last_date`
pub fn sample_history_ending(len: usize, last_date: NaiveDate) -> Vec<HistoricalDataPoint> {
    let mut history = sample_history(len);
    let offset = last_date - history[len - 1].date;
    for point in &mut history {
        point.date += offset;
    }
    history
}
