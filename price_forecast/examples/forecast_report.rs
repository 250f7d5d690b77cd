use chrono::{Datelike, Duration, NaiveDate, Weekday};
use price_forecast::{combine, ForecastConfig, Forecaster, HistoricalDataPoint, ModelKind};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("Price Forecast: Model Report");
    println!("============================\n");

    let history = create_sample_daily_data(120);
    let config = ForecastConfig {
        seed: Some(42),
        ..ForecastConfig::default()
    };
    let mut forecaster = Forecaster::from_config(&config);

    println!("Sample data: {} trading days\n", history.len());

    let metrics = forecaster.evaluate_models(&history);
    println!("{}\n", metrics);

    for kind in ModelKind::ALL {
        println!("{} ({}) forecast:", kind.model().name(), kind);
        for p in forecaster.predict_prices(&history, config.horizon_days, kind) {
            println!(
                "  {}  {:>8.2}  ({:.0}% confidence)",
                p.date,
                p.predicted_close,
                p.confidence * 100.0
            );
        }
        println!();
    }

    let best = forecaster.predict_prices(&history, config.horizon_days, metrics.best_model);
    let chart = combine(&history, &best);
    println!(
        "Chart series: {} points ({} predicted by {})",
        chart.len(),
        best.len(),
        metrics.best_model
    );

    Ok(())
}

/// Weekday-only random walk with a gentle upward drift
fn create_sample_daily_data(days: usize) -> Vec<HistoricalDataPoint> {
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let mut close = 150.0;
    let mut data = Vec::with_capacity(days);

    while data.len() < days {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            let i = data.len() as f64;
            let open = close;
            close = open * (1.0 + 0.0015 + 0.012 * (i * 0.7).sin());
            data.push(HistoricalDataPoint::new(
                date,
                open,
                open.max(close) * 1.004,
                open.min(close) * 0.996,
                close,
                2_000_000.0 + 250_000.0 * (i * 0.45).cos(),
            ));
        }
        date += Duration::days(1);
    }

    data
}
