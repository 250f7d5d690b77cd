//! Forecasting entry point: dated, confidence-scored predictions

use crate::backtest::{self, AllModelMetrics};
use crate::config::ForecastConfig;
use crate::constants::{
    CONFIDENCE_DECAY_PER_DAY, DEFAULT_HORIZON_DAYS, MIN_CONFIDENCE, MIN_FORECAST_HISTORY,
};
use crate::data::HistoricalDataPoint;
use crate::models::ModelKind;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One forecast trading day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Trading day, `YYYY-MM-DD` on the wire
    pub date: NaiveDate,
    /// Predicted close rounded to cents
    pub predicted_close: f64,
    /// Confidence in `[0.55, 0.95]`, decreasing with distance
    pub confidence: f64,
    pub is_prediction: bool,
    pub model: ModelKind,
}

/// Round a price to two decimals
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Confidence of the prediction `offset` days ahead for `kind`
pub fn confidence_for(kind: ModelKind, offset: usize) -> f64 {
    (kind.base_confidence() - CONFIDENCE_DECAY_PER_DAY * offset as f64).max(MIN_CONFIDENCE)
}

/// Trading date for forecast step `offset` after `last`
///
/// Each step starts from `last + offset` calendar days and is pushed forward
/// past a weekend on its own, rather than continuing from the previous step's
/// corrected date. Consecutive steps can therefore land on the same Monday.
pub fn next_trading_date(last: NaiveDate, offset: usize) -> NaiveDate {
    let mut date = last + Duration::days(offset as i64);
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date += Duration::days(1);
    }
    date
}

/// Drives a forecasting strategy over a horizon with an injected random source
#[derive(Debug, Clone)]
pub struct Forecaster<R: Rng = StdRng> {
    rng: R,
}

impl Forecaster<StdRng> {
    /// Forecaster with a reproducible seeded generator
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Forecaster seeded from the configuration, or from entropy when no seed is set
    pub fn from_config(config: &ForecastConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> Forecaster<R> {
    /// Create a forecaster around any random source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Predict `days` trading days with the chosen strategy
    ///
    /// Every step is forecast from the full original history with
    /// `days_ahead = step`. Histories shorter than 15 points yield no
    /// predictions.
    pub fn predict_prices(
        &mut self,
        history: &[HistoricalDataPoint],
        days: usize,
        kind: ModelKind,
    ) -> Vec<PredictionResult> {
        let Some(last) = history.last() else {
            return Vec::new();
        };
        if history.len() < MIN_FORECAST_HISTORY {
            debug!(
                points = history.len(),
                required = MIN_FORECAST_HISTORY,
                "history too short to forecast"
            );
            return Vec::new();
        }

        debug!(model = %kind, days, points = history.len(), "forecasting");
        (1..=days)
            .map(|offset| PredictionResult {
                date: next_trading_date(last.date, offset),
                predicted_close: round_to_cents(kind.predict(history, offset, &mut self.rng)),
                confidence: confidence_for(kind, offset),
                is_prediction: true,
                model: kind,
            })
            .collect()
    }

    /// Predict using a strategy name; unknown names use the lstm strategy
    pub fn predict_prices_by_name(
        &mut self,
        history: &[HistoricalDataPoint],
        days: usize,
        model: &str,
    ) -> Vec<PredictionResult> {
        self.predict_prices(history, days, ModelKind::from_name_or_default(model))
    }

    /// Seven-day forecast with the default strategy
    pub fn predict_default(&mut self, history: &[HistoricalDataPoint]) -> Vec<PredictionResult> {
        self.predict_prices(history, DEFAULT_HORIZON_DAYS, ModelKind::default())
    }

    /// Backtest every strategy against the history
    pub fn evaluate_models(&mut self, history: &[HistoricalDataPoint]) -> AllModelMetrics {
        backtest::evaluate_models(history, &mut self.rng)
    }
}
