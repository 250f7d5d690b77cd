//! Forecasting models for historical price series
//!
//! Four heuristic strategies share the [`PriceModel`] interface. None of them
//! is trained: each is a pure function of the history, the horizon and, for
//! the stochastic ones, an injected random source.

use crate::constants::{
    ARIMA_CONFIDENCE, FOREST_CONFIDENCE, LINEAR_CONFIDENCE, LSTM_CONFIDENCE,
};
use crate::data::{last_close, HistoricalDataPoint};
use crate::error::ForecastError;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;
use tracing::warn;

pub mod arima;
pub mod linear_regression;
pub mod lstm;
pub mod random_forest;

pub use arima::ArimaModel;
pub use linear_regression::LinearRegressionModel;
pub use lstm::LstmModel;
pub use random_forest::RandomForestModel;

/// Forecast model producing a single close price `days_ahead` past the history
pub trait PriceModel: Debug + Sync {
    /// Human readable name of the model
    fn name(&self) -> &str;

    /// Minimum number of data points the model needs
    fn min_history(&self) -> usize;

    /// Lowest allowed prediction as a fraction of the last close
    fn floor_ratio(&self) -> f64;

    /// Raw estimate; only called once the history meets [`Self::min_history`]
    fn estimate(
        &self,
        history: &[HistoricalDataPoint],
        days_ahead: usize,
        rng: &mut dyn RngCore,
    ) -> f64;

    /// Predict the close `days_ahead` trading days after the end of `history`
    ///
    /// Histories shorter than the model minimum yield the last close (0 when
    /// empty). Estimates are clamped to at least `floor_ratio * last_close`.
    fn predict(
        &self,
        history: &[HistoricalDataPoint],
        days_ahead: usize,
        rng: &mut dyn RngCore,
    ) -> f64 {
        let last = last_close(history);
        if history.len() < self.min_history() {
            return last;
        }
        self.estimate(history, days_ahead, rng)
            .max(last * self.floor_ratio())
    }
}

/// The closed set of forecasting strategies, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelKind {
    LinearRegression,
    Arima,
    RandomForest,
    #[default]
    Lstm,
}

impl ModelKind {
    /// All strategies in declaration order
    pub const ALL: [ModelKind; 4] = [
        ModelKind::LinearRegression,
        ModelKind::Arima,
        ModelKind::RandomForest,
        ModelKind::Lstm,
    ];

    /// Wire name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::LinearRegression => "linearRegression",
            ModelKind::Arima => "arima",
            ModelKind::RandomForest => "randomForest",
            ModelKind::Lstm => "lstm",
        }
    }

    /// Resolve a strategy name, falling back to [`ModelKind::Lstm`] for unknown names
    pub fn from_name_or_default(name: &str) -> Self {
        match name.parse() {
            Ok(kind) => kind,
            Err(_) => {
                warn!(model = name, "unknown model name, using lstm");
                ModelKind::Lstm
            }
        }
    }

    /// Confidence of the first predicted day
    pub fn base_confidence(&self) -> f64 {
        match self {
            ModelKind::Lstm => LSTM_CONFIDENCE,
            ModelKind::RandomForest => FOREST_CONFIDENCE,
            ModelKind::Arima => ARIMA_CONFIDENCE,
            ModelKind::LinearRegression => LINEAR_CONFIDENCE,
        }
    }

    /// The model implementing this strategy
    pub fn model(&self) -> &'static dyn PriceModel {
        match self {
            ModelKind::LinearRegression => &LinearRegressionModel,
            ModelKind::Arima => &ArimaModel,
            ModelKind::RandomForest => &RandomForestModel,
            ModelKind::Lstm => &LstmModel,
        }
    }

    /// Shorthand for `self.model().predict(..)`
    pub fn predict(
        &self,
        history: &[HistoricalDataPoint],
        days_ahead: usize,
        rng: &mut dyn RngCore,
    ) -> f64 {
        self.model().predict(history, days_ahead, rng)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linearRegression" => Ok(ModelKind::LinearRegression),
            "arima" => Ok(ModelKind::Arima),
            "randomForest" => Ok(ModelKind::RandomForest),
            "lstm" => Ok(ModelKind::Lstm),
            other => Err(ForecastError::UnknownModel(other.to_string())),
        }
    }
}

/// Uniform sample in `[-0.5, 0.5)`
pub(crate) fn centered_uniform(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>() - 0.5
}

/// Fractional change over the last `lookback` steps, 0 when undefined
pub(crate) fn period_return(prices: &[f64], lookback: usize) -> f64 {
    if prices.len() <= lookback {
        return 0.0;
    }
    let last = prices[prices.len() - 1];
    let base = prices[prices.len() - 1 - lookback];
    if base == 0.0 {
        return 0.0;
    }
    (last - base) / base
}
