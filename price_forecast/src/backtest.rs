//! Train/validation backtest and best-model election

use crate::constants::{MIN_BACKTEST_HISTORY, TRAIN_SPLIT_RATIO};
use crate::data::{closes, HistoricalDataPoint};
use crate::metrics::{evaluate, ModelMetrics};
use crate::models::ModelKind;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Metrics for every strategy plus the elected winner
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllModelMetrics {
    pub linear_regression: ModelMetrics,
    pub arima: ModelMetrics,
    pub random_forest: ModelMetrics,
    pub lstm: ModelMetrics,
    pub best_model: ModelKind,
}

impl AllModelMetrics {
    /// Metrics of one strategy
    pub fn get(&self, kind: ModelKind) -> &ModelMetrics {
        match kind {
            ModelKind::LinearRegression => &self.linear_regression,
            ModelKind::Arima => &self.arima,
            ModelKind::RandomForest => &self.random_forest,
            ModelKind::Lstm => &self.lstm,
        }
    }

    fn get_mut(&mut self, kind: ModelKind) -> &mut ModelMetrics {
        match kind {
            ModelKind::LinearRegression => &mut self.linear_regression,
            ModelKind::Arima => &mut self.arima,
            ModelKind::RandomForest => &mut self.random_forest,
            ModelKind::Lstm => &mut self.lstm,
        }
    }
}

impl std::fmt::Display for AllModelMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Backtest Metrics:")?;
        for kind in ModelKind::ALL {
            writeln!(f, "  {:<17} {}", kind.as_str(), self.get(kind))?;
        }
        write!(f, "  Best model: {}", self.best_model)
    }
}

/// Index at which the history is split into training and validation parts
pub fn split_index(len: usize) -> usize {
    (len as f64 * TRAIN_SPLIT_RATIO).floor() as usize
}

/// Forecast every validation day from the fixed training prefix
///
/// Validation index `i` is predicted with `days_ahead = i + 1`; the model is
/// never refitted on validation data.
pub fn validation_predictions(
    kind: ModelKind,
    train: &[HistoricalDataPoint],
    validation_len: usize,
    rng: &mut dyn RngCore,
) -> Vec<f64> {
    (0..validation_len)
        .map(|i| kind.predict(train, i + 1, rng))
        .collect()
}

/// Backtest all four strategies and elect the one with the highest R²
///
/// Histories shorter than 20 points yield zeroed metrics with `lstm` as the
/// default winner. Ties keep the earlier strategy in [`ModelKind::ALL`] order.
pub fn evaluate_models(history: &[HistoricalDataPoint], rng: &mut dyn RngCore) -> AllModelMetrics {
    if history.len() < MIN_BACKTEST_HISTORY {
        debug!(
            points = history.len(),
            "history too short for backtest, returning zeroed metrics"
        );
        return AllModelMetrics::default();
    }

    let split = split_index(history.len());
    let (train, validation) = history.split_at(split);
    let actual = closes(validation);
    debug!(train = train.len(), validation = validation.len(), "backtest split");

    let mut results = AllModelMetrics::default();
    let mut best: Option<(ModelKind, f64)> = None;

    for kind in ModelKind::ALL {
        let predicted = validation_predictions(kind, train, validation.len(), rng);
        let metrics = evaluate(&actual, &predicted);
        debug!(model = %kind, r2 = metrics.r2, mse = metrics.mse, "model scored");

        if best.map_or(true, |(_, r2)| metrics.r2 > r2) {
            best = Some((kind, metrics.r2));
        }
        *results.get_mut(kind) = metrics;
    }

    if let Some((kind, r2)) = best {
        results.best_model = kind;
        info!(model = %kind, r2, "best model elected");
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_index() {
        assert_eq!(split_index(20), 16);
        assert_eq!(split_index(31), 24);
        assert_eq!(split_index(0), 0);
    }

    #[test]
    fn test_default_best_model_is_lstm() {
        assert_eq!(AllModelMetrics::default().best_model, ModelKind::Lstm);
    }
}
