//! Metrics for evaluating forecast performance

use serde::{Deserialize, Serialize};
use trade_math::{mean, sign};

/// Forecast quality of one model over a validation window
///
/// `mse` and `mae` are normalised by the largest actual value so models can be
/// compared across price levels. `r2` uses raw values. `accuracy` is the
/// percentage of steps whose direction was predicted correctly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub mse: f64,
    pub r2: f64,
    pub mae: f64,
    pub accuracy: f64,
}

impl std::fmt::Display for ModelMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MSE: {:.6}  R2: {:.4}  MAE: {:.6}  Direction: {:.2}%",
            self.mse, self.r2, self.mae, self.accuracy
        )
    }
}

/// Score `predicted` against `actual`
///
/// Mismatched lengths or empty input give all-zero metrics. Note that this is
/// indistinguishable from a model that genuinely scored zero error with zero
/// explained variance.
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> ModelMetrics {
    if actual.len() != predicted.len() || actual.is_empty() {
        return ModelMetrics::default();
    }

    let max_actual = actual.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scale = if max_actual > 0.0 { max_actual } else { 1.0 };

    let mse = mean(
        &actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| ((a - p) / scale).powi(2))
            .collect::<Vec<_>>(),
    );
    let mae = mean(
        &actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| (a - p).abs() / scale)
            .collect::<Vec<_>>(),
    );

    ModelMetrics {
        mse,
        r2: r_squared(actual, predicted),
        mae,
        accuracy: directional_accuracy(actual, predicted),
    }
}

/// Coefficient of determination on raw values, 0 when `actual` is constant
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    let actual_mean = mean(actual);
    let ss_tot: f64 = actual.iter().map(|a| (a - actual_mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    1.0 - ss_res / ss_tot
}

/// Percentage of adjacent steps where both series move in the same direction
///
/// Flat steps count as a direction of their own, so a flat actual step only
/// matches a flat predicted step. Fewer than two points give 0.
pub fn directional_accuracy(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() < 2 || actual.len() != predicted.len() {
        return 0.0;
    }

    let hits = actual
        .windows(2)
        .zip(predicted.windows(2))
        .filter(|(a, p)| sign(a[1] - a[0]) == sign(p[1] - p[0]))
        .count();

    hits as f64 / (actual.len() - 1) as f64 * 100.0
}
