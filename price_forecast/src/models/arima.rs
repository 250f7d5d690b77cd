//! ARIMA-style differencing heuristic

use super::{centered_uniform, PriceModel};
use crate::constants::{
    AR_DECAY, AR_LAST_DIFF_WEIGHT, AR_PREV_DIFF_WEIGHT, ARIMA_FLOOR_RATIO, ARIMA_MIN_HISTORY,
    ARIMA_NOISE_SCALE, MA_DECAY, MA_WEIGHT, MA_WINDOW, VOLATILITY_WINDOW,
};
use crate::data::{closes, last_close, HistoricalDataPoint};
use rand::RngCore;
use trade_math::{mean, std_dev, tail};

/// Autoregressive / moving-average momentum on first differences
///
/// The AR and MA terms are applied once per forecast step with geometrically
/// fading weights, so the drift flattens out over longer horizons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArimaModel;

impl ArimaModel {
    /// AR term: weighted sum of the two most recent first differences
    pub fn ar_term(prices: &[f64]) -> f64 {
        let diffs: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
        match diffs.as_slice() {
            [.., prev, last] => AR_LAST_DIFF_WEIGHT * last + AR_PREV_DIFF_WEIGHT * prev,
            [last] => AR_LAST_DIFF_WEIGHT * last,
            [] => 0.0,
        }
    }

    /// MA term: scaled mean of the last two deviations from the trailing window mean
    pub fn ma_term(prices: &[f64]) -> f64 {
        let window = tail(prices, MA_WINDOW);
        let window_mean = mean(window);
        let deviations: Vec<f64> = window.iter().map(|p| p - window_mean).collect();
        MA_WEIGHT * mean(tail(&deviations, 2))
    }

    /// Sum of `ar * AR_DECAY^i + ma * MA_DECAY^i` over steps `i = 0..days_ahead`
    pub fn drift(ar: f64, ma: f64, days_ahead: usize) -> f64 {
        ar * geometric_sum(AR_DECAY, days_ahead) + ma * geometric_sum(MA_DECAY, days_ahead)
    }
}

/// `1 + r + r^2 + ... + r^(n-1)` for `0 < r < 1`
fn geometric_sum(ratio: f64, terms: usize) -> f64 {
    (1.0 - ratio.powf(terms as f64)) / (1.0 - ratio)
}

impl PriceModel for ArimaModel {
    fn name(&self) -> &str {
        "ARIMA"
    }

    fn min_history(&self) -> usize {
        ARIMA_MIN_HISTORY
    }

    fn floor_ratio(&self) -> f64 {
        ARIMA_FLOOR_RATIO
    }

    fn estimate(
        &self,
        history: &[HistoricalDataPoint],
        days_ahead: usize,
        rng: &mut dyn RngCore,
    ) -> f64 {
        let prices = closes(history);
        let ar = Self::ar_term(&prices);
        let ma = Self::ma_term(&prices);

        let drift = Self::drift(ar, ma, days_ahead);

        let noise =
            centered_uniform(rng) * std_dev(tail(&prices, VOLATILITY_WINDOW)) * ARIMA_NOISE_SCALE;

        last_close(history) + drift + noise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ar_term_uses_last_two_differences() {
        // Differences: 1, 2, 4
        let prices = [1.0, 2.0, 4.0, 8.0];
        assert!((ArimaModel::ar_term(&prices) - (0.6 * 4.0 + 0.3 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_ma_term_on_linear_window() {
        // Window 1..=10 has mean 5.5; last deviations are 3.5 and 4.5
        let prices: Vec<f64> = (1..=10).map(f64::from).collect();
        assert!((ArimaModel::ma_term(&prices) - 0.4 * 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_drift_decays_each_term_separately() {
        // AR fades by 0.9 per step, MA by 0.85
        let expected = 2.0 * (1.0 + 0.9 + 0.81) + 1.0 * (1.0 + 0.85 + 0.7225);
        assert!((ArimaModel::drift(2.0, 1.0, 3) - expected).abs() < 1e-12);
        assert_eq!(ArimaModel::drift(2.0, 1.0, 0), 0.0);
    }

    #[test]
    fn test_drift_converges_for_huge_horizons() {
        let limit = 1.0 / (1.0 - 0.9) + 1.0 / (1.0 - 0.85);
        let drift = ArimaModel::drift(1.0, 1.0, usize::MAX);
        assert!((drift - limit).abs() < 1e-9);
    }

    #[test]
    fn test_flat_series_has_no_drift() {
        let prices = [50.0; 12];
        assert_eq!(ArimaModel::ar_term(&prices), 0.0);
        assert_eq!(ArimaModel::ma_term(&prices), 0.0);
    }
}
