//! Least-squares trend extrapolation

use super::{centered_uniform, PriceModel};
use crate::constants::{
    LINEAR_FLOOR_RATIO, LINEAR_MIN_HISTORY, LINEAR_NOISE_SCALE, VOLATILITY_WINDOW,
};
use crate::data::{closes, last_close, HistoricalDataPoint};
use rand::RngCore;
use trade_math::{tail, volatility_ratio, LinearFit};

/// Fits a straight line through the closes and extends it forward
///
/// A uniform perturbation scaled by the 20-day volatility ratio is added so
/// repeated calls spread around the trend line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRegressionModel;

impl PriceModel for LinearRegressionModel {
    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn min_history(&self) -> usize {
        LINEAR_MIN_HISTORY
    }

    fn floor_ratio(&self) -> f64 {
        LINEAR_FLOOR_RATIO
    }

    fn estimate(
        &self,
        history: &[HistoricalDataPoint],
        days_ahead: usize,
        rng: &mut dyn RngCore,
    ) -> f64 {
        let prices = closes(history);
        let last = last_close(history);

        let trend = match LinearFit::fit(&prices) {
            Ok(fit) => fit.value_at((prices.len() + days_ahead - 1) as f64),
            Err(_) => last,
        };

        let volatility = volatility_ratio(tail(&prices, VOLATILITY_WINDOW));
        trend + centered_uniform(rng) * volatility * last * LINEAR_NOISE_SCALE
    }
}
