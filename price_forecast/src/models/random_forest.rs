//! Committee of technical-signal "trees"

use super::{period_return, PriceModel};
use crate::constants::{
    BREAKOUT_SCALE, CHANNEL_DECAY, CHANNEL_WINDOW, FOREST_FLOOR_RATIO, FOREST_MIN_HISTORY,
    HIGH_VOLUME_BOOST, LOW_VOLUME_DAMPING, MEDIUM_WINDOW, MOMENTUM_HORIZON_SCALE,
    MOMENTUM_LONG_WEIGHT, MOMENTUM_SHORT_WEIGHT, REVERSION_RATE, SHORT_WINDOW, SMA_WINDOW,
};
use crate::data::{closes, highs, last_close, lows, volumes, HistoricalDataPoint};
use rand::RngCore;
use trade_math::{mean, sign, std_dev, tail, LinearFit};

/// Averages five independent heuristic estimates
///
/// Each "tree" looks at a different aspect of the series (momentum, mean
/// reversion, volume-confirmed trend, price channel and volatility breakout)
/// and the committee vote is their plain mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomForestModel;

impl RandomForestModel {
    /// Individual tree estimates, in a fixed order
    pub fn votes(history: &[HistoricalDataPoint], days_ahead: usize) -> [f64; 5] {
        let prices = closes(history);
        let last = last_close(history);
        let horizon = days_ahead as f64;

        [
            momentum_tree(&prices, last, horizon),
            mean_reversion_tree(&prices, last, horizon),
            volume_trend_tree(history, &prices, last, horizon),
            channel_tree(history, last, horizon),
            breakout_tree(&prices, last, horizon),
        ]
    }
}

impl PriceModel for RandomForestModel {
    fn name(&self) -> &str {
        "Random Forest"
    }

    fn min_history(&self) -> usize {
        FOREST_MIN_HISTORY
    }

    fn floor_ratio(&self) -> f64 {
        FOREST_FLOOR_RATIO
    }

    fn estimate(
        &self,
        history: &[HistoricalDataPoint],
        days_ahead: usize,
        _rng: &mut dyn RngCore,
    ) -> f64 {
        mean(&Self::votes(history, days_ahead))
    }
}

fn momentum_tree(prices: &[f64], last: f64, horizon: f64) -> f64 {
    let momentum = MOMENTUM_SHORT_WEIGHT * period_return(prices, SHORT_WINDOW)
        + MOMENTUM_LONG_WEIGHT * period_return(prices, MEDIUM_WINDOW);
    last * (1.0 + momentum * horizon * MOMENTUM_HORIZON_SCALE)
}

fn mean_reversion_tree(prices: &[f64], last: f64, horizon: f64) -> f64 {
    let sma = mean(tail(prices, SMA_WINDOW));
    last - (last - sma) * REVERSION_RATE * horizon
}

fn volume_trend_tree(
    history: &[HistoricalDataPoint],
    prices: &[f64],
    last: f64,
    horizon: f64,
) -> f64 {
    let slope = LinearFit::fit(tail(prices, SHORT_WINDOW)).map_or(0.0, |fit| fit.slope);

    let volume = volumes(history);
    let short_volume = mean(tail(&volume, SHORT_WINDOW));
    let long_volume = mean(tail(&volume, SMA_WINDOW));
    let confirmation = if short_volume > long_volume {
        HIGH_VOLUME_BOOST
    } else {
        LOW_VOLUME_DAMPING
    };

    last + slope * horizon * confirmation
}

fn channel_tree(history: &[HistoricalDataPoint], last: f64, horizon: f64) -> f64 {
    let high = tail(&highs(history), CHANNEL_WINDOW)
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let low = tail(&lows(history), CHANNEL_WINDOW)
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let midpoint = (high + low) / 2.0;

    midpoint + (last - midpoint) * CHANNEL_DECAY.powf(horizon)
}

fn breakout_tree(prices: &[f64], last: f64, horizon: f64) -> f64 {
    let volatility = std_dev(tail(prices, MEDIUM_WINDOW));
    let direction = sign(period_return(prices, SHORT_WINDOW));
    last + volatility * direction * horizon.sqrt() * BREAKOUT_SCALE
}
