//! Sequence-memory model: gated state, pattern matching and indicators
//!
//! Despite the name this is not a trained network. A fixed-gate memory cell is
//! folded over the closes, the latest five-day shape is matched against
//! history, and the result is blended with momentum and indicator signals.

use super::{period_return, PriceModel};
use crate::constants::{
    BOLLINGER_BIAS, BOLLINGER_LOWER_EDGE, BOLLINGER_MULTIPLIER, BOLLINGER_UPPER_EDGE,
    FORGET_GATE, HIDDEN_STATE_WEIGHT, HORIZON_DECAY_PER_DAY, INPUT_GATE, LSTM_FLOOR_RATIO,
    LSTM_MIN_HISTORY, MEDIUM_WINDOW, MOMENTUM_HORIZON_SCALE, MOMENTUM_LONG_WEIGHT,
    MOMENTUM_SHORT_WEIGHT, MOMENTUM_WEIGHT, PATTERN_LOOKBACK, PATTERN_MARGIN, PATTERN_WEIGHT,
    RSI_BIAS, RSI_OVERBOUGHT, RSI_OVERSOLD, RSI_PERIOD, SHORT_WINDOW, SMA_WINDOW,
    TECHNICAL_WEIGHT, VOLUME_SIGNAL_SCALE,
};
use crate::data::{closes, last_close, volumes, HistoricalDataPoint};
use rand::RngCore;
use tracing::trace;
use trade_math::{
    bollinger_bands, cosine_similarity, mean, relative_strength_index, tail, EPSILON,
};

/// Memory cell after folding over a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryState {
    pub cell: f64,
    pub hidden: f64,
}

impl MemoryState {
    /// Fold the fixed-gate cell over `prices`, seeded with the first close
    pub fn from_prices(prices: &[f64]) -> Self {
        let Some((&first, rest)) = prices.split_first() else {
            return Self {
                cell: 0.0,
                hidden: 0.0,
            };
        };

        rest.iter().fold(
            Self {
                cell: first,
                hidden: 0.0,
            },
            |state, &close| {
                let cell = FORGET_GATE * state.cell + INPUT_GATE * close;
                let hidden = (cell / (close + EPSILON)).tanh() * cell;
                Self { cell, hidden }
            },
        )
    }

    /// Scale `last` by the hidden/cell activation ratio
    pub fn price(&self, last: f64) -> f64 {
        if self.cell.abs() < EPSILON {
            return last;
        }
        self.hidden / self.cell * last
    }
}

/// Most similar earlier window to the latest `PATTERN_LOOKBACK` closes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternMatch {
    /// Index of the first close in the matched window
    pub start: usize,
    /// Cosine similarity of the mean-normalised windows
    pub similarity: f64,
    /// Fractional change from the end of the window to `days_ahead` later
    pub subsequent_change: f64,
}

impl PatternMatch {
    /// Scan all windows that leave room for a `days_ahead + PATTERN_MARGIN` look-ahead
    pub fn find(prices: &[f64], days_ahead: usize) -> Option<Self> {
        if prices.len() < PATTERN_LOOKBACK {
            return None;
        }

        let recent = normalize(tail(prices, PATTERN_LOOKBACK));
        let reserved = days_ahead
            .saturating_add(PATTERN_LOOKBACK)
            .saturating_add(PATTERN_MARGIN);
        let candidates = prices.len().saturating_sub(reserved);

        let mut best: Option<PatternMatch> = None;
        for start in 0..candidates {
            let window = normalize(&prices[start..start + PATTERN_LOOKBACK]);
            let similarity = cosine_similarity(&window, &recent);
            if best.map_or(true, |b| similarity > b.similarity) {
                let anchor = prices[start + PATTERN_LOOKBACK - 1];
                let target = prices[start + PATTERN_LOOKBACK - 1 + days_ahead];
                let subsequent_change = if anchor == 0.0 {
                    0.0
                } else {
                    (target - anchor) / anchor
                };
                best = Some(PatternMatch {
                    start,
                    similarity,
                    subsequent_change,
                });
            }
        }

        best
    }
}

/// Divide a window by its own mean
fn normalize(window: &[f64]) -> Vec<f64> {
    let avg = mean(window) + EPSILON;
    window.iter().map(|v| v / avg).collect()
}

/// Gated-memory simulation blended with pattern and indicator signals
#[derive(Debug, Clone, Copy, Default)]
pub struct LstmModel;

impl LstmModel {
    fn momentum_price(prices: &[f64], last: f64, days_ahead: usize) -> f64 {
        let momentum = MOMENTUM_SHORT_WEIGHT * period_return(prices, SHORT_WINDOW)
            + MOMENTUM_LONG_WEIGHT * period_return(prices, MEDIUM_WINDOW);
        last * (1.0 + momentum * days_ahead as f64 * MOMENTUM_HORIZON_SCALE)
    }

    fn technical_price(history: &[HistoricalDataPoint], prices: &[f64], last: f64) -> f64 {
        let volume = volumes(history);
        let long_volume = mean(tail(&volume, SMA_WINDOW));
        let volume_ratio = if long_volume > 0.0 {
            mean(tail(&volume, SHORT_WINDOW)) / long_volume
        } else {
            1.0
        };
        let volume_signal = (volume_ratio - 1.0) * VOLUME_SIGNAL_SCALE;

        let rsi_bias = match relative_strength_index(prices, RSI_PERIOD) {
            Ok(rsi) if rsi > RSI_OVERBOUGHT => -RSI_BIAS,
            Ok(rsi) if rsi < RSI_OVERSOLD => RSI_BIAS,
            _ => 0.0,
        };

        let band_bias = match bollinger_bands(prices, SMA_WINDOW, BOLLINGER_MULTIPLIER) {
            Ok(bands) if bands.percent_b(last) > BOLLINGER_UPPER_EDGE => -BOLLINGER_BIAS,
            Ok(bands) if bands.percent_b(last) < BOLLINGER_LOWER_EDGE => BOLLINGER_BIAS,
            _ => 0.0,
        };

        last * (1.0 + rsi_bias + band_bias + volume_signal)
    }
}

impl PriceModel for LstmModel {
    fn name(&self) -> &str {
        "LSTM"
    }

    fn min_history(&self) -> usize {
        LSTM_MIN_HISTORY
    }

    fn floor_ratio(&self) -> f64 {
        LSTM_FLOOR_RATIO
    }

    fn estimate(
        &self,
        history: &[HistoricalDataPoint],
        days_ahead: usize,
        _rng: &mut dyn RngCore,
    ) -> f64 {
        let prices = closes(history);
        let last = last_close(history);

        let hidden_price = MemoryState::from_prices(&prices).price(last);
        let pattern = PatternMatch::find(&prices, days_ahead);
        let pattern_price = pattern.map_or(last, |m| last * (1.0 + m.subsequent_change));
        let momentum_price = Self::momentum_price(&prices, last, days_ahead);
        let technical_price = Self::technical_price(history, &prices, last);

        trace!(
            hidden_price,
            pattern_price,
            momentum_price,
            technical_price,
            similarity = pattern.map(|m| m.similarity),
            "sequence memory components"
        );

        let blended = HIDDEN_STATE_WEIGHT * hidden_price
            + PATTERN_WEIGHT * pattern_price
            + MOMENTUM_WEIGHT * momentum_price
            + TECHNICAL_WEIGHT * technical_price;

        let weight =
            (1.0 - days_ahead.saturating_sub(1) as f64 * HORIZON_DECAY_PER_DAY).max(0.0);
        blended * weight + last * (1.0 - weight)
    }
}
