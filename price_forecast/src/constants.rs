//! Heuristic parameters of the forecasting strategies
//!
//! These values define the behaviour of every model, so they live in one
//! place instead of being scattered through the formulas.

// Shared windows
pub const VOLATILITY_WINDOW: usize = 20;
pub const SMA_WINDOW: usize = 20;
pub const SHORT_WINDOW: usize = 5;
pub const MEDIUM_WINDOW: usize = 10;

// Linear regression
pub const LINEAR_MIN_HISTORY: usize = 5;
pub const LINEAR_NOISE_SCALE: f64 = 0.1;
pub const LINEAR_FLOOR_RATIO: f64 = 0.7;

// ARIMA-style differencing
pub const ARIMA_MIN_HISTORY: usize = 10;
pub const AR_LAST_DIFF_WEIGHT: f64 = 0.6;
pub const AR_PREV_DIFF_WEIGHT: f64 = 0.3;
pub const MA_WEIGHT: f64 = 0.4;
pub const MA_WINDOW: usize = 10;
pub const AR_DECAY: f64 = 0.9;
pub const MA_DECAY: f64 = 0.85;
pub const ARIMA_NOISE_SCALE: f64 = 0.15;
pub const ARIMA_FLOOR_RATIO: f64 = 0.75;

// Random forest committee
pub const FOREST_MIN_HISTORY: usize = 15;
pub const MOMENTUM_SHORT_WEIGHT: f64 = 0.6;
pub const MOMENTUM_LONG_WEIGHT: f64 = 0.4;
pub const MOMENTUM_HORIZON_SCALE: f64 = 0.1;
pub const REVERSION_RATE: f64 = 0.2;
pub const HIGH_VOLUME_BOOST: f64 = 1.02;
pub const LOW_VOLUME_DAMPING: f64 = 0.98;
pub const CHANNEL_WINDOW: usize = 20;
pub const CHANNEL_DECAY: f64 = 0.92;
pub const BREAKOUT_SCALE: f64 = 0.3;
pub const FOREST_FLOOR_RATIO: f64 = 0.7;

// LSTM-style sequence memory
pub const LSTM_MIN_HISTORY: usize = 15;
pub const FORGET_GATE: f64 = 0.9;
pub const INPUT_GATE: f64 = 0.3;
pub const PATTERN_LOOKBACK: usize = 5;
pub const PATTERN_MARGIN: usize = 5;
pub const RSI_PERIOD: usize = 14;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_BIAS: f64 = 0.01;
pub const BOLLINGER_MULTIPLIER: f64 = 2.0;
pub const BOLLINGER_UPPER_EDGE: f64 = 0.8;
pub const BOLLINGER_LOWER_EDGE: f64 = 0.2;
pub const BOLLINGER_BIAS: f64 = 0.005;
pub const VOLUME_SIGNAL_SCALE: f64 = 0.01;
pub const HIDDEN_STATE_WEIGHT: f64 = 0.25;
pub const PATTERN_WEIGHT: f64 = 0.20;
pub const MOMENTUM_WEIGHT: f64 = 0.25;
pub const TECHNICAL_WEIGHT: f64 = 0.30;
pub const HORIZON_DECAY_PER_DAY: f64 = 0.01;
pub const LSTM_FLOOR_RATIO: f64 = 0.7;

// Prediction confidence
pub const LSTM_CONFIDENCE: f64 = 0.92;
pub const FOREST_CONFIDENCE: f64 = 0.88;
pub const ARIMA_CONFIDENCE: f64 = 0.85;
pub const LINEAR_CONFIDENCE: f64 = 0.82;
pub const CONFIDENCE_DECAY_PER_DAY: f64 = 0.05;
pub const MIN_CONFIDENCE: f64 = 0.55;

// Forecasting and backtesting
pub const DEFAULT_HORIZON_DAYS: usize = 7;
pub const MIN_FORECAST_HISTORY: usize = 15;
pub const MIN_BACKTEST_HISTORY: usize = 20;
pub const TRAIN_SPLIT_RATIO: f64 = 0.8;
