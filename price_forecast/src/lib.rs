//! # Price Forecast
//!
//! Short-term close price forecasting from daily OHLCV history.
//!
//! ## Features
//!
//! - Four heuristic strategies: linear regression, ARIMA-style differencing,
//!   a random-forest-style committee and an LSTM-style sequence memory
//! - Scale-normalised error metrics and directional accuracy
//! - 80/20 backtest that elects the best strategy by R²
//! - Dated forecasts that skip weekends, with decaying confidence
//!
//! The strategy names describe what each heuristic imitates. Nothing is
//! trained and no model state is persisted.
//!
//! ## Quick Start
//!
//! ```no_run
//! use price_forecast::{DataLoader, Forecaster};
//!
//! let history = DataLoader::from_csv("prices.csv")?;
//! let mut forecaster = Forecaster::from_seed(42);
//!
//! let metrics = forecaster.evaluate_models(&history);
//! let predictions = forecaster.predict_prices(&history, 7, metrics.best_model);
//! for p in &predictions {
//!     println!("{} {:.2} ({:.0}%)", p.date, p.predicted_close, p.confidence * 100.0);
//! }
//! # Ok::<(), price_forecast::ForecastError>(())
//! ```

pub mod backtest;
pub mod chart;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod predictor;

// Re-export commonly used types
pub use crate::backtest::{evaluate_models, AllModelMetrics};
pub use crate::chart::{combine, ChartPoint};
pub use crate::config::ForecastConfig;
pub use crate::data::{DataLoader, HistoricalDataPoint};
pub use crate::error::{ForecastError, Result};
pub use crate::metrics::{evaluate, ModelMetrics};
pub use crate::models::{ModelKind, PriceModel};
pub use crate::predictor::{Forecaster, PredictionResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
