//! # Trade Math
//!
//! Statistics and indicator primitives used by the price forecasting engine.
//! Everything here works on plain `f64` slices ordered oldest to newest.

use thiserror::Error;

// Indicator modules
pub mod oscillators;
pub mod regression;
pub mod statistics;
pub mod volatility;

pub use oscillators::relative_strength_index;
pub use regression::LinearFit;
pub use statistics::{cosine_similarity, mean, sign, std_dev, tail, variance, volatility_ratio};
pub use volatility::{bollinger_bands, BollingerBands};

/// Small additive used to keep ratios finite
pub const EPSILON: f64 = 1e-8;

/// Errors that can occur in trading-related calculations
#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for trading math operations
pub type Result<T> = std::result::Result<T, MathError>;
