//! # Price Forecast Workspace
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`price_forecast`]: forecasting strategies, backtest and the forecasting entry point
//! - [`trade_math`]: statistics and indicator primitives
//!
//! ## Example
//!
//! ```
//! use price_forecast_workspace::price_forecast::{Forecaster, ModelKind};
//!
//! let mut forecaster = Forecaster::from_seed(7);
//! assert!(forecaster.predict_prices(&[], 7, ModelKind::Lstm).is_empty());
//! ```

pub use price_forecast;
pub use trade_math;

#[cfg(test)]
mod tests {
    #[test]
    fn test_members_are_reachable() {
        assert_eq!(crate::trade_math::mean(&[1.0, 3.0]), 2.0);
        assert_eq!(crate::price_forecast::NAME, "price_forecast");
    }
}
