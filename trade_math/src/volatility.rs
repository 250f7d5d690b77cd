//! Volatility indicator implementations

use crate::statistics::{mean, std_dev, tail};
use crate::{MathError, Result, EPSILON};
use serde::{Deserialize, Serialize};

/// Bollinger Bands computed over a single trailing window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
}

impl BollingerBands {
    /// Position of `price` inside the bands: 0 at the lower band, 1 at the upper
    pub fn percent_b(&self, price: f64) -> f64 {
        (price - self.lower) / (self.upper - self.lower + EPSILON)
    }
}

/// Bollinger Bands over the last `period` values with a `multiplier` of std devs
pub fn bollinger_bands(values: &[f64], period: usize, multiplier: f64) -> Result<BollingerBands> {
    if period == 0 {
        return Err(MathError::InvalidInput(
            "Period must be greater than zero".to_string(),
        ));
    }
    if multiplier <= 0.0 {
        return Err(MathError::InvalidInput(
            "Standard deviation multiplier must be greater than zero".to_string(),
        ));
    }
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot compute bands over an empty window".to_string(),
        ));
    }

    let window = tail(values, period);
    let middle = mean(window);
    let spread = std_dev(window) * multiplier;

    Ok(BollingerBands {
        middle,
        upper: middle + spread,
        lower: middle - spread,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bands() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bands = bollinger_bands(&values, 8, 2.0).unwrap();
        assert_relative_eq!(bands.middle, 5.0);
        assert_relative_eq!(bands.upper, 9.0);
        assert_relative_eq!(bands.lower, 1.0);
        assert_relative_eq!(bands.percent_b(5.0), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_flat_window_percent_b_is_finite() {
        let bands = bollinger_bands(&[3.0, 3.0, 3.0], 20, 2.0).unwrap();
        assert_eq!(bands.upper, bands.lower);
        assert!(bands.percent_b(3.0).is_finite());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(bollinger_bands(&[1.0], 0, 2.0).is_err());
        assert!(bollinger_bands(&[1.0], 5, 0.0).is_err());
        assert!(bollinger_bands(&[], 5, 2.0).is_err());
    }
}
