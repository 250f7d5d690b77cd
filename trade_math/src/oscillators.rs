//! Oscillator indicator implementations

use crate::statistics::tail;
use crate::{MathError, Result};

/// Average loss used when the lookback contains no down moves
pub const MIN_AVERAGE_LOSS: f64 = 0.001;

/// Relative Strength Index over the last `period` price changes
///
/// Gains and losses are simple averages over the lookback. When there are no
/// losses the average loss falls back to [`MIN_AVERAGE_LOSS`], which pins a
/// strictly rising window close to 100 rather than dividing by zero.
pub fn relative_strength_index(prices: &[f64], period: usize) -> Result<f64> {
    if period == 0 {
        return Err(MathError::InvalidInput(
            "Period must be greater than zero".to_string(),
        ));
    }
    if prices.len() < 2 {
        return Err(MathError::InsufficientData(format!(
            "RSI needs at least 2 prices, have {}",
            prices.len()
        )));
    }

    let window = tail(prices, period + 1);
    let changes: Vec<f64> = window.windows(2).map(|w| w[1] - w[0]).collect();
    let count = changes.len() as f64;

    let avg_gain = changes.iter().filter(|&&c| c > 0.0).sum::<f64>() / count;
    let avg_loss = changes.iter().filter(|&&c| c < 0.0).map(|c| -c).sum::<f64>() / count;
    let avg_loss = if avg_loss > 0.0 {
        avg_loss
    } else {
        MIN_AVERAGE_LOSS
    };

    let rs = avg_gain / avg_loss;
    Ok(100.0 - 100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rsi_balanced() {
        // Equal gains and losses give RSI of 50
        let prices = [10.0, 11.0, 10.0, 11.0, 10.0];
        assert_relative_eq!(relative_strength_index(&prices, 4).unwrap(), 50.0);
    }

    #[test]
    fn test_rsi_only_gains_uses_loss_floor() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let rsi = relative_strength_index(&prices, 14).unwrap();
        assert!(rsi > 99.0 && rsi < 100.0);
    }

    #[test]
    fn test_rsi_only_losses() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        assert_eq!(relative_strength_index(&prices, 14).unwrap(), 0.0);
    }

    #[test]
    fn test_rsi_errors() {
        assert!(relative_strength_index(&[1.0], 14).is_err());
        assert!(relative_strength_index(&[1.0, 2.0], 0).is_err());
    }
}
