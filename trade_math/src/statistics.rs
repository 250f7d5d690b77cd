//! Descriptive statistics over price and volume windows
//!
//! All functions are total: empty or short inputs produce zero rather than
//! an error, so callers can chain them on trailing windows without guards.

use crate::EPSILON;

/// Arithmetic mean, or 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by N), or 0 for fewer than two values
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    values.iter().map(|&v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// The trailing `n` values, or the whole slice when it is shorter
pub fn tail(values: &[f64], n: usize) -> &[f64] {
    &values[values.len().saturating_sub(n)..]
}

/// Coefficient of variation (std_dev / mean), 0 when the mean is 0
pub fn volatility_ratio(values: &[f64]) -> f64 {
    let avg = mean(values);
    if avg == 0.0 {
        return 0.0;
    }
    std_dev(values) / avg
}

/// Cosine similarity of two equally sized vectors
///
/// The norm product is padded with [`EPSILON`] so zero vectors score 0
/// instead of dividing by zero. Extra elements of the longer slice are ignored.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    dot / (norm_a * norm_b + EPSILON)
}

/// Sign of a value as -1, 0 or 1
///
/// Unlike [`f64::signum`], zero maps to zero.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
