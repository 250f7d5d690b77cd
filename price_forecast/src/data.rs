//! Historical OHLCV data handling

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One trading day of OHLCV data
///
/// Sequences of these are expected in ascending date order. Ordering and gaps
/// are never validated; out-of-order input only degrades forecast quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDataPoint {
    /// Trading day, `YYYY-MM-DD` on the wire
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl HistoricalDataPoint {
    /// Create a new data point
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Close prices of a history, oldest first
pub fn closes(history: &[HistoricalDataPoint]) -> Vec<f64> {
    history.iter().map(|p| p.close).collect()
}

/// Volumes of a history, oldest first
pub fn volumes(history: &[HistoricalDataPoint]) -> Vec<f64> {
    history.iter().map(|p| p.volume).collect()
}

/// Daily highs of a history, oldest first
pub fn highs(history: &[HistoricalDataPoint]) -> Vec<f64> {
    history.iter().map(|p| p.high).collect()
}

/// Daily lows of a history, oldest first
pub fn lows(history: &[HistoricalDataPoint]) -> Vec<f64> {
    history.iter().map(|p| p.low).collect()
}

/// Last close of a history, or 0 when it is empty
pub fn last_close(history: &[HistoricalDataPoint]) -> f64 {
    history.last().map_or(0.0, |p| p.close)
}

/// Data loader for historical OHLCV series
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a history from a CSV file with a `date,open,high,low,close,volume` header
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<HistoricalDataPoint>> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading historical data");
        Self::from_reader(file)
    }

    /// Load a history from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<HistoricalDataPoint>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut history = Vec::new();
        for record in csv_reader.deserialize() {
            let point: HistoricalDataPoint = record?;
            history.push(point);
        }

        if history.is_empty() {
            return Err(ForecastError::DataError(
                "No rows found in historical data".to_string(),
            ));
        }

        debug!(rows = history.len(), "historical data loaded");
        Ok(history)
    }
}
