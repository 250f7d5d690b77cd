//! Merged historical/predicted series for display

use crate::data::HistoricalDataPoint;
use crate::predictor::PredictionResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A point on the price chart; exactly one of `actual` and `predicted` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub actual: Option<f64>,
    pub predicted: Option<f64>,
}

/// Append predictions after the historical closes in one chronological series
pub fn combine(
    historical: &[HistoricalDataPoint],
    predictions: &[PredictionResult],
) -> Vec<ChartPoint> {
    let actual = historical.iter().map(|p| ChartPoint {
        date: p.date,
        actual: Some(p.close),
        predicted: None,
    });
    let predicted = predictions.iter().map(|p| ChartPoint {
        date: p.date,
        actual: None,
        predicted: Some(p.predicted_close),
    });
    actual.chain(predicted).collect()
}
