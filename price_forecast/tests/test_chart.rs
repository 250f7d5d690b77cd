mod common;

use common::sample_history;
use price_forecast::{combine, Forecaster, ModelKind};

#[test]
fn test_combine_appends_predictions_after_history() {
    let history = sample_history(25);
    let predictions = Forecaster::from_seed(4).predict_prices(&history, 5, ModelKind::Lstm);
    let merged = combine(&history, &predictions);

    assert_eq!(merged.len(), history.len() + predictions.len());
    for point in &merged {
        assert!(point.actual.is_some() != point.predicted.is_some());
    }

    for (point, source) in merged.iter().zip(&history) {
        assert_eq!(point.date, source.date);
        assert_eq!(point.actual, Some(source.close));
    }
    for (point, source) in merged[history.len()..].iter().zip(&predictions) {
        assert_eq!(point.date, source.date);
        assert_eq!(point.predicted, Some(source.predicted_close));
    }
}

#[test]
fn test_combine_without_predictions() {
    let history = sample_history(10);
    let merged = combine(&history, &[]);
    assert_eq!(merged.len(), 10);
    assert!(merged.iter().all(|p| p.predicted.is_none()));
}
