use approx::assert_relative_eq;
use price_forecast::metrics::{directional_accuracy, evaluate, r_squared, ModelMetrics};

#[test]
fn test_identical_series_scores_perfectly() {
    let actual = vec![10.0, 12.0, 11.0, 15.0, 14.0];
    let metrics = evaluate(&actual, &actual);

    assert_eq!(metrics.mse, 0.0);
    assert_eq!(metrics.mae, 0.0);
    assert_eq!(metrics.r2, 1.0);
    assert_eq!(metrics.accuracy, 100.0);
}

#[test]
fn test_regression_metrics() {
    let actual = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let predicted = vec![12.0, 18.0, 33.0, 37.0, 52.0];
    let metrics = evaluate(&actual, &predicted);

    // Errors 2, 2, 3, 3, 2 normalised by the max actual of 50
    assert_relative_eq!(metrics.mae, 12.0 / 5.0 / 50.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.mse, 30.0 / 5.0 / 2500.0, epsilon = 1e-12);
    // SS_res = 30, SS_tot = 1000
    assert_relative_eq!(metrics.r2, 0.97, epsilon = 1e-12);
    // Both series rise at every step
    assert_eq!(metrics.accuracy, 100.0);
}

#[test]
fn test_directional_accuracy() {
    let actual = [1.0, 2.0, 3.0, 2.0, 1.0];
    let predicted = [1.0, 2.0, 1.0, 0.0, 2.0];
    // Hits on steps 1 and 3 of 4
    assert_eq!(directional_accuracy(&actual, &predicted), 50.0);
    assert_eq!(directional_accuracy(&[1.0], &[1.0]), 0.0);
}

#[test]
fn test_r_squared_can_be_negative() {
    let actual = [1.0, 2.0, 3.0];
    let predicted = [3.0, 2.0, 1.0];
    assert_relative_eq!(r_squared(&actual, &predicted), -3.0, epsilon = 1e-12);
}

#[test]
fn test_invalid_input_gives_zeroed_metrics() {
    let empty: Vec<f64> = vec![];
    assert_eq!(evaluate(&empty, &empty), ModelMetrics::default());

    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![1.0, 2.0];
    assert_eq!(evaluate(&actual, &predicted), ModelMetrics::default());
}

#[test]
fn test_zero_error_on_flat_series_is_not_all_zero() {
    // A perfect forecast of a flat window has zero error and zero R², like
    // the invalid-input case, but still reports full directional accuracy.
    let flat = vec![5.0, 5.0, 5.0, 5.0];
    let metrics = evaluate(&flat, &flat);
    assert_eq!(metrics.mse, 0.0);
    assert_eq!(metrics.mae, 0.0);
    assert_eq!(metrics.r2, 0.0);
    assert_eq!(metrics.accuracy, 100.0);
    assert_ne!(metrics, ModelMetrics::default());
}

#[test]
fn test_non_positive_actuals_do_not_divide_by_zero() {
    let actual = [0.0, 0.0, 0.0];
    let predicted = [1.0, -1.0, 0.0];
    let metrics = evaluate(&actual, &predicted);
    assert!(metrics.mse.is_finite());
    assert_relative_eq!(metrics.mae, 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_display() {
    let metrics = ModelMetrics {
        mse: 0.001,
        r2: 0.75,
        mae: 0.02,
        accuracy: 60.0,
    };
    let text = metrics.to_string();
    assert!(text.contains("R2: 0.7500"));
    assert!(text.contains("Direction: 60.00%"));
}
