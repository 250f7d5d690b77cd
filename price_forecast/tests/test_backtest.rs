mod common;

use common::{history_from_closes, sample_history};
use price_forecast::backtest::{evaluate_models, split_index, validation_predictions};
use price_forecast::data::closes;
use price_forecast::metrics::{evaluate, ModelMetrics};
use price_forecast::models::ModelKind;
use price_forecast::AllModelMetrics;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_thin_history_returns_zeroed_metrics() {
    let history = sample_history(19);
    let mut rng = StdRng::seed_from_u64(1);
    let metrics = evaluate_models(&history, &mut rng);

    assert_eq!(metrics.best_model, ModelKind::Lstm);
    for kind in ModelKind::ALL {
        assert_eq!(*metrics.get(kind), ModelMetrics::default());
    }
    assert_eq!(metrics, AllModelMetrics::default());
}

#[test]
fn test_best_model_has_highest_r2() {
    let history = sample_history(80);
    let mut rng = StdRng::seed_from_u64(42);
    let metrics = evaluate_models(&history, &mut rng);

    assert!(ModelKind::ALL.contains(&metrics.best_model));
    let best_r2 = metrics.get(metrics.best_model).r2;
    for kind in ModelKind::ALL {
        assert!(metrics.get(kind).r2 <= best_r2);
    }
}

#[test]
fn test_ties_keep_declaration_order() {
    // A flat series gives every model R² = 0; the first declared model wins
    let history = history_from_closes(&[50.0; 40]);
    let mut rng = StdRng::seed_from_u64(3);
    let metrics = evaluate_models(&history, &mut rng);

    for kind in ModelKind::ALL {
        assert_eq!(metrics.get(kind).r2, 0.0);
    }
    assert_eq!(metrics.best_model, ModelKind::LinearRegression);
}

#[test]
fn test_validation_uses_fixed_training_prefix() {
    let history = sample_history(50);
    let split = split_index(history.len());
    assert_eq!(split, 40);

    let (train, validation) = history.split_at(split);
    let mut rng = StdRng::seed_from_u64(0);
    let predicted = validation_predictions(ModelKind::RandomForest, train, validation.len(), &mut rng);
    assert_eq!(predicted.len(), 10);

    // Each validation day is the training prefix forecast `i + 1` days out
    for (i, value) in predicted.iter().enumerate() {
        let expected = ModelKind::RandomForest.predict(train, i + 1, &mut rng);
        assert_eq!(*value, expected);
    }
}

#[test]
fn test_backtest_is_reproducible_with_seed() {
    let history = sample_history(64);
    let a = evaluate_models(&history, &mut StdRng::seed_from_u64(8));
    let b = evaluate_models(&history, &mut StdRng::seed_from_u64(8));
    assert_eq!(a, b);
}

#[test]
fn test_metrics_match_manual_evaluation() {
    let history = sample_history(45);
    let split = split_index(history.len());
    let (train, validation) = history.split_at(split);

    // Lstm and RandomForest ignore the random source, so the backtest
    // metrics can be recomputed independently
    let metrics = evaluate_models(&history, &mut StdRng::seed_from_u64(1));
    for kind in [ModelKind::RandomForest, ModelKind::Lstm] {
        let predicted =
            validation_predictions(kind, train, validation.len(), &mut StdRng::seed_from_u64(2));
        assert_eq!(*metrics.get(kind), evaluate(&closes(validation), &predicted));
    }
}

#[test]
fn test_display_lists_every_model() {
    let text = AllModelMetrics::default().to_string();
    for kind in ModelKind::ALL {
        assert!(text.contains(kind.as_str()));
    }
    assert!(text.ends_with("Best model: lstm"));
}

#[test]
fn test_serializes_with_camel_case_labels() {
    let json = serde_json::to_value(AllModelMetrics::default()).unwrap();
    assert_eq!(json["bestModel"], "lstm");
    assert!(json.get("linearRegression").is_some());
    assert!(json.get("randomForest").is_some());
}
