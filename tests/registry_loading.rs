//! Loading model artifacts from disk into the registry.

mod common;

use std::fs;
use tempfile::TempDir;
use volcast::application::ml::pipeline;
use volcast::domain::errors::{ArtifactError, PredictionError};
use volcast::domain::ml::WindowId;
use volcast::infrastructure::persistence::artifact_store::{
    artifact_path, model_path, write_artifact,
};

#[test]
fn test_loads_all_present_artifacts() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &WindowId::ALL);

    let registry = common::load_registry(&WindowId::ALL, dir.path()).unwrap();

    assert_eq!(registry.available(), WindowId::ALL.to_vec());
    for window in WindowId::ALL {
        let bundle = registry.get(window).unwrap();
        assert_eq!(bundle.n_steps_input(), common::lags_for(window));
        assert_eq!(bundle.n_steps_forecast(), common::N_STEPS_FORECAST);
        assert_eq!(bundle.scaler_x().n_features(), bundle.n_steps_input());
    }
}

#[test]
fn test_missing_artifacts_are_skipped() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &[WindowId::Days14, WindowId::Days28]);

    let registry = common::load_registry(&WindowId::ALL, dir.path()).unwrap();

    assert_eq!(registry.available(), vec![WindowId::Days14, WindowId::Days28]);
    assert!(registry.get(WindowId::Days7).is_none());
}

#[test]
fn test_only_candidate_windows_are_loaded() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &WindowId::ALL);

    let registry = common::load_registry(&[WindowId::Days21], dir.path()).unwrap();
    assert_eq!(registry.available(), vec![WindowId::Days21]);
}

#[test]
fn test_empty_directory_yields_empty_registry() {
    let dir = TempDir::new().unwrap();

    let registry = common::load_registry(&WindowId::ALL, dir.path()).unwrap();
    assert!(registry.is_empty());

    let err = pipeline::predict(&registry, 7, &[0.5; 7]).unwrap_err();
    assert!(matches!(err, PredictionError::UnknownModel { .. }));
}

#[test]
fn test_malformed_artifact_fails_with_path() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &[WindowId::Days7]);
    let broken = artifact_path(dir.path(), WindowId::Days14);
    fs::write(&broken, "{ not json").unwrap();

    let err = common::load_registry(&WindowId::ALL, dir.path()).unwrap_err();
    match err {
        ArtifactError::Parse { path, .. } => assert_eq!(path, broken),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_sidecar_without_model_fails_with_model_path() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &WindowId::ALL);
    let missing = model_path(dir.path(), WindowId::Days21);
    fs::remove_file(&missing).unwrap();

    let err = common::load_registry(&WindowId::ALL, dir.path()).unwrap_err();
    match err {
        ArtifactError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_model_without_sidecar_is_skipped() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &WindowId::ALL);
    fs::remove_file(artifact_path(dir.path(), WindowId::Days7)).unwrap();

    let registry = common::load_registry(&WindowId::ALL, dir.path()).unwrap();
    assert_eq!(
        registry.available(),
        vec![WindowId::Days14, WindowId::Days21, WindowId::Days28]
    );
}

#[test]
fn test_overflowing_forecast_is_rejected() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &[WindowId::Days7]);
    let registry = common::load_registry(&WindowId::ALL, dir.path()).unwrap();

    let err = pipeline::predict(&registry, 7, &[1e308; 7]).unwrap_err();
    assert!(matches!(err, PredictionError::Inference(_)));
}

#[test]
fn test_inconsistent_artifact_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut artifact = common::mean_forecaster(WindowId::Days7);
    artifact.scaler_x.mean.pop();
    artifact.scaler_x.scale.pop();
    write_artifact(&artifact_path(dir.path(), WindowId::Days7), &artifact).unwrap();
    fs::write(model_path(dir.path(), WindowId::Days7), b"placeholder").unwrap();

    let err = common::load_registry(&WindowId::ALL, dir.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("input scaler"));
    assert!(msg.contains("mejor_modelo_vol7d.json"));
}

#[test]
fn test_loaded_models_forecast_expected_shapes() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &WindowId::ALL);
    let registry = common::load_registry(&WindowId::ALL, dir.path()).unwrap();

    // Synthetic inputs per window: flat, rising, falling, gentle cycle
    let inputs: Vec<(WindowId, Vec<f64>)> = vec![
        (WindowId::Days7, vec![0.25, 0.28, 0.26, 0.27, 0.29, 0.26, 0.28]),
        (WindowId::Days14, (0..14).map(|i| 0.20 + 0.01 * i as f64).collect()),
        (WindowId::Days21, (0..21).map(|i| 0.35 - 0.005 * i as f64).collect()),
        (
            WindowId::Days28,
            (0..14).map(|i| 0.22 + (i as f64 / 5.0).sin() * 0.01).collect(),
        ),
    ];

    for (window, lags) in inputs {
        let result = pipeline::predict(&registry, window.days() as i64, &lags).unwrap();
        assert_eq!(result.values.len(), common::N_STEPS_FORECAST);
        assert!(result.values.iter().all(|v| *v >= 0.0));
        for v in &result.values {
            assert!((v - common::mean(&lags)).abs() < 1e-9);
        }
    }
}

#[test]
fn test_extreme_inputs_keep_forecast_shape() {
    let dir = TempDir::new().unwrap();
    common::write_models(dir.path(), &WindowId::ALL);
    let registry = common::load_registry(&WindowId::ALL, dir.path()).unwrap();

    for window in WindowId::ALL {
        let n = common::lags_for(window);
        for level in [0.05, 1.5] {
            let lags = vec![level; n];
            let result = pipeline::predict(&registry, window.days() as i64, &lags).unwrap();
            assert_eq!(result.values.len(), common::N_STEPS_FORECAST);
            assert!(result.values.iter().all(|v| *v >= 0.0));
        }
    }
}
