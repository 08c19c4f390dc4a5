#![allow(dead_code)]

use ndarray::Array2;
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use volcast::application::ml::{ModelRegistry, RegressorLoader, VolatilityRegressor};
use volcast::domain::errors::ArtifactError;
use volcast::domain::ml::WindowId;
use volcast::infrastructure::persistence::artifact_store::{
    ModelSidecar, ScalerArtifact, artifact_path, model_path, write_artifact,
};

pub const N_STEPS_FORECAST: usize = 7;

/// Lag count each window was trained with; the 28-day model uses 14 lags.
pub fn lags_for(window: WindowId) -> usize {
    match window {
        WindowId::Days7 => 7,
        WindowId::Days14 => 14,
        WindowId::Days21 => 21,
        WindowId::Days28 => 14,
    }
}

/// Forecasts the mean of the (scaled) lags on every horizon.
pub struct MeanForecaster {
    n_inputs: usize,
    n_outputs: usize,
}

impl VolatilityRegressor for MeanForecaster {
    fn predict(&self, features: &Array2<f64>) -> Result<Array2<f64>, String> {
        let means: Vec<f64> = features
            .rows()
            .into_iter()
            .flat_map(|row| std::iter::repeat_n(row.sum() / row.len() as f64, self.n_outputs))
            .collect();
        Array2::from_shape_vec((features.nrows(), self.n_outputs), means)
            .map_err(|e| e.to_string())
    }

    fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    fn name(&self) -> &str {
        "Mean Forecaster"
    }
}

/// Stands in for ONNX Runtime: the model file must exist, its contents are
/// ignored.
pub struct MeanForecasterLoader;

impl RegressorLoader for MeanForecasterLoader {
    fn load(
        &self,
        path: &Path,
        n_inputs: usize,
        n_outputs: usize,
    ) -> Result<Box<dyn VolatilityRegressor>, ArtifactError> {
        fs::metadata(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Box::new(MeanForecaster {
            n_inputs,
            n_outputs,
        }))
    }
}

/// Sidecar for a mean forecaster. Both scalers share parameters so the
/// mean survives unscaling.
pub fn mean_forecaster(window: WindowId) -> ModelSidecar {
    let n_in = lags_for(window);

    let parameters = BTreeMap::from([
        ("volatilidad".to_string(), json!(window.days())),
        ("lag".to_string(), json!(n_in)),
        ("fold".to_string(), json!(3)),
        ("n_steps_input".to_string(), json!(n_in)),
        ("n_steps_forecast".to_string(), json!(N_STEPS_FORECAST)),
        ("hidden_layer_sizes".to_string(), json!([2])),
        ("early_stopping".to_string(), json!(true)),
    ]);
    let metrics = BTreeMap::from([
        ("RMSE".to_string(), json!(0.041)),
        ("MAE".to_string(), json!(0.032)),
        ("MAPE".to_string(), json!(6.5)),
    ]);

    ModelSidecar {
        scaler_x: ScalerArtifact {
            mean: vec![0.5; n_in],
            scale: vec![0.2; n_in],
        },
        scaler_y: ScalerArtifact {
            mean: vec![0.5; N_STEPS_FORECAST],
            scale: vec![0.2; N_STEPS_FORECAST],
        },
        parameters,
        metrics,
    }
}

/// Writes a sidecar and a placeholder model file for each window into `dir`.
pub fn write_models(dir: &Path, windows: &[WindowId]) {
    for &window in windows {
        write_artifact(&artifact_path(dir, window), &mean_forecaster(window))
            .expect("fixture sidecar should be writable");
        fs::write(model_path(dir, window), b"placeholder")
            .expect("fixture model should be writable");
    }
}

/// Loads `candidates` from `dir` with mean forecasters in place of ONNX models.
pub fn load_registry(candidates: &[WindowId], dir: &Path) -> Result<ModelRegistry, ArtifactError> {
    ModelRegistry::load_with(candidates, dir, &MeanForecasterLoader)
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
