//! On-disk model artifacts.
//!
//! Each volatility window ships two files: the ONNX export of the regressor
//! (`mejor_modelo_vol{d}d.onnx`) and a JSON sidecar
//! (`mejor_modelo_vol{d}d.json`) with both fitted scalers and the training
//! metadata.

use crate::application::ml::model_bundle::{ModelBundle, ModelMetadata};
use crate::application::ml::regressor::RegressorLoader;
use crate::application::ml::scaler::StandardScaler;
use crate::domain::errors::ArtifactError;
use crate::domain::ml::WindowId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// `mean_` / `scale_` of a fitted sklearn `StandardScaler`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSidecar {
    pub scaler_x: ScalerArtifact,
    pub scaler_y: ScalerArtifact,
    #[serde(rename = "parametros")]
    pub parameters: BTreeMap<String, Value>,
    #[serde(default, rename = "metricas")]
    pub metrics: BTreeMap<String, Value>,
}

impl ModelSidecar {
    /// Validates the sidecar, then opens the regressor at `model_path` with
    /// the widths the metadata declares.
    pub fn into_bundle(
        self,
        window: WindowId,
        model_path: &Path,
        loader: &dyn RegressorLoader,
    ) -> Result<ModelBundle, ArtifactError> {
        let scaler_x = StandardScaler::new(self.scaler_x.mean, self.scaler_x.scale)
            .map_err(|e| e.context("scaler_x"))?;
        let scaler_y = StandardScaler::new(self.scaler_y.mean, self.scaler_y.scale)
            .map_err(|e| e.context("scaler_y"))?;
        let metadata = ModelMetadata::new(self.parameters, self.metrics)?;
        let regressor =
            loader.load(model_path, metadata.n_steps_input, metadata.n_steps_forecast)?;

        ModelBundle::new(window, regressor, scaler_x, scaler_y, metadata)
    }
}

/// Location of a window's JSON sidecar under `base_dir`.
pub fn artifact_path(base_dir: &Path, window: WindowId) -> PathBuf {
    base_dir.join(window.artifact_file_name())
}

/// Location of a window's ONNX model under `base_dir`.
pub fn model_path(base_dir: &Path, window: WindowId) -> PathBuf {
    base_dir.join(window.model_file_name())
}

pub fn read_artifact(path: &Path) -> Result<ModelSidecar, ArtifactError> {
    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_artifact(path: &Path, artifact: &ModelSidecar) -> Result<(), ArtifactError> {
    let file = File::create(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, artifact).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and validates the window's sidecar and model under `base_dir`.
pub fn load_bundle(
    base_dir: &Path,
    window: WindowId,
    loader: &dyn RegressorLoader,
) -> Result<ModelBundle, ArtifactError> {
    let sidecar = artifact_path(base_dir, window);
    read_artifact(&sidecar)?
        .into_bundle(window, &model_path(base_dir, window), loader)
        .map_err(|e| e.context(sidecar.display()))
}
