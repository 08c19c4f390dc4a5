use super::regressor::{RegressorLoader, VolatilityRegressor};
use crate::domain::errors::ArtifactError;
use ndarray::Array2;
use ort::session::Session;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Multi-output regressor exported to ONNX (e.g. an sklearn `MLPRegressor`
/// converted with skl2onnx): one float tensor `[batch, n_inputs]` in, one
/// `[batch, n_outputs]` out.
pub struct OnnxRegressor {
    session: Mutex<Session>,
    n_inputs: usize,
    n_outputs: usize,
}

impl OnnxRegressor {
    pub fn load(path: &Path, n_inputs: usize, n_outputs: usize) -> Result<Self, ArtifactError> {
        std::fs::metadata(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let model_error = |e: ort::Error| ArtifactError::Model {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        let session = Session::builder()
            .map_err(model_error)?
            .commit_from_file(path)
            .map_err(model_error)?;

        info!("Successfully loaded ONNX model from {:?}", path);
        Ok(Self {
            session: Mutex::new(session),
            n_inputs,
            n_outputs,
        })
    }
}

impl VolatilityRegressor for OnnxRegressor {
    fn predict(&self, features: &Array2<f64>) -> Result<Array2<f64>, String> {
        if features.ncols() != self.n_inputs {
            return Err(format!(
                "expected {} features, got {}",
                self.n_inputs,
                features.ncols()
            ));
        }

        let rows = features.nrows();
        let flat_data: Vec<f32> = features.iter().map(|v| *v as f32).collect();
        let shape = vec![rows, self.n_inputs];

        let input_value = ort::value::Value::from_array((shape.as_slice(), flat_data))
            .map_err(|e| format!("Input value creation failed: {}", e))?;
        let inputs = ort::inputs![input_value];

        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Mutex lock failed: {}", e))?;
        let outputs = session.run(inputs).map_err(|e| e.to_string())?;

        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or("No output found")?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| e.to_string())?;

        let values: Vec<f64> = data.1.iter().map(|v| *v as f64).collect();
        if values.len() != rows * self.n_outputs {
            return Err(format!(
                "model produced {} values, expected {} x {}",
                values.len(),
                rows,
                self.n_outputs
            ));
        }

        Array2::from_shape_vec((rows, self.n_outputs), values).map_err(|e| e.to_string())
    }

    fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }
}

/// Opens `.onnx` exports through ONNX Runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnnxLoader;

impl RegressorLoader for OnnxLoader {
    fn load(
        &self,
        path: &Path,
        n_inputs: usize,
        n_outputs: usize,
    ) -> Result<Box<dyn VolatilityRegressor>, ArtifactError> {
        Ok(Box::new(OnnxRegressor::load(path, n_inputs, n_outputs)?))
    }
}
