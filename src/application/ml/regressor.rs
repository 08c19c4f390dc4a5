use crate::domain::errors::ArtifactError;
use ndarray::Array2;
use std::path::Path;

/// Interface for trained multi-output regressors
pub trait VolatilityRegressor: Send + Sync {
    /// Runs inference on a batch of already-scaled rows.
    /// Output has one row per input row and `n_outputs()` columns.
    fn predict(&self, features: &Array2<f64>) -> Result<Array2<f64>, String>;

    /// Expected feature width
    fn n_inputs(&self) -> usize;

    /// Produced output width
    fn n_outputs(&self) -> usize;

    /// Get model name/type
    fn name(&self) -> &str;
}

/// Opens the serialized model of one window.
///
/// `n_inputs`/`n_outputs` come from the training metadata in the sidecar.
pub trait RegressorLoader {
    fn load(
        &self,
        path: &Path,
        n_inputs: usize,
        n_outputs: usize,
    ) -> Result<Box<dyn VolatilityRegressor>, ArtifactError>;
}
