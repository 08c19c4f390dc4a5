//! validate -> scale -> infer -> unscale -> label.

use super::model_bundle::ModelBundle;
use super::model_registry::ModelRegistry;
use crate::domain::errors::PredictionError;
use crate::domain::ml::{PredictionResult, horizon_labels};
use ndarray::Array2;
use tracing::debug;

/// Forecasts the next `n_steps_forecast` values for the window `days`.
///
/// Outputs are returned exactly as the model produces them, without clamping.
pub fn predict(
    registry: &ModelRegistry,
    days: i64,
    lags: &[f64],
) -> Result<PredictionResult, PredictionError> {
    let bundle = registry
        .get_days(days)
        .ok_or_else(|| PredictionError::UnknownModel {
            requested: days,
            available: registry.available(),
        })?;

    predict_with_bundle(bundle, lags)
}

pub fn predict_with_bundle(
    bundle: &ModelBundle,
    lags: &[f64],
) -> Result<PredictionResult, PredictionError> {
    let n_in = bundle.n_steps_input();
    let n_out = bundle.n_steps_forecast();

    if lags.len() != n_in {
        return Err(PredictionError::InvalidInputLength {
            expected: n_in,
            received: lags.len(),
        });
    }
    if let Some(index) = lags.iter().position(|v| !v.is_finite()) {
        return Err(PredictionError::NonFiniteInput { index });
    }

    let features = Array2::from_shape_vec((1, n_in), lags.to_vec())
        .map_err(|e| PredictionError::Inference(e.to_string()))?;
    let features_scaled = bundle.scaler_x().transform(&features);

    let prediction_scaled = bundle
        .regressor()
        .predict(&features_scaled)
        .map_err(PredictionError::Inference)?;
    if prediction_scaled.dim() != (1, n_out) {
        return Err(PredictionError::Inference(format!(
            "model returned shape {:?}, expected (1, {})",
            prediction_scaled.dim(),
            n_out
        )));
    }

    let values = bundle.scaler_y().inverse_transform(&prediction_scaled).row(0).to_vec();
    if let Some(horizon) = values.iter().position(|v| !v.is_finite()) {
        return Err(PredictionError::Inference(format!(
            "forecast for H{} is not a finite number",
            horizon + 1
        )));
    }

    debug!("Window {}: {} lags -> {:?}", bundle.window(), n_in, values);

    Ok(PredictionResult {
        window: bundle.window(),
        values,
        horizons: horizon_labels(n_out),
        n_steps_forecast: n_out,
    })
}
