use super::regressor::VolatilityRegressor;
use super::scaler::StandardScaler;
use crate::domain::errors::ArtifactError;
use crate::domain::ml::WindowId;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Parameter keys every trained bundle is expected to carry.
pub const EXPECTED_PARAMETER_KEYS: &[&str] =
    &["volatilidad", "lag", "fold", "n_steps_input", "n_steps_forecast"];

/// Metric keys every trained bundle is expected to carry.
pub const EXPECTED_METRIC_KEYS: &[&str] = &["RMSE", "MAE", "MAPE"];

/// Training metadata shipped alongside a model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMetadata {
    pub n_steps_input: usize,
    pub n_steps_forecast: usize,
    pub parametros: BTreeMap<String, Value>,
    pub metricas: BTreeMap<String, Value>,
}

impl ModelMetadata {
    /// Extracts the input/forecast lengths from the free-form parameter map.
    pub fn new(
        parametros: BTreeMap<String, Value>,
        metricas: BTreeMap<String, Value>,
    ) -> Result<Self, ArtifactError> {
        let n_steps_input = positive_integer(&parametros, "n_steps_input")?;
        let n_steps_forecast = positive_integer(&parametros, "n_steps_forecast")?;

        Ok(Self {
            n_steps_input,
            n_steps_forecast,
            parametros,
            metricas,
        })
    }
}

/// Accepts `7` as well as `7.0`, since training pipelines often emit
/// integer parameters as floats.
fn positive_integer(map: &BTreeMap<String, Value>, key: &str) -> Result<usize, ArtifactError> {
    let value = map
        .get(key)
        .ok_or_else(|| ArtifactError::invalid(format!("missing parameter '{}'", key)))?;

    let n = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        _ => None,
    };

    match n {
        Some(n) if n > 0 => Ok(n as usize),
        _ => Err(ArtifactError::invalid(format!(
            "parameter '{}' must be a positive integer, got {}",
            key, value
        ))),
    }
}

/// Everything needed to serve one volatility window.
///
/// Immutable once built; shared between requests behind an `Arc`.
pub struct ModelBundle {
    window: WindowId,
    regressor: Box<dyn VolatilityRegressor>,
    scaler_x: StandardScaler,
    scaler_y: StandardScaler,
    metadata: ModelMetadata,
}

impl ModelBundle {
    /// Validates that the regressor, both scalers and the metadata agree on
    /// input and output widths.
    pub fn new(
        window: WindowId,
        regressor: Box<dyn VolatilityRegressor>,
        scaler_x: StandardScaler,
        scaler_y: StandardScaler,
        metadata: ModelMetadata,
    ) -> Result<Self, ArtifactError> {
        let n_in = metadata.n_steps_input;
        let n_out = metadata.n_steps_forecast;

        if scaler_x.n_features() != n_in {
            return Err(ArtifactError::invalid(format!(
                "input scaler has {} features but n_steps_input is {}",
                scaler_x.n_features(),
                n_in
            )));
        }
        if scaler_y.n_features() != n_out {
            return Err(ArtifactError::invalid(format!(
                "output scaler has {} features but n_steps_forecast is {}",
                scaler_y.n_features(),
                n_out
            )));
        }
        if regressor.n_inputs() != n_in || regressor.n_outputs() != n_out {
            return Err(ArtifactError::invalid(format!(
                "{} maps {} -> {} but metadata declares {} -> {}",
                regressor.name(),
                regressor.n_inputs(),
                regressor.n_outputs(),
                n_in,
                n_out
            )));
        }

        for key in EXPECTED_PARAMETER_KEYS {
            if !metadata.parametros.contains_key(*key) {
                warn!("Model for window {} is missing parameter '{}'", window, key);
            }
        }
        for key in EXPECTED_METRIC_KEYS {
            if !metadata.metricas.contains_key(*key) {
                warn!("Model for window {} is missing metric '{}'", window, key);
            }
        }

        Ok(Self {
            window,
            regressor,
            scaler_x,
            scaler_y,
            metadata,
        })
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn regressor(&self) -> &dyn VolatilityRegressor {
        self.regressor.as_ref()
    }

    pub fn scaler_x(&self) -> &StandardScaler {
        &self.scaler_x
    }

    pub fn scaler_y(&self) -> &StandardScaler {
        &self.scaler_y
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn n_steps_input(&self) -> usize {
        self.metadata.n_steps_input
    }

    pub fn n_steps_forecast(&self) -> usize {
        self.metadata.n_steps_forecast
    }
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("window", &self.window)
            .field("regressor", &self.regressor.name())
            .field("n_steps_input", &self.metadata.n_steps_input)
            .field("n_steps_forecast", &self.metadata.n_steps_forecast)
            .finish()
    }
}
