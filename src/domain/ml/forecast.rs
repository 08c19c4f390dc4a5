use super::window::WindowId;

/// Multi-step forecast produced by one model.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub window: WindowId,
    /// Forecast values in natural units, H1 first
    pub values: Vec<f64>,
    /// Labels aligned with `values`
    pub horizons: Vec<String>,
    pub n_steps_forecast: usize,
}

/// Builds the labels `H1..Hn` for an `n`-step forecast.
pub fn horizon_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("H{}", i)).collect()
}
