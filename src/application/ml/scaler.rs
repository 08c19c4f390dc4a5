//! Per-feature standardization fitted at training time.
//!
//! x_scaled = (x - mean) / scale, and the inverse y = y_scaled * scale + mean.

use crate::domain::errors::ArtifactError;
use ndarray::{Array1, Array2};

#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        if mean.is_empty() {
            return Err(ArtifactError::invalid("scaler has no features"));
        }
        if mean.len() != scale.len() {
            return Err(ArtifactError::invalid(format!(
                "scaler mean has {} features but scale has {}",
                mean.len(),
                scale.len()
            )));
        }
        if mean.iter().any(|m| !m.is_finite()) {
            return Err(ArtifactError::invalid("scaler mean contains non-finite values"));
        }
        if let Some(i) = scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            return Err(ArtifactError::invalid(format!(
                "scaler scale at feature {} is zero or non-finite",
                i
            )));
        }

        Ok(Self {
            mean: Array1::from(mean),
            scale: Array1::from(scale),
        })
    }

    /// Number of features this scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardizes every row. Callers guarantee `x.ncols() == n_features()`.
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        (x - &self.mean) / &self.scale
    }

    /// Maps standardized rows back to natural units.
    pub fn inverse_transform(&self, x: &Array2<f64>) -> Array2<f64> {
        x * &self.scale + &self.mean
    }
}
