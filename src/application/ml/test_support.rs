//! In-memory regressors for unit tests.

use super::regressor::{RegressorLoader, VolatilityRegressor};
use crate::domain::errors::ArtifactError;
use ndarray::{Array1, Array2};
use std::path::Path;

/// `Y = X · Wᵀ + b`, with `coef` given as `n_outputs` rows of `n_inputs`.
pub struct LinearRegressor {
    coef: Array2<f64>,
    intercept: Array1<f64>,
}

impl LinearRegressor {
    pub fn new(coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> Self {
        let n_in = coef.first().map_or(0, Vec::len);
        let flat: Vec<f64> = coef.iter().flatten().copied().collect();
        Self {
            coef: Array2::from_shape_vec((coef.len(), n_in), flat).unwrap(),
            intercept: Array1::from(intercept),
        }
    }

    /// Every output equals the first input.
    pub fn first_input(n_in: usize, n_out: usize) -> Self {
        let mut coef = vec![vec![0.0; n_in]; n_out];
        for row in coef.iter_mut() {
            row[0] = 1.0;
        }
        Self::new(coef, vec![0.0; n_out])
    }
}

impl VolatilityRegressor for LinearRegressor {
    fn predict(&self, features: &Array2<f64>) -> Result<Array2<f64>, String> {
        Ok(features.dot(&self.coef.t()) + &self.intercept)
    }

    fn n_inputs(&self) -> usize {
        self.coef.ncols()
    }

    fn n_outputs(&self) -> usize {
        self.coef.nrows()
    }

    fn name(&self) -> &str {
        "Linear Regressor"
    }
}

/// Ignores the model file and hands out a zero linear model of the
/// requested shape.
pub struct ZeroLoader;

impl RegressorLoader for ZeroLoader {
    fn load(
        &self,
        _path: &Path,
        n_inputs: usize,
        n_outputs: usize,
    ) -> Result<Box<dyn VolatilityRegressor>, ArtifactError> {
        Ok(Box::new(LinearRegressor::new(
            vec![vec![0.0; n_inputs]; n_outputs],
            vec![0.0; n_outputs],
        )))
    }
}
