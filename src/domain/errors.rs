use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ml::window::WindowId;

/// Errors raised while serving a single prediction
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Modelo para {requested} días no disponible. Modelos disponibles: {}", format_windows(.available))]
    UnknownModel {
        requested: i64,
        available: Vec<WindowId>,
    },

    #[error("Se requieren exactamente {expected} valores de lags. Recibidos: {received}")]
    InvalidInputLength { expected: usize, received: usize },

    #[error("El lag en la posición {index} no es un número finito")]
    NonFiniteInput { index: usize },

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Errors related to loading model artifacts from disk
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load model {path:?}: {reason}")]
    Model { path: PathBuf, reason: String },

    #[error("Invalid model bundle: {reason}")]
    Invalid { reason: String },
}

impl ArtifactError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ArtifactError::Invalid {
            reason: reason.into(),
        }
    }

    /// Prefixes the reason of an `Invalid` error; other variants already
    /// carry their path.
    pub fn context(self, context: impl std::fmt::Display) -> Self {
        match self {
            ArtifactError::Invalid { reason } => ArtifactError::Invalid {
                reason: format!("{}: {}", context, reason),
            },
            other => other,
        }
    }
}

fn format_windows(windows: &[WindowId]) -> String {
    let days: Vec<String> = windows.iter().map(|w| w.days().to_string()).collect();
    format!("[{}]", days.join(", "))
}
