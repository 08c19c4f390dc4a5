use super::schemas::ErrorDetail;
use crate::domain::errors::PredictionError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error returned by a handler, rendered as `{"detail": ...}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }
}

/// Mapping used by the predict route; every client-side failure is a 400.
impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        let status = match err {
            PredictionError::UnknownModel { .. }
            | PredictionError::InvalidInputLength { .. }
            | PredictionError::NonFiniteInput { .. } => StatusCode::BAD_REQUEST,
            PredictionError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorDetail { detail: self.detail })).into_response()
    }
}
