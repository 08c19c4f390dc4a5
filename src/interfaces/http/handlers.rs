//! API route handlers

use super::AppState;
use super::error::ApiError;
use super::numeric::to_portable_map;
use super::schemas::{DatosBtc, InfoModelo, ModelosDisponibles, RespuestaPrediccion, Salud};
use crate::application::ml::pipeline;
use crate::domain::errors::PredictionError;
use crate::domain::ml::WindowId;
use crate::infrastructure::observability::LatencyGuard;
use crate::infrastructure::observability::metrics::{
    OUTCOME_ERROR, OUTCOME_INVALID_INPUT, OUTCOME_OK, OUTCOME_UNKNOWN_MODEL,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use tracing::{error, info, warn};

pub const API_TITLE: &str = "API de Predicción de Volatilidad BTC";

/// `GET /` - greeting plus the windows currently served
pub async fn raiz(State(state): State<AppState>) -> Json<ModelosDisponibles> {
    Json(ModelosDisponibles {
        mensaje: API_TITLE.to_string(),
        modelos_disponibles: state
            .registry
            .available()
            .iter()
            .map(WindowId::label)
            .collect(),
    })
}

/// `POST /predecir`
pub async fn predecir(
    State(state): State<AppState>,
    Json(data): Json<DatosBtc>,
) -> Result<Json<RespuestaPrediccion>, ApiError> {
    // Unknown windows share one label to keep metric cardinality bounded
    let window_label = WindowId::try_from(data.tipo_volatilidad)
        .map(|w| w.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let outcome = {
        let _latency = LatencyGuard::for_window(&state.metrics, &window_label);
        pipeline::predict(&state.registry, data.tipo_volatilidad, &data.lags)
    };

    match outcome {
        Ok(result) => {
            state.metrics.inc_predictions(&window_label, OUTCOME_OK);
            info!(
                "Prediction served for window {} ({} horizons)",
                result.window, result.n_steps_forecast
            );
            Ok(Json(RespuestaPrediccion {
                tipo_volatilidad: i64::from(result.window),
                volatilidad_predicha: result.values,
                horizontes: result.horizons,
                dias_pronostico: result.n_steps_forecast,
            }))
        }
        Err(err) => {
            let outcome = match &err {
                PredictionError::UnknownModel { .. } => OUTCOME_UNKNOWN_MODEL,
                PredictionError::InvalidInputLength { .. }
                | PredictionError::NonFiniteInput { .. } => OUTCOME_INVALID_INPUT,
                PredictionError::Inference(_) => OUTCOME_ERROR,
            };
            state.metrics.inc_predictions(&window_label, outcome);

            if matches!(err, PredictionError::Inference(_)) {
                error!("Prediction failed for window {}: {}", window_label, err);
            } else {
                warn!("Rejected prediction request: {}", err);
            }
            Err(err.into())
        }
    }
}

/// `GET /info_modelo/{dias}` - training parameters and metrics of one model.
///
/// An absent window is a 404 here, unlike the 400 returned by `predecir`.
pub async fn info_modelo(
    State(state): State<AppState>,
    Path(dias): Path<i64>,
) -> Result<Json<InfoModelo>, ApiError> {
    let bundle = state
        .registry
        .get_days(dias)
        .ok_or_else(|| ApiError::not_found("Modelo no encontrado"))?;

    let metadata = bundle.metadata();
    Ok(Json(InfoModelo {
        dias_volatilidad: i64::from(bundle.window()),
        parametros: to_portable_map(&metadata.parametros),
        metricas: to_portable_map(&metadata.metricas),
    }))
}

/// Liveness probe
pub async fn salud(State(state): State<AppState>) -> Json<Salud> {
    Json(Salud {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        modelos_cargados: state.registry.len(),
    })
}

/// Prometheus text exposition
pub async fn metricas(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
