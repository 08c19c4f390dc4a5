//! HTTP surface of the prediction service.

pub mod error;
pub mod handlers;
pub mod numeric;
pub mod schemas;

use crate::application::ml::ModelRegistry;
use crate::infrastructure::observability::Metrics;
use axum::Router;
use axum::routing::{get, post};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ModelRegistry>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(registry: Arc<ModelRegistry>, metrics: Metrics) -> Self {
        metrics.set_models_loaded(registry.len());
        Self { registry, metrics }
    }
}

/// Builds the router. `/metrics` is only mounted when `expose_metrics` is set.
pub fn router(state: AppState, expose_metrics: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::raiz))
        .route("/predecir", post(handlers::predecir))
        .route("/info_modelo/{dias}", get(handlers::info_modelo))
        .route("/health", get(handlers::salud));

    if expose_metrics {
        app = app.route("/metrics", get(handlers::metricas));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Resolves once `signal` fires. If the signal cannot be listened for, never
/// resolves, so the server keeps running instead of stopping at startup.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received. Exiting...");
}
