//! Volatility forecast server
//!
//! Loads one trained model per volatility window and serves forecasts over HTTP.
//!
//! # Usage
//! ```sh
//! MODEL_DIR=modelos_finales PORT=8000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `HOST` / `PORT` - Listen address (default: 0.0.0.0:8000)
//! - `MODEL_DIR` - Directory holding `mejor_modelo_vol{d}d.{onnx,json}` (default: modelos_finales)
//! - `MODEL_WINDOWS` - Comma separated windows to load (default: 7,14,21,28)
//! - `OBSERVABILITY_ENABLED` - Expose `/metrics` (default: true)

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;
use volcast::application::ml::ModelRegistry;
use volcast::config::Config;
use volcast::infrastructure::observability::Metrics;
use volcast::interfaces::http::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Volcast Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: ModelDir={:?}, Windows={:?}",
        config.model_dir, config.model_windows
    );

    let registry = ModelRegistry::load(&config.model_windows, &config.model_dir)
        .context("Failed to load model artifacts")?;
    info!(
        "{} of {} models loaded",
        registry.len(),
        config.model_windows.len()
    );

    let metrics = Metrics::new()?;
    let state = AppState::new(Arc::new(registry), metrics);
    let app = http::router(state, config.observability_enabled);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(http::shutdown_on(tokio::signal::ctrl_c()))
        .await?;

    info!("Server stopped.");
    Ok(())
}

