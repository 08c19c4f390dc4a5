//! Offline forecasting CLI.
//!
//! Runs the same pipeline as the server against an artifact directory,
//! without starting HTTP.
//!
//! ```sh
//! cargo run --bin predict -- --window 7 --lags 0.52,0.55,0.51,0.53,0.54,0.52,0.56
//! cargo run --bin predict -- --window 28 --info
//! ```

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::prelude::*;
use volcast::application::ml::{ModelRegistry, pipeline};
use volcast::domain::ml::WindowId;
use volcast::interfaces::http::numeric::to_portable_map;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the model artifacts
    #[arg(long, env = "MODEL_DIR", default_value = "modelos_finales")]
    model_dir: PathBuf,

    /// Volatility window in days (7, 14, 21 or 28)
    #[arg(long)]
    window: i64,

    /// Comma separated lag values, oldest first
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        required_unless_present = "info"
    )]
    lags: Vec<f64>,

    /// Print the model's training parameters and metrics instead of predicting
    #[arg(long)]
    info: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let window = WindowId::try_from(args.window)
        .map_err(|d| anyhow!("Invalid window {}. Must be one of 7, 14, 21, 28", d))?;
    let registry = ModelRegistry::load(&[window], &args.model_dir)
        .with_context(|| format!("Failed to load model from {:?}", args.model_dir))?;

    let output = if args.info {
        let bundle = registry
            .get(window)
            .ok_or_else(|| anyhow!("Modelo no encontrado"))?;
        json!({
            "dias_volatilidad": window.days(),
            "modelo": bundle.regressor().name(),
            "parametros": to_portable_map(&bundle.metadata().parametros),
            "metricas": to_portable_map(&bundle.metadata().metricas),
        })
    } else {
        let result = pipeline::predict(&registry, args.window, &args.lags)?;
        json!({
            "tipo_volatilidad": result.window.days(),
            "volatilidad_predicha": result.values,
            "horizontes": result.horizons,
            "dias_pronostico": result.n_steps_forecast,
        })
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
