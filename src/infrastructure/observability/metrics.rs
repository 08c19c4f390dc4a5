//! Prometheus metrics definitions for the volatility service
//!
//! All metrics use the `volcast_` prefix.

use prometheus::{
    CounterVec, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;
use std::time::Instant;

/// Outcome label values for `volcast_predictions_total`
pub const OUTCOME_OK: &str = "ok";
pub const OUTCOME_UNKNOWN_MODEL: &str = "unknown_model";
pub const OUTCOME_INVALID_INPUT: &str = "invalid_input";
pub const OUTCOME_ERROR: &str = "error";

/// Prometheus metrics for the prediction service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    started_at: Instant,
    /// Predictions served, by window and outcome
    pub predictions_total: CounterVec,
    /// Pipeline latency in seconds, by window
    pub prediction_latency_seconds: HistogramVec,
    /// Number of model bundles loaded at startup
    pub models_loaded: GenericGauge<AtomicF64>,
    /// Uptime in seconds
    pub uptime_seconds: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new(
                "volcast_predictions_total",
                "Total prediction requests by window and outcome",
            ),
            &["window", "outcome"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let prediction_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "volcast_prediction_latency_seconds",
                "Prediction pipeline latency in seconds",
            )
            .buckets(vec![
                0.0001, 0.00025, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1,
            ]),
            &["window"],
        )?;
        registry.register(Box::new(prediction_latency_seconds.clone()))?;

        let models_loaded = Gauge::with_opts(Opts::new(
            "volcast_models_loaded",
            "Number of model bundles loaded at startup",
        ))?;
        registry.register(Box::new(models_loaded.clone()))?;

        let uptime_seconds = Gauge::with_opts(Opts::new(
            "volcast_uptime_seconds",
            "Server uptime in seconds",
        ))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            started_at: Instant::now(),
            predictions_total,
            prediction_latency_seconds,
            models_loaded,
            uptime_seconds,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        self.uptime_seconds
            .set(self.started_at.elapsed().as_secs_f64());

        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Increment the prediction counter
    pub fn inc_predictions(&self, window: &str, outcome: &str) {
        self.predictions_total
            .with_label_values(&[window, outcome])
            .inc();
    }

    pub fn set_models_loaded(&self, count: usize) {
        self.models_loaded.set(count as f64);
    }
}
