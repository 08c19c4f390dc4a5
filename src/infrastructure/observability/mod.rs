//! Observability for the prediction service
//!
//! Prometheus metrics are kept in a private registry and rendered in text
//! format by the `/metrics` route. Latency is recorded with an RAII guard.

pub mod latency_tracker;
pub mod metrics;

pub use latency_tracker::LatencyGuard;
pub use metrics::Metrics;
