use prometheus::Histogram;
use std::time::Instant;

/// RAII guard recording the elapsed time into a histogram when dropped
pub struct LatencyGuard {
    start: Instant,
    histogram: Histogram,
}

impl LatencyGuard {
    pub fn new(histogram: Histogram) -> Self {
        Self {
            start: Instant::now(),
            histogram,
        }
    }

    /// Starts timing the pipeline for `window`.
    pub fn for_window(metrics: &super::Metrics, window: &str) -> Self {
        Self::new(
            metrics
                .prediction_latency_seconds
                .with_label_values(&[window]),
        )
    }
}

impl Drop for LatencyGuard {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}
