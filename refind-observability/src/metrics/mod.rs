//! Central metrics registry.
//!
//! [`MetricsCollector`] owns the session-level collectors and is what
//! [`crate::ObservabilityEngine`] records into.

pub mod precision_metrics;
pub mod session_metrics;

pub use precision_metrics::{IterationSummary, PrecisionTracker};
pub use session_metrics::SessionMetrics;

/// Registry of every collector.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsCollector {
    pub precision: PrecisionTracker,
    pub sessions: SessionMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all metrics (useful for testing or between experiment runs).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
