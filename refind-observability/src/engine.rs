//! [`ObservabilityEngine`]: turns session reports into events and metrics.

use refind_core::RefindResult;
use refind_feedback::SessionReport;

use crate::metrics::{IterationSummary, MetricsCollector};
use crate::tracing_setup::events;

/// Records feedback sessions and reports aggregated precision.
#[derive(Debug, Default)]
pub struct ObservabilityEngine {
    pub metrics: MetricsCollector,
}

impl ObservabilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one event per round plus a completion event, and fold the
    /// session into the metrics.
    pub fn record_session(&mut self, report: &SessionReport) {
        for round in &report.rounds {
            events::feedback_round_completed(&report.query_id, &report.strategy, round);
        }
        events::session_finished(
            &report.query_id,
            &report.strategy,
            report.iterations(),
            report.stop_reason,
        );

        let precisions = report.precisions();
        if let (Some(&initial), Some(&last)) = (precisions.first(), precisions.last()) {
            if last < initial {
                events::precision_regressed(&report.query_id, &report.strategy, initial, last);
                self.metrics.sessions.record_regression();
            }
        }
        self.metrics.precision.record(&precisions);
        self.metrics.sessions.session_finished(
            &report.strategy,
            report.iterations(),
            report.stop_reason,
        );
    }

    /// Per-iteration precision summary, logged as one event per iteration.
    pub fn precision_report(&self) -> Vec<IterationSummary> {
        let summary = self.metrics.precision.summary();
        for s in &summary {
            events::precision_summary(s.iteration, s.sessions, s.mean, s.std_dev);
        }
        summary
    }

    /// Reset all metrics.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Serialize current metrics and the precision summary to JSON.
    pub fn metrics_snapshot(&self) -> RefindResult<serde_json::Value> {
        let metrics = serde_json::to_value(&self.metrics)?;
        let summary = serde_json::to_value(self.metrics.precision.summary())?;

        Ok(serde_json::json!({
            "metrics": metrics,
            "precision_summary": summary,
            "avg_iterations": self.metrics.sessions.avg_iterations(),
        }))
    }
}
