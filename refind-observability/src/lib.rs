//! # refind-observability
//!
//! Structured tracing initialization, named log events for feedback sessions,
//! and precision metrics aggregated across many sessions.

pub mod engine;
pub mod metrics;
pub mod tracing_setup;

pub use engine::ObservabilityEngine;
pub use metrics::{IterationSummary, MetricsCollector, PrecisionTracker, SessionMetrics};
