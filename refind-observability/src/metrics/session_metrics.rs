//! Session counts, iterations run, stop reasons, per-strategy usage.

use std::collections::HashMap;

use refind_feedback::StopReason;
use serde::{Deserialize, Serialize};

/// Session-level metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub sessions: u64,
    /// Feedback iterations summed over all sessions.
    pub total_iterations: u64,
    pub budget_exhausted: u64,
    pub no_new_labels: u64,
    /// Sessions whose last precision fell below the initial one.
    pub regressions: u64,
    pub by_strategy: HashMap<String, u64>,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished session.
    pub fn session_finished(&mut self, strategy: &str, iterations: usize, stop_reason: StopReason) {
        self.sessions += 1;
        self.total_iterations += iterations as u64;
        match stop_reason {
            StopReason::BudgetExhausted => self.budget_exhausted += 1,
            StopReason::NoNewLabels => self.no_new_labels += 1,
        }
        *self.by_strategy.entry(strategy.to_string()).or_default() += 1;
    }

    pub fn record_regression(&mut self) {
        self.regressions += 1;
    }

    /// Average feedback iterations per session.
    pub fn avg_iterations(&self) -> f64 {
        if self.sessions == 0 {
            return 0.0;
        }
        self.total_iterations as f64 / self.sessions as f64
    }
}
