use serde::{Deserialize, Serialize};

use super::defaults;

/// Relevance-feedback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Feedback rounds per session before it stops.
    pub max_iterations: usize,
    /// Rocchio weight on the current query vector.
    pub rocchio_query: f64,
    /// Rocchio weight on the mean of relevant items.
    pub rocchio_positives: f64,
    /// Rocchio weight on the mean of irrelevant items.
    pub rocchio_negatives: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            rocchio_query: defaults::DEFAULT_ROCCHIO_QUERY,
            rocchio_positives: defaults::DEFAULT_ROCCHIO_POSITIVES,
            rocchio_negatives: defaults::DEFAULT_ROCCHIO_NEGATIVES,
        }
    }
}
