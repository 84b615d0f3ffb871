use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of results presented per query and per feedback round.
    pub result_count: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            result_count: defaults::DEFAULT_RESULT_COUNT,
        }
    }
}
