pub mod defaults;
mod feedback_config;
mod index_config;
mod observability_config;
mod retrieval_config;

pub use feedback_config::FeedbackConfig;
pub use index_config::{IndexConfig, Normalization};
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{RefindError, RefindResult};

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefindConfig {
    pub index: IndexConfig,
    pub retrieval: RetrievalConfig,
    pub feedback: FeedbackConfig,
    pub observability: ObservabilityConfig,
}

impl RefindConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> RefindResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| RefindError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no component can work with.
    pub fn validate(&self) -> RefindResult<()> {
        if self.retrieval.result_count == 0 {
            return Err(RefindError::InvalidConfig {
                reason: "retrieval.result_count must be at least 1".to_string(),
            });
        }
        let weights = [
            ("rocchio_query", self.feedback.rocchio_query),
            ("rocchio_positives", self.feedback.rocchio_positives),
            ("rocchio_negatives", self.feedback.rocchio_negatives),
        ];
        if let Some((name, value)) = weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(RefindError::InvalidConfig {
                reason: format!("feedback.{name} must be finite, got {value}"),
            });
        }
        Ok(())
    }
}
