/// Relevance-feedback errors.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("invalid weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("invalid iteration budget: {reason}")]
    InvalidBudget { reason: String },
}
