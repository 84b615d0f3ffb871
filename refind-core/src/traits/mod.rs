mod metric;
mod relevance_feedback;
mod retriever;
mod score;

pub use metric::IMetric;
pub use relevance_feedback::IRelevanceFeedback;
pub use retriever::IRetriever;
pub use score::IScore;
