//! # refind-retrieval
//!
//! Two [`IRetriever`](refind_core::IRetriever) implementations over an
//! in-memory database:
//! - [`DistanceRetriever`] ranks by ascending metric distance, through a
//!   k-d tree for indexed descriptor types and a linear scan otherwise.
//! - [`ScoreRetriever`] ranks by descending [`IScore`](refind_core::IScore).

mod distance_retriever;
mod score_retriever;
pub mod selection;

pub use distance_retriever::DistanceRetriever;
pub use score_retriever::ScoreRetriever;
