//! # refind-core
//!
//! Foundation crate for the refind retrieval system.
//! Defines the item/descriptor model, the metric, score, retriever and
//! relevance-feedback contracts, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RefindConfig;
pub use errors::{RefindError, RefindResult};
pub use item::{Descriptor, DescriptorType, Item};
pub use traits::{IMetric, IRelevanceFeedback, IRetriever, IScore};
