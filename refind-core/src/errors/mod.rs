mod feedback_error;
mod index_error;

pub use feedback_error::FeedbackError;
pub use index_error::IndexError;

use crate::item::DescriptorType;

/// Convenience alias used throughout the workspace.
pub type RefindResult<T> = Result<T, RefindError>;

/// Top-level error for every refind subsystem.
#[derive(Debug, thiserror::Error)]
pub enum RefindError {
    #[error("descriptor type unavailable: {descriptor_type} on item {item_id}")]
    DescriptorUnavailable {
        item_id: String,
        descriptor_type: DescriptorType,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("duplicate descriptor: {descriptor_type} already present on item {item_id}")]
    DuplicateDescriptor {
        item_id: String,
        descriptor_type: DescriptorType,
    },

    #[error("corrupted item {item_id}: {details}")]
    CorruptedItem { item_id: String, details: String },

    #[error("lock poisoned: {resource}")]
    LockPoisoned { resource: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("index error: {0}")]
    IndexError(#[from] IndexError),

    #[error("feedback error: {0}")]
    FeedbackError(#[from] FeedbackError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
