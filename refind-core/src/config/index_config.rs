use serde::{Deserialize, Serialize};

use crate::item::DescriptorType;

/// Per-feature scaling applied to a whole database before indexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    #[default]
    None,
    /// `(x - mean) / (3 * stddev)`, roughly into [-1, 1].
    Gaussian,
    /// Gaussian, then shifted into [0, 1].
    GaussianUnit,
    /// `(x - mean) / variance`.
    Variance,
}

/// Spatial index configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Descriptor types to build a k-d tree for. Other types fall back to a
    /// linear scan.
    pub indexed_types: Vec<DescriptorType>,
    /// Normalization applied to `normalized_types` before any index is built.
    pub normalization: Normalization,
    pub normalized_types: Vec<DescriptorType>,
}
