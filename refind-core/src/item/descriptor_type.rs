use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of feature kinds an item can carry.
///
/// `Merged` is synthetic: it is derived from the other descriptors of an
/// item and can never be added directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorType {
    /// Color and edge directivity descriptor.
    Cedd,
    ColorHisto,
    /// MPEG-7 edge histogram descriptor.
    MpegEhd,
    Merged,
    Normalized,
    Other,
}

impl DescriptorType {
    /// All variants in declaration order.
    pub const ALL: [DescriptorType; 6] = [
        Self::Cedd,
        Self::ColorHisto,
        Self::MpegEhd,
        Self::Merged,
        Self::Normalized,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cedd => "cedd",
            Self::ColorHisto => "color_histo",
            Self::MpegEhd => "mpeg_ehd",
            Self::Merged => "merged",
            Self::Normalized => "normalized",
            Self::Other => "other",
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged)
    }
}

impl fmt::Display for DescriptorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
