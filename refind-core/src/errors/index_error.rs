use crate::item::DescriptorType;

/// Spatial index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("invalid splitting dimensionality: k = {k}")]
    InvalidDimensionality { k: usize },

    #[error("splitting axis {axis} out of range for descriptor of length {len}")]
    AxisOutOfRange { axis: usize, len: usize },

    #[error("index is keyed on {indexed}, search requested {requested}")]
    TypeMismatch {
        indexed: DescriptorType,
        requested: DescriptorType,
    },
}
