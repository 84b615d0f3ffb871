use serde::{Deserialize, Serialize};

use super::DescriptorType;
use crate::errors::{RefindError, RefindResult};

/// A typed numeric feature vector.
///
/// The type tag and the vector length are fixed at creation. Only the
/// contents may be replaced, and only wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    descriptor_type: DescriptorType,
    values: Vec<f64>,
    max_value: f64,
}

impl Descriptor {
    pub fn new(descriptor_type: DescriptorType, values: Vec<f64>, max_value: f64) -> Self {
        Self {
            descriptor_type,
            values,
            max_value,
        }
    }

    pub fn descriptor_type(&self) -> DescriptorType {
        self.descriptor_type
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Declared maximum component value.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Replace the vector contents. The new vector must keep the length.
    pub fn set_values(&mut self, values: Vec<f64>) -> RefindResult<()> {
        if values.len() != self.values.len() {
            return Err(RefindError::DimensionMismatch {
                expected: self.values.len(),
                actual: values.len(),
            });
        }
        self.values = values;
        Ok(())
    }
}
