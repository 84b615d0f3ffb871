use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::Arc;

use super::{Descriptor, DescriptorType};
use crate::constants::MERGED_MAX_VALUE;
use crate::errors::{RefindError, RefindResult};

/// The indexed unit (e.g. an image).
///
/// Identity is the `id`: two items are equal iff their ids are equal.
/// The merged descriptor, when present, always equals the concatenation of
/// the component descriptors in `order`.
///
/// A query is a deep copy of a database item (see [`Item::query_copy`]).
/// Feedback recorded on it never reaches the shared database item.
#[derive(Debug, Clone)]
pub struct Item {
    id: String,
    descriptors: HashMap<DescriptorType, Descriptor>,
    /// Component types in insertion order.
    order: Vec<DescriptorType>,
    label: Option<String>,
    positives: Vec<Arc<Item>>,
    negatives: Vec<Arc<Item>>,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            descriptors: HashMap::new(),
            order: Vec::new(),
            label: None,
            positives: Vec::new(),
            negatives: Vec::new(),
        }
    }

    /// Build an item and add each descriptor in turn.
    pub fn with_descriptors(
        id: impl Into<String>,
        descriptors: impl IntoIterator<Item = Descriptor>,
    ) -> RefindResult<Self> {
        let mut item = Self::new(id);
        for descriptor in descriptors {
            item.add_descriptor(descriptor)?;
        }
        Ok(item)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Optional class label of annotated databases.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Component descriptor types in the order they were added.
    pub fn order(&self) -> &[DescriptorType] {
        &self.order
    }

    /// Add a component descriptor and re-derive the merged descriptor by
    /// concatenation.
    pub fn add_descriptor(&mut self, descriptor: Descriptor) -> RefindResult<()> {
        let ty = descriptor.descriptor_type();
        if ty.is_merged() || self.descriptors.contains_key(&ty) {
            return Err(RefindError::DuplicateDescriptor {
                item_id: self.id.clone(),
                descriptor_type: ty,
            });
        }

        let merged = match self.descriptors.get(&DescriptorType::Merged) {
            Some(existing) => {
                let mut values = Vec::with_capacity(existing.len() + descriptor.len());
                values.extend_from_slice(existing.values());
                values.extend_from_slice(descriptor.values());
                Descriptor::new(DescriptorType::Merged, values, MERGED_MAX_VALUE)
            }
            None => Descriptor::new(
                DescriptorType::Merged,
                descriptor.values().to_vec(),
                descriptor.max_value(),
            ),
        };

        self.descriptors.insert(DescriptorType::Merged, merged);
        self.descriptors.insert(ty, descriptor);
        self.order.push(ty);
        Ok(())
    }

    pub fn descriptor(&self, ty: DescriptorType) -> Option<&Descriptor> {
        self.descriptors.get(&ty)
    }

    pub fn has_descriptor(&self, ty: DescriptorType) -> bool {
        self.descriptors.contains_key(&ty)
    }

    /// Like [`Item::descriptor`], but a missing type is an error.
    pub fn require(&self, ty: DescriptorType) -> RefindResult<&Descriptor> {
        self.descriptors
            .get(&ty)
            .ok_or_else(|| RefindError::DescriptorUnavailable {
                item_id: self.id.clone(),
                descriptor_type: ty,
            })
    }

    /// The feature vector of the given type.
    pub fn values(&self, ty: DescriptorType) -> RefindResult<&[f64]> {
        self.require(ty).map(Descriptor::values)
    }

    /// Segments of the merged vector occupied by each component, in order.
    ///
    /// Fails with `CorruptedItem` if the component lengths do not add up to
    /// the merged length.
    pub fn segments(&self) -> RefindResult<Vec<(DescriptorType, Range<usize>)>> {
        let merged_len = self.require(DescriptorType::Merged)?.len();
        let mut start = 0;
        let mut segments = Vec::with_capacity(self.order.len());
        for ty in &self.order {
            let len = self
                .descriptors
                .get(ty)
                .map(Descriptor::len)
                .ok_or_else(|| RefindError::CorruptedItem {
                    item_id: self.id.clone(),
                    details: format!("component {ty} listed in order but missing"),
                })?;
            segments.push((*ty, start..start + len));
            start += len;
        }
        if start != merged_len {
            return Err(RefindError::CorruptedItem {
                item_id: self.id.clone(),
                details: format!(
                    "merged length {merged_len} differs from component total {start}"
                ),
            });
        }
        Ok(segments)
    }

    /// Replace the values of one descriptor wholesale.
    ///
    /// Rewriting a component re-derives the merged vector. Rewriting the
    /// merged vector splits it back into its components. Either way the
    /// merged invariant still holds afterwards. Nothing is modified on error.
    pub fn replace_values(&mut self, ty: DescriptorType, values: Vec<f64>) -> RefindResult<()> {
        let current_len = self.require(ty)?.len();
        if values.len() != current_len {
            return Err(RefindError::DimensionMismatch {
                expected: current_len,
                actual: values.len(),
            });
        }

        if ty.is_merged() {
            let segments = self.segments()?;
            for (component, range) in segments {
                if let Some(d) = self.descriptors.get_mut(&component) {
                    d.set_values(values[range].to_vec())?;
                }
            }
            if let Some(merged) = self.descriptors.get_mut(&DescriptorType::Merged) {
                merged.set_values(values)?;
            }
            return Ok(());
        }

        // Validate the merged layout before touching anything.
        self.segments()?;
        if let Some(d) = self.descriptors.get_mut(&ty) {
            d.set_values(values)?;
        }
        let concatenated: Vec<f64> = self
            .order
            .iter()
            .filter_map(|t| self.descriptors.get(t))
            .flat_map(|d| d.values().iter().copied())
            .collect();
        if let Some(merged) = self.descriptors.get_mut(&DescriptorType::Merged) {
            merged.set_values(concatenated)?;
        }
        Ok(())
    }

    /// Items confirmed relevant during the current feedback session.
    pub fn positives(&self) -> &[Arc<Item>] {
        &self.positives
    }

    /// Items confirmed irrelevant during the current feedback session.
    pub fn negatives(&self) -> &[Arc<Item>] {
        &self.negatives
    }

    /// Total number of labeled items recorded on this item.
    pub fn labeled_count(&self) -> usize {
        self.positives.len() + self.negatives.len()
    }

    /// Merge newly labeled items into the feedback sets, skipping any item
    /// already recorded on the same side. Returns how many were new.
    pub fn record_feedback(&mut self, positives: &[Arc<Item>], negatives: &[Arc<Item>]) -> usize {
        merge_unique(&mut self.positives, positives) + merge_unique(&mut self.negatives, negatives)
    }

    /// Whether the item is already recorded in either feedback set.
    pub fn is_labeled(&self, other: &Item) -> bool {
        self.positives.iter().any(|p| p.id == other.id)
            || self.negatives.iter().any(|n| n.id == other.id)
    }

    /// Deep copy for use as a query, with empty feedback sets.
    pub fn query_copy(&self) -> Item {
        Item {
            positives: Vec::new(),
            negatives: Vec::new(),
            ..self.clone()
        }
    }
}

fn merge_unique(target: &mut Vec<Arc<Item>>, incoming: &[Arc<Item>]) -> usize {
    let mut added = 0;
    for item in incoming {
        if !target.iter().any(|existing| existing.id == item.id) {
            target.push(Arc::clone(item));
            added += 1;
        }
    }
    added
}

impl AsRef<Item> for Item {
    fn as_ref(&self) -> &Item {
        self
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
