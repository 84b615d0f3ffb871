//! Known-label bookkeeping for one query across sessions.

use std::sync::Arc;

use refind_core::{Item, RefindResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::Labels;

/// Counts of corrected judgments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Items labeled relevant that are known to be irrelevant.
    pub false_positives: usize,
    /// Items labeled irrelevant that are known to be relevant.
    pub false_negatives: usize,
}

impl Revision {
    pub fn total(&self) -> usize {
        self.false_positives + self.false_negatives
    }
}

/// Known-relevant and known-irrelevant item ids for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAssistant {
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
}

impl LabelAssistant {
    pub fn new(positives: Vec<String>, negatives: Vec<String>) -> Self {
        Self {
            positives,
            negatives,
        }
    }

    pub fn from_json(json: &str) -> RefindResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> RefindResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Move every judgment that contradicts a known label to the side it is
    /// known to belong to.
    pub fn revise(&self, labels: &mut Labels) -> Revision {
        let (wrong_pos, kept_pos): (Vec<Arc<Item>>, Vec<Arc<Item>>) = labels
            .positives
            .drain(..)
            .partition(|item| self.negatives.iter().any(|id| id == item.id()));
        let (wrong_neg, kept_neg): (Vec<Arc<Item>>, Vec<Arc<Item>>) = labels
            .negatives
            .drain(..)
            .partition(|item| self.positives.iter().any(|id| id == item.id()));

        let revision = Revision {
            false_positives: wrong_pos.len(),
            false_negatives: wrong_neg.len(),
        };
        labels.positives = kept_pos.into_iter().chain(wrong_neg).collect();
        labels.negatives = kept_neg.into_iter().chain(wrong_pos).collect();

        if revision.total() > 0 {
            info!(
                false_positives = revision.false_positives,
                false_negatives = revision.false_negatives,
                "corrected contradictory labels"
            );
        }
        revision
    }

    /// Remember every item in the query's feedback sets. Ids already known
    /// on the same side are skipped.
    pub fn absorb(&mut self, query: &Item) {
        absorb_ids(&mut self.positives, query.positives());
        absorb_ids(&mut self.negatives, query.negatives());
    }
}

fn absorb_ids(known: &mut Vec<String>, items: &[Arc<Item>]) {
    for item in items {
        if !known.iter().any(|id| id == item.id()) {
            known.push(item.id().to_string());
        }
    }
}
