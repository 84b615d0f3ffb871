use std::sync::Arc;

use refind_core::{Item, RefindResult};

/// One round of relevance judgments.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    pub positives: Vec<Arc<Item>>,
    pub negatives: Vec<Arc<Item>>,
}

impl Labels {
    pub fn len(&self) -> usize {
        self.positives.len() + self.negatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Source of relevance judgments for presented results: a user, a replayed
/// log, or an oracle over an annotated database.
pub trait ILabeler: Send {
    fn label(&mut self, query: &Item, results: &[Arc<Item>]) -> RefindResult<Labels>;
}

/// Labels a result relevant iff its class label equals the query's.
/// Results without a class label are irrelevant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassLabelOracle;

impl ILabeler for ClassLabelOracle {
    fn label(&mut self, query: &Item, results: &[Arc<Item>]) -> RefindResult<Labels> {
        let (positives, negatives) = results.iter().cloned().partition(|item| {
            matches!((item.label(), query.label()), (Some(a), Some(b)) if a == b)
        });
        Ok(Labels {
            positives,
            negatives,
        })
    }
}

/// Name of the directory directly containing `path`, accepting both `/` and
/// `\` separators. Annotated image collections keep one class per folder.
pub fn label_from_path(path: &str) -> Option<&str> {
    let mut parts = path.rsplit(['/', '\\']);
    parts.next()?;
    parts.next().filter(|dir| !dir.is_empty())
}
