//! Per-iteration precision across sessions.

use serde::{Deserialize, Serialize};

/// Mean and spread of one iteration's precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationSummary {
    /// 0 is the initial search.
    pub iteration: usize,
    /// Sessions that reached this iteration.
    pub sessions: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Accumulates precision samples by iteration index.
///
/// Sessions stop at different iterations, so later iterations may hold fewer
/// samples than earlier ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrecisionTracker {
    samples: Vec<Vec<f64>>,
}

impl PrecisionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one session's precisions, initial search first.
    pub fn record(&mut self, precisions: &[f64]) {
        if self.samples.len() < precisions.len() {
            self.samples.resize_with(precisions.len(), Vec::new);
        }
        for (slot, &p) in self.samples.iter_mut().zip(precisions) {
            slot.push(p);
        }
    }

    /// Number of iterations with at least one sample.
    pub fn depth(&self) -> usize {
        self.samples.len()
    }

    pub fn mean(&self, iteration: usize) -> Option<f64> {
        let samples = self.samples.get(iteration)?;
        if samples.is_empty() {
            return None;
        }
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }

    pub fn std_dev(&self, iteration: usize) -> Option<f64> {
        let mean = self.mean(iteration)?;
        let samples = &self.samples[iteration];
        let variance =
            samples.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        Some(variance.sqrt())
    }

    pub fn summary(&self) -> Vec<IterationSummary> {
        (0..self.samples.len())
            .filter_map(|iteration| {
                Some(IterationSummary {
                    iteration,
                    sessions: self.samples[iteration].len(),
                    mean: self.mean(iteration)?,
                    std_dev: self.std_dev(iteration)?,
                })
            })
            .collect()
    }
}
