use std::sync::Arc;

use refind_core::errors::FeedbackError;
use refind_core::{
    DescriptorType, IMetric, IRelevanceFeedback, IRetriever, Item, RefindConfig, RefindResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ILabeler, LabelAssistant};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The configured number of feedback iterations ran.
    BudgetExhausted,
    /// A round brought no label the query had not seen before.
    NoNewLabels,
}

/// Judgments on one presented result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 0 for the initial search, then one per feedback iteration.
    pub iteration: usize,
    pub presented: usize,
    pub positives: usize,
    pub negatives: usize,
    /// Labels not yet recorded on the query.
    pub new_labels: usize,
    /// `positives / presented`, or 0 for an empty list.
    pub precision: f64,
}

/// Outcome of one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub query_id: String,
    pub strategy: String,
    pub rounds: Vec<RoundReport>,
    pub stop_reason: StopReason,
    /// Ids of the last presented result list, best first.
    pub final_results: Vec<String>,
}

impl SessionReport {
    /// Precision of each round, initial search first.
    pub fn precisions(&self) -> Vec<f64> {
        self.rounds.iter().map(|r| r.precision).collect()
    }

    /// Feedback iterations actually run.
    pub fn iterations(&self) -> usize {
        self.rounds.len().saturating_sub(1)
    }
}

/// Drives present, label, adapt, re-query rounds for one descriptor type.
///
/// The only state carried between rounds is the query's feedback sets.
pub struct FeedbackSession<'a> {
    retriever: &'a dyn IRetriever,
    metric: &'a dyn IMetric,
    ty: DescriptorType,
    result_count: usize,
    max_iterations: usize,
    assistant: Option<LabelAssistant>,
}

impl<'a> FeedbackSession<'a> {
    pub fn new(
        retriever: &'a dyn IRetriever,
        metric: &'a dyn IMetric,
        ty: DescriptorType,
        result_count: usize,
        max_iterations: usize,
    ) -> RefindResult<Self> {
        if result_count == 0 {
            return Err(FeedbackError::InvalidBudget {
                reason: "result count must be at least 1".to_string(),
            }
            .into());
        }
        Ok(Self {
            retriever,
            metric,
            ty,
            result_count,
            max_iterations,
            assistant: None,
        })
    }

    pub fn from_config(
        retriever: &'a dyn IRetriever,
        metric: &'a dyn IMetric,
        ty: DescriptorType,
        config: &RefindConfig,
    ) -> RefindResult<Self> {
        Self::new(
            retriever,
            metric,
            ty,
            config.retrieval.result_count,
            config.feedback.max_iterations,
        )
    }

    /// Correct each round's labels against known judgments before use.
    pub fn with_assistant(mut self, assistant: LabelAssistant) -> Self {
        self.assistant = Some(assistant);
        self
    }

    /// Run one session from an initial search until the iteration budget is
    /// spent or a round brings no new labels.
    pub fn run(
        &self,
        query: &mut Item,
        strategy: &mut dyn IRelevanceFeedback,
        labeler: &mut dyn ILabeler,
    ) -> RefindResult<SessionReport> {
        let mut results = self.retriever.search(query, self.ty, self.result_count)?;
        let mut rounds = Vec::new();
        let mut iteration = 0;

        let stop_reason = loop {
            let mut labels = labeler.label(query, &results)?;
            if let Some(assistant) = &self.assistant {
                assistant.revise(&mut labels);
            }

            let new_labels = labels
                .positives
                .iter()
                .chain(&labels.negatives)
                .filter(|item| !query.is_labeled(item))
                .count();
            let precision = if results.is_empty() {
                0.0
            } else {
                labels.positives.len() as f64 / results.len() as f64
            };
            rounds.push(RoundReport {
                iteration,
                presented: results.len(),
                positives: labels.positives.len(),
                negatives: labels.negatives.len(),
                new_labels,
                precision,
            });
            debug!(iteration, precision, new_labels, "feedback round judged");

            if iteration >= self.max_iterations {
                break StopReason::BudgetExhausted;
            }
            if new_labels == 0 {
                break StopReason::NoNewLabels;
            }

            results = strategy.iterate(
                self.retriever,
                query,
                self.ty,
                self.metric,
                &labels.positives,
                &labels.negatives,
                self.result_count,
            )?;
            iteration += 1;
            info!(
                strategy = strategy.name(),
                iteration,
                positives = query.positives().len(),
                negatives = query.negatives().len(),
                "feedback iteration completed"
            );
        };

        info!(
            query = query.id(),
            strategy = strategy.name(),
            iterations = iteration,
            ?stop_reason,
            "feedback session finished"
        );
        Ok(SessionReport {
            query_id: query.id().to_string(),
            strategy: strategy.name().to_string(),
            rounds,
            stop_reason,
            final_results: results.iter().map(|i| i.id().to_string()).collect(),
        })
    }
}
