//! Structured log events for feedback sessions.
//!
//! Each function emits a `tracing` event with structured fields.

use refind_feedback::{RoundReport, StopReason};

/// Log one judged round of a session.
pub fn feedback_round_completed(query_id: &str, strategy: &str, round: &RoundReport) {
    tracing::info!(
        event = "feedback_round_completed",
        query_id = %query_id,
        strategy = %strategy,
        iteration = round.iteration,
        presented = round.presented,
        positives = round.positives,
        new_labels = round.new_labels,
        precision = round.precision,
        "feedback round completed"
    );
}

/// Log the end of a session.
pub fn session_finished(query_id: &str, strategy: &str, iterations: usize, stop_reason: StopReason) {
    tracing::info!(
        event = "session_finished",
        query_id = %query_id,
        strategy = %strategy,
        iterations = iterations,
        stop_reason = ?stop_reason,
        "feedback session finished"
    );
}

/// Log the aggregated precision of one iteration across sessions.
pub fn precision_summary(iteration: usize, sessions: usize, mean: f64, std_dev: f64) {
    tracing::info!(
        event = "precision_summary",
        iteration = iteration,
        sessions = sessions,
        mean = mean,
        std_dev = std_dev,
        "precision summary"
    );
}

/// Log a session whose precision fell below its initial search.
pub fn precision_regressed(query_id: &str, strategy: &str, initial: f64, last: f64) {
    tracing::warn!(
        event = "precision_regressed",
        query_id = %query_id,
        strategy = %strategy,
        initial = initial,
        last = last,
        "feedback lowered precision"
    );
}
