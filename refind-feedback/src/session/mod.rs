//! The feedback loop: present results, collect labels, adapt, re-query.

mod assistant;
mod controller;
mod labeler;

pub use assistant::{LabelAssistant, Revision};
pub use controller::{FeedbackSession, RoundReport, SessionReport, StopReason};
pub use labeler::{label_from_path, ClassLabelOracle, ILabeler, Labels};
