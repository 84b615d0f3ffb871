// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_RESULT_COUNT: usize = 20;

// --- Feedback ---
pub const DEFAULT_MAX_ITERATIONS: usize = 4;
pub const DEFAULT_ROCCHIO_QUERY: f64 = 1.0;
pub const DEFAULT_ROCCHIO_POSITIVES: f64 = 0.75;
pub const DEFAULT_ROCCHIO_NEGATIVES: f64 = 0.15;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
