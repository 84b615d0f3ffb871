/// refind system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Offset added to cosine similarity before inverting it into a distance.
pub const COSINE_EPSILON: f64 = 0.000_001;

/// Declared maximum component value of a merged descriptor built from
/// more than one component.
pub const MERGED_MAX_VALUE: f64 = 1.0;
