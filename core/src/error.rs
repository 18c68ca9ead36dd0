use thiserror::Error;

/// Validation failures raised while building the store or querying it.
/// All of these reject the whole call; there are no partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("malformed date key '{0}': expected a valid YYYY-MM-DD date")]
    MalformedDate(String),

    #[error("month index {0} is out of range (expected 0..=11)")]
    InvalidMonth(u32),

    #[error("metric '{0}' is not tracked by any record")]
    InvalidMetric(String),
}
