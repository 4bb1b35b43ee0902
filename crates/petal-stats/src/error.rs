//! Error types for petal-stats

use thiserror::Error;

/// Errors raised while summarizing data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A group had no finite values to summarize
    #[error("Group '{key}' has no finite values")]
    EmptyGroup { key: String },
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
