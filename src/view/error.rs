//! Query-time errors.

use thiserror::Error;

/// Result type for view queries.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors a view query can return.
///
/// None of these can be produced by the dashboard's own controls; they
/// surface hand-written or stale requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Detail lookup for a resort name that is not in the table.
    #[error("no resort named '{0}'")]
    ResortNotFound(String),

    /// Metric name outside the chartable set.
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    /// Flag name outside the map checklist.
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

impl QueryError {
    /// Whether the error describes bad input rather than missing data.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::UnknownMetric(_) | Self::UnknownFlag(_))
    }
}
