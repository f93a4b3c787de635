//! Query document error types

use thiserror::Error;

/// Result type for query document operations
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors raised while parsing or resolving query documents
#[derive(Debug, Error)]
pub enum QueryError {
    /// Invalid math operator name
    #[error("invalid math operator: {0}")]
    InvalidMath(String),

    /// Invalid property operator name
    #[error("invalid property operator: {0}")]
    InvalidOperator(String),

    /// Invalid interval name
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// Invalid date range bound or ordering
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),
}
