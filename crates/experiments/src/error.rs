//! Experiment metric error types

use thiserror::Error;

/// Result type for experiment metric operations
pub type Result<T> = std::result::Result<T, ExperimentError>;

/// Errors raised at the experiment model's parse boundaries
///
/// The model itself is total - conversions degrade to empty values instead
/// of failing - so errors only exist where strings enter the system.
#[derive(Debug, Error)]
pub enum ExperimentError {
    /// Metric type name not recognized
    #[error("invalid metric type: {0}")]
    InvalidMetricType(String),

    /// Entity kind name not recognized
    #[error("invalid entity kind: {0}")]
    InvalidEntityKind(String),
}
