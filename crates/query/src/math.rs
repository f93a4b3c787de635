//! Math aggregation operators
//!
//! The aggregation applied to a query series: occurrence counts, distinct
//! user counts, or numeric aggregations over a named property.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// Aggregation operator for a query series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathOperator {
    /// Total number of occurrences
    Total,
    /// Number of distinct users
    UniqueUsers,
    /// Sum of a numeric property
    Sum,
    /// Average of a numeric property
    Avg,
    /// Minimum of a numeric property
    Min,
    /// Maximum of a numeric property
    Max,
}

impl MathOperator {
    /// Parse an operator from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "total" | "count" => Ok(Self::Total),
            "unique_users" | "unique" | "dau" => Ok(Self::UniqueUsers),
            "sum" => Ok(Self::Sum),
            "avg" | "average" | "mean" => Ok(Self::Avg),
            "min" | "minimum" => Ok(Self::Min),
            "max" | "maximum" => Ok(Self::Max),
            _ => Err(QueryError::InvalidMath(s.to_string())),
        }
    }

    /// Whether this operator aggregates a named numeric property
    ///
    /// Count-style operators aggregate occurrences and carry no property;
    /// the rest are meaningless without one.
    pub fn requires_property(self) -> bool {
        matches!(self, Self::Sum | Self::Avg | Self::Min | Self::Max)
    }

    /// Canonical wire name of this operator
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::UniqueUsers => "unique_users",
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
