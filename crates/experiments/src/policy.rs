//! Metric type policy
//!
//! Which math categories and concrete operators each metric type admits.
//! Pure lookups with no failure modes; the first allowed operator doubles as
//! the default selected after a type switch.

use serde::{Deserialize, Serialize};

use lens_query::MathOperator;

use crate::metric::MetricType;

/// Math categories the filter widget may expose
///
/// `Default` is [`MathAvailability::NONE`] - no categories - so anything
/// that falls outside the known policy degrades to an editor with no math
/// selector rather than an invalid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MathAvailability {
    /// Occurrence counting (total count)
    pub event_counts: bool,
    /// Distinct actor counting (unique users)
    pub unique_counts: bool,
    /// Numeric aggregations over a named property (sum, avg, min, max)
    pub property_aggregations: bool,
}

impl MathAvailability {
    /// No categories exposed
    pub const NONE: Self = Self {
        event_counts: false,
        unique_counts: false,
        property_aggregations: false,
    };

    /// Whether an operator falls in an exposed category
    pub fn allows(self, math: MathOperator) -> bool {
        match math {
            MathOperator::Total => self.event_counts,
            MathOperator::UniqueUsers => self.unique_counts,
            MathOperator::Sum | MathOperator::Avg | MathOperator::Min | MathOperator::Max => {
                self.property_aggregations
            }
        }
    }

    /// Whether no category is exposed
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

const COUNT_MATH: &[MathOperator] = &[MathOperator::Total, MathOperator::UniqueUsers];

const CONTINUOUS_MATH: &[MathOperator] = &[
    MathOperator::Sum,
    MathOperator::Avg,
    MathOperator::Min,
    MathOperator::Max,
];

/// Math categories selectable for a metric type
pub fn math_availability(metric_type: MetricType) -> MathAvailability {
    match metric_type {
        MetricType::Count => MathAvailability {
            event_counts: true,
            unique_counts: true,
            property_aggregations: false,
        },
        MetricType::Continuous => MathAvailability {
            event_counts: false,
            unique_counts: false,
            property_aggregations: true,
        },
    }
}

/// Allowed math operators for a metric type
///
/// Ordering is significant: it drives UI display order, and the first
/// element is the default selected after a switch to this type.
pub fn allowed_math_types(metric_type: MetricType) -> &'static [MathOperator] {
    match metric_type {
        MetricType::Count => COUNT_MATH,
        MetricType::Continuous => CONTINUOUS_MATH,
    }
}

/// Default math operator for a metric type
pub fn default_math(metric_type: MetricType) -> MathOperator {
    allowed_math_types(metric_type)[0]
}
