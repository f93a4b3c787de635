//! Tests for the metric type policy

use lens_query::MathOperator;

use crate::metric::{ExperimentMetric, MetricType};
use crate::policy::{MathAvailability, allowed_math_types, default_math, math_availability};

#[test]
fn test_count_math_operators() {
    assert_eq!(
        allowed_math_types(MetricType::Count),
        &[MathOperator::Total, MathOperator::UniqueUsers]
    );
}

#[test]
fn test_continuous_math_operators() {
    assert_eq!(
        allowed_math_types(MetricType::Continuous),
        &[
            MathOperator::Sum,
            MathOperator::Avg,
            MathOperator::Min,
            MathOperator::Max,
        ]
    );
}

#[test]
fn test_default_is_first_allowed() {
    for metric_type in [MetricType::Count, MetricType::Continuous] {
        assert_eq!(default_math(metric_type), allowed_math_types(metric_type)[0]);
    }
}

#[test]
fn test_default_matches_type_switch() {
    // The operator assigned by a type switch is exactly the policy default.
    for metric_type in [MetricType::Count, MetricType::Continuous] {
        let mut metric = ExperimentMetric::new(MetricType::Count);
        metric.set_metric_type(metric_type);
        assert_eq!(metric.metric_config.math, default_math(metric_type));
    }
}

#[test]
fn test_count_availability() {
    let availability = math_availability(MetricType::Count);
    assert!(availability.event_counts);
    assert!(availability.unique_counts);
    assert!(!availability.property_aggregations);
}

#[test]
fn test_continuous_availability() {
    let availability = math_availability(MetricType::Continuous);
    assert!(!availability.event_counts);
    assert!(!availability.unique_counts);
    assert!(availability.property_aggregations);
}

#[test]
fn test_availability_covers_allowed_operators() {
    // Every operator the policy allows falls in an exposed category, and
    // none of the other type's operators do.
    for metric_type in [MetricType::Count, MetricType::Continuous] {
        let availability = math_availability(metric_type);
        for op in allowed_math_types(metric_type) {
            assert!(availability.allows(*op), "{op} not exposed for {metric_type}");
        }
    }

    assert!(!math_availability(MetricType::Count).allows(MathOperator::Sum));
    assert!(!math_availability(MetricType::Continuous).allows(MathOperator::Total));
}

#[test]
fn test_default_availability_is_none() {
    let availability = MathAvailability::default();
    assert!(availability.is_none());
    assert!(!availability.allows(MathOperator::Total));
    assert!(!availability.allows(MathOperator::Sum));
}
