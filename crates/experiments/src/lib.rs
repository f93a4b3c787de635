//! Lens Experiments - experiment metric modeling
//!
//! An experiment metric measures one thing about an event or action: how
//! often it happens (count) or a numeric property of it (continuous). This
//! crate owns the translation work around that model:
//!
//! - **Policy**: which math aggregations each metric type admits
//! - **Mapper**: metric config ↔ the generic filter widget's container, and
//!   metric → preview query document
//! - **Editor**: orchestration between the host, the filter widget, and the
//!   preview
//! - **Scenes**: the experiment product's scene set and URL builders
//!
//! # Usage
//!
//! ```
//! use lens_experiments::{ExperimentMetric, MetricType, metric_to_query};
//!
//! let mut metric = ExperimentMetric::new(MetricType::Count);
//! assert_eq!(metric.metric_config.math.to_string(), "total");
//!
//! // Switching type resets math to the new type's default.
//! metric.set_metric_type(MetricType::Continuous);
//! assert_eq!(metric.metric_config.math.to_string(), "sum");
//!
//! // A metric with no entity still renders a valid (empty) preview query.
//! assert!(metric_to_query(&metric).is_empty());
//! ```

pub mod editor;
pub mod error;
pub mod mapper;
pub mod metric;
pub mod policy;
pub mod scenes;

#[cfg(test)]
mod editor_test;
#[cfg(test)]
mod policy_test;
#[cfg(test)]
mod scenes_test;

// Re-exports for convenience
pub use editor::{EditorState, FilterEditorOptions, MetricEditor, MetricUpdate};
pub use error::{ExperimentError, Result};
pub use mapper::{
    EntityFilter, FilterSet, PREVIEW_LOOKBACK_DAYS, filter_to_metric_config,
    metric_config_to_filter, metric_to_insight, metric_to_query,
};
pub use metric::{EntityKind, EntityRef, ExperimentMetric, MetricConfig, MetricType};
pub use policy::{MathAvailability, allowed_math_types, default_math, math_availability};
