//! Metric editor orchestration
//!
//! Glues the type policy and the mapper together for the host editing
//! surface. The editor owns the working copy of the metric; every committed
//! change flows back to the host as a full replacement value through a
//! single callback, and flips the editor into its previewing state. Two
//! observable states, no terminal state - the editor lives as long as the
//! host keeps it mounted.

use tracing::debug;

use lens_query::{InsightVizNode, MathOperator};

use crate::mapper::{self, FilterSet};
use crate::metric::{ExperimentMetric, MetricType};
use crate::policy::{self, MathAvailability};

/// Observable editor states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// The user is adjusting the type or filter
    #[default]
    Editing,
    /// A committed change has refreshed the preview
    Previewing,
}

/// Payload handed to the host on every committed change
#[derive(Debug, Clone, PartialEq)]
pub struct MetricUpdate {
    /// Full replacement metric value
    pub new_metric: ExperimentMetric,
}

/// Mount contract for the generic filter-editing widget
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEditorOptions {
    /// Current filter container derived from the metric
    pub filters: FilterSet,
    /// Math categories to expose
    pub math_availability: MathAvailability,
    /// Concrete operators to offer, in display order
    pub allowed_math_types: &'static [MathOperator],
    /// Experiment metrics are single-entity
    pub entities_limit: usize,
    /// Restrict property pickers to numeric properties
    pub numeric_properties_only: bool,
}

/// Orchestrates metric edits between the host, the filter widget, and the
/// preview component
pub struct MetricEditor<F: FnMut(MetricUpdate)> {
    metric: ExperimentMetric,
    state: EditorState,
    handle_set_metric: F,
}

impl<F: FnMut(MetricUpdate)> MetricEditor<F> {
    /// Create an editor over the host's current metric value
    pub fn new(metric: ExperimentMetric, handle_set_metric: F) -> Self {
        Self {
            metric,
            state: EditorState::Editing,
            handle_set_metric,
        }
    }

    /// Current metric value
    pub fn metric(&self) -> &ExperimentMetric {
        &self.metric
    }

    /// Current editor state
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Math categories for the current metric type
    pub fn math_availability(&self) -> MathAvailability {
        policy::math_availability(self.metric.metric_type)
    }

    /// Allowed operators for the current metric type, in display order
    pub fn allowed_math_types(&self) -> &'static [MathOperator] {
        policy::allowed_math_types(self.metric.metric_type)
    }

    /// Options for mounting the filter widget against the current metric
    pub fn filter_editor_options(&self) -> FilterEditorOptions {
        FilterEditorOptions {
            filters: mapper::metric_config_to_filter(&self.metric.metric_config),
            math_availability: self.math_availability(),
            allowed_math_types: self.allowed_math_types(),
            entities_limit: 1,
            numeric_properties_only: self.metric.metric_type == MetricType::Continuous,
        }
    }

    /// Switch the metric type
    ///
    /// Resets math to the new type's default and notifies the host once.
    pub fn set_metric_type(&mut self, metric_type: MetricType) {
        self.metric.set_metric_type(metric_type);
        debug!(
            metric_type = %metric_type,
            math = %self.metric.metric_config.math,
            "metric type changed"
        );
        self.commit();
    }

    /// Apply an edit coming back from the filter widget
    ///
    /// Only the first entity is considered. When the widget reports no
    /// entity, the previous configuration is kept and the host is not
    /// notified - an empty filter mid-edit must not wipe the metric.
    pub fn set_filters(&mut self, filters: &FilterSet) {
        let Some(config) =
            mapper::filter_to_metric_config(self.metric.metric_type, filters.first_entity())
        else {
            return;
        };

        self.metric.metric_config = config;
        debug!(math = %self.metric.metric_config.math, "metric filter changed");
        self.commit();
    }

    /// Query document wrapped for the read-only preview component
    pub fn preview_query(&self) -> InsightVizNode {
        mapper::metric_to_insight(&self.metric)
    }

    fn commit(&mut self) {
        self.state = EditorState::Previewing;
        (self.handle_set_metric)(MetricUpdate {
            new_metric: self.metric.clone(),
        });
    }
}
