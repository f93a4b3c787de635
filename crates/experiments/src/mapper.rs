//! Filter ↔ metric mapping and preview query rendering
//!
//! Pure translations between three shapes of the same information: the
//! filter widget's `{events, actions}` container, the metric configuration,
//! and the trend query document behind the live preview. Everything here is
//! total - missing data degrades to empty containers and empty-series
//! queries, never to an error - so the preview can keep rendering mid-edit.

use serde::{Deserialize, Serialize};

use lens_query::{
    ActionsNode, DateRange, EventsNode, InsightVizNode, Interval, MathOperator, PropertyFilter,
    QuerySource, SeriesNode, TrendsFilter, TrendsQuery,
};

use crate::metric::{EntityKind, EntityRef, ExperimentMetric, MetricConfig, MetricType};
use crate::policy;

/// Date window for preview queries
///
/// Fixed so the rendered document is identical across renders of the same
/// metric; the host memoizes on structural equality.
pub const PREVIEW_LOOKBACK_DAYS: u32 = 7;

/// One entity as the filter widget emits it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityFilter {
    /// Whether this row is an event or an action
    pub kind: EntityKind,
    /// Entity id
    pub id: String,
    /// Display name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Selected aggregation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math: Option<MathOperator>,
    /// Numeric property for property-aggregating operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math_property: Option<String>,
    /// Property filters on the entity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyFilter>,
    /// Position in the widget's series list
    #[serde(default)]
    pub order: u32,
}

impl EntityFilter {
    /// Event row without math
    pub fn event(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Event,
            id: id.into(),
            name: None,
            math: None,
            math_property: None,
            properties: Vec::new(),
            order: 0,
        }
    }

    /// Action row without math
    pub fn action(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Action,
            ..Self::event(id)
        }
    }

    /// Set the aggregation operator
    pub fn with_math(mut self, math: MathOperator) -> Self {
        self.math = Some(math);
        self
    }

    /// Set the aggregated numeric property
    pub fn with_math_property(mut self, property: impl Into<String>) -> Self {
        self.math_property = Some(property.into());
        self
    }

    /// Add a property filter
    pub fn with_property(mut self, filter: PropertyFilter) -> Self {
        self.properties.push(filter);
        self
    }
}

/// The `{events, actions}` container the filter widget accepts and emits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Event rows
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EntityFilter>,
    /// Action rows
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<EntityFilter>,
}

impl FilterSet {
    /// Whether the container holds no entities
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.actions.is_empty()
    }

    /// First entity in the container, events before actions
    ///
    /// Experiment metrics are single-entity; anything past the first row is
    /// ignored, mirroring the widget's entities limit.
    pub fn first_entity(&self) -> Option<&EntityFilter> {
        self.events.first().or_else(|| self.actions.first())
    }
}

/// Wrap a metric config's entity into the widget's container shape
///
/// Empty container when no entity is configured yet.
pub fn metric_config_to_filter(config: &MetricConfig) -> FilterSet {
    let Some(entity) = &config.entity else {
        return FilterSet::default();
    };

    let row = EntityFilter {
        kind: entity.kind(),
        id: entity.id().to_string(),
        name: entity.name().map(str::to_string),
        math: Some(config.math),
        math_property: config.math_property.clone(),
        properties: config.properties.clone(),
        order: 0,
    };

    match entity.kind() {
        EntityKind::Event => FilterSet {
            events: vec![row],
            actions: Vec::new(),
        },
        EntityKind::Action => FilterSet {
            events: Vec::new(),
            actions: vec![row],
        },
    }
}

/// Build a metric config from the widget's first entity
///
/// Math falls back to the metric type's default when the widget row carries
/// none. Returns `None` when no entity is present; callers keep the
/// previous config in that case instead of clearing it.
pub fn filter_to_metric_config(
    metric_type: MetricType,
    entity: Option<&EntityFilter>,
) -> Option<MetricConfig> {
    let entity = entity?;

    let entity_ref = match entity.kind {
        EntityKind::Event => EntityRef::Event {
            id: entity.id.clone(),
            name: entity.name.clone(),
        },
        EntityKind::Action => EntityRef::Action {
            id: entity.id.clone(),
            name: entity.name.clone(),
        },
    };

    Some(MetricConfig {
        entity: Some(entity_ref),
        math: entity
            .math
            .unwrap_or_else(|| policy::default_math(metric_type)),
        math_property: entity.math_property.clone(),
        properties: entity.properties.clone(),
    })
}

/// Render a metric into the trend query document behind its preview
///
/// Deterministic and total: a metric with no entity yields a query with no
/// series, which the preview renders as an empty chart rather than an error.
pub fn metric_to_query(metric: &ExperimentMetric) -> QuerySource {
    let series = metric
        .metric_config
        .entity
        .as_ref()
        .map(|entity| metric_series(metric, entity))
        .into_iter()
        .collect();

    QuerySource::TrendsQuery(TrendsQuery {
        series,
        date_range: Some(DateRange::last_days(PREVIEW_LOOKBACK_DAYS)),
        interval: Some(Interval::Day),
        properties: Vec::new(),
        trends_filter: Some(TrendsFilter::default()),
    })
}

/// Wrap a metric's query for the read-only preview component
pub fn metric_to_insight(metric: &ExperimentMetric) -> InsightVizNode {
    InsightVizNode::preview(metric_to_query(metric))
}

fn metric_series(metric: &ExperimentMetric, entity: &EntityRef) -> SeriesNode {
    let config = &metric.metric_config;

    // A stale operator can slip in when the config is mutated outside the
    // editor; clamp to the type's allowed set instead of failing.
    let math = clamp_math(metric.metric_type, config.math);
    let math_property = if math.requires_property() {
        config.math_property.clone()
    } else {
        None
    };

    match entity {
        EntityRef::Event { id, name } => EventsNode {
            event: Some(id.clone()),
            name: name.clone(),
            math: Some(math),
            math_property,
            properties: config.properties.clone(),
        }
        .into(),
        EntityRef::Action { id, name } => ActionsNode {
            id: id.clone(),
            name: name.clone(),
            math: Some(math),
            math_property,
            properties: config.properties.clone(),
        }
        .into(),
    }
}

fn clamp_math(metric_type: MetricType, math: MathOperator) -> MathOperator {
    let allowed = policy::allowed_math_types(metric_type);
    if allowed.contains(&math) {
        math
    } else {
        allowed[0]
    }
}
