//! Experiment metric data model
//!
//! A metric is a type (count or continuous) plus a configuration: the single
//! event or action it is computed over, the math aggregation, and optional
//! property filters. The configuration holds at most one entity; multi-entity
//! metrics are not a thing.

use std::fmt;

use serde::{Deserialize, Serialize};

use lens_query::{MathOperator, PropertyFilter};

use crate::error::{ExperimentError, Result};
use crate::policy;

/// Classification of an experiment metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// How many times an event happens (click counts, page views)
    #[default]
    Count,
    /// A numerical value of the event (revenue, session length)
    Continuous,
}

impl MetricType {
    /// Parse a metric type from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "continuous" => Ok(Self::Continuous),
            _ => Err(ExperimentError::InvalidMetricType(s.to_string())),
        }
    }

    /// Canonical wire name of this type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Continuous => "continuous",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind discriminator for metric entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Raw event
    Event,
    /// Defined action
    Action,
}

impl EntityKind {
    /// Parse an entity kind from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "event" | "events" => Ok(Self::Event),
            "action" | "actions" => Ok(Self::Action),
            _ => Err(ExperimentError::InvalidEntityKind(s.to_string())),
        }
    }
}

/// The event or action a metric is computed over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityRef {
    /// Raw event by id
    Event {
        /// Event id
        id: String,
        /// Display name override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Defined action by id
    Action {
        /// Action id
        id: String,
        /// Display name override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl EntityRef {
    /// Event entity without a display name
    pub fn event(id: impl Into<String>) -> Self {
        Self::Event {
            id: id.into(),
            name: None,
        }
    }

    /// Action entity without a display name
    pub fn action(id: impl Into<String>) -> Self {
        Self::Action {
            id: id.into(),
            name: None,
        }
    }

    /// Entity id
    pub fn id(&self) -> &str {
        match self {
            Self::Event { id, .. } | Self::Action { id, .. } => id,
        }
    }

    /// Display name, if set
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Event { name, .. } | Self::Action { name, .. } => name.as_deref(),
        }
    }

    /// Kind discriminator
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Event { .. } => EntityKind::Event,
            Self::Action { .. } => EntityKind::Action,
        }
    }
}

/// How a metric is computed: entity, aggregation, and property filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Data source; `None` until the user picks an event or action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,
    /// Aggregation operator; kept within the metric type's allowed set
    pub math: MathOperator,
    /// Numeric property for property-aggregating operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math_property: Option<String>,
    /// Property filters narrowing the entity, carried opaquely
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyFilter>,
}

impl MetricConfig {
    /// Config for a fresh metric of the given type: no entity yet, the
    /// type's default math
    pub fn for_type(metric_type: MetricType) -> Self {
        Self {
            entity: None,
            math: policy::default_math(metric_type),
            math_property: None,
            properties: Vec::new(),
        }
    }
}

/// An experiment metric owned by the experiment-editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentMetric {
    /// Determines legal math operations and how the metric is queried
    pub metric_type: MetricType,
    /// Entity, math, and filters defining the computation
    pub metric_config: MetricConfig,
}

impl ExperimentMetric {
    /// Fresh metric of the given type with a default config
    pub fn new(metric_type: MetricType) -> Self {
        Self {
            metric_type,
            metric_config: MetricConfig::for_type(metric_type),
        }
    }

    /// Switch the metric type
    ///
    /// Math resets to the first operator allowed for the new type so a
    /// now-illegal operator can never linger; every other config field is
    /// preserved.
    pub fn set_metric_type(&mut self, metric_type: MetricType) {
        self.metric_type = metric_type;
        self.metric_config.math = policy::default_math(metric_type);
    }

    /// Builder-style variant of [`Self::set_metric_type`]
    pub fn with_metric_type(mut self, metric_type: MetricType) -> Self {
        self.set_metric_type(metric_type);
        self
    }
}

impl Default for ExperimentMetric {
    fn default() -> Self {
        Self::new(MetricType::default())
    }
}
