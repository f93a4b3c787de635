//! Query source documents and series nodes
//!
//! An insight query is a tree of tagged nodes: a source document (today,
//! trends) holding one series node per plotted line, wrapped in a viz node
//! when handed to the preview component. The `kind` tag keeps documents
//! self-describing on the wire.

use serde::{Deserialize, Serialize};

use crate::daterange::{DateRange, Interval};
use crate::math::MathOperator;
use crate::property::PropertyFilter;

/// A single query series over events or actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SeriesNode {
    /// Series over raw events
    EventsNode(EventsNode),
    /// Series over a defined action
    ActionsNode(ActionsNode),
}

impl SeriesNode {
    /// Math operator of this series, if any
    pub fn math(&self) -> Option<MathOperator> {
        match self {
            Self::EventsNode(n) => n.math,
            Self::ActionsNode(n) => n.math,
        }
    }

    /// Math property of this series, if any
    pub fn math_property(&self) -> Option<&str> {
        match self {
            Self::EventsNode(n) => n.math_property.as_deref(),
            Self::ActionsNode(n) => n.math_property.as_deref(),
        }
    }

    /// Display name of this series, if set
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::EventsNode(n) => n.name.as_deref(),
            Self::ActionsNode(n) => n.name.as_deref(),
        }
    }
}

impl From<EventsNode> for SeriesNode {
    fn from(node: EventsNode) -> Self {
        Self::EventsNode(node)
    }
}

impl From<ActionsNode> for SeriesNode {
    fn from(node: ActionsNode) -> Self {
        Self::ActionsNode(node)
    }
}

/// Series over raw events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsNode {
    /// Event id; `None` means all events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Display name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Aggregation applied to this series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math: Option<MathOperator>,
    /// Numeric property aggregated by property math operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math_property: Option<String>,
    /// Property conditions narrowing the series
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyFilter>,
}

impl EventsNode {
    /// Series over a single event
    pub fn for_event(event: impl Into<String>) -> Self {
        Self {
            event: Some(event.into()),
            ..Self::default()
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
}

/// Series over a defined action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionsNode {
    /// Action id
    pub id: String,
    /// Display name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Aggregation applied to this series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math: Option<MathOperator>,
    /// Numeric property aggregated by property math operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math_property: Option<String>,
    /// Property conditions narrowing the series
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyFilter>,
}

impl ActionsNode {
    /// Series over a single action
    pub fn for_action(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            math: None,
            math_property: None,
            properties: Vec::new(),
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
}

/// An insight query source document
///
/// Other insight kinds (funnels, retention) slot in here as further
/// variants; the metric layer only emits trends today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum QuerySource {
    /// Trend-style time series query
    TrendsQuery(TrendsQuery),
}

impl QuerySource {
    /// Series of the underlying query
    pub fn series(&self) -> &[SeriesNode] {
        match self {
            Self::TrendsQuery(q) => &q.series,
        }
    }

    /// Whether the query has no series to compute
    pub fn is_empty(&self) -> bool {
        self.series().is_empty()
    }
}

/// Trend-style time series query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendsQuery {
    /// One entry per plotted series
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesNode>,
    /// Date bounds for the whole query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    /// Time bucket for aggregation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    /// Query-wide property conditions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyFilter>,
    /// Trend display options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends_filter: Option<TrendsFilter>,
}

/// Display options for trend queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendsFilter {
    /// Chart rendering mode
    #[serde(default)]
    pub display: ChartDisplayType,
}

/// Chart rendering mode for trend results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartDisplayType {
    /// Line graph over time
    #[default]
    ActionsLineGraph,
    /// Bar chart over time
    ActionsBar,
    /// Tabular values
    ActionsTable,
    /// Single aggregate number
    BoldNumber,
}

/// Wrapper handed to the read-only visualization component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightVizNode {
    /// The query to compute and render
    pub source: QuerySource,
    /// Show the result table under the chart
    #[serde(default)]
    pub show_table: bool,
    /// Show the last-computed timestamp
    #[serde(default)]
    pub show_last_computation: bool,
    /// Show the refresh control next to the timestamp
    #[serde(default)]
    pub show_last_computation_refresh: bool,
}

impl InsightVizNode {
    /// Read-only preview configuration: no table, computation timestamp
    /// visible, refresh control hidden
    pub fn preview(source: QuerySource) -> Self {
        Self {
            source,
            show_table: false,
            show_last_computation: true,
            show_last_computation_refresh: false,
        }
    }
}
