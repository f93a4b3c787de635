//! Lens Query - typed query documents for insights
//!
//! The vocabulary shared by everything that builds or consumes an insight
//! query: series nodes over events and actions, math aggregations, property
//! filters, and date ranges.
//!
//! A query document describes *what* to compute; execution and rendering live
//! behind the host's visualization layer. Documents are plain serde values so
//! that structurally equal queries serialize identically - callers rely on
//! that for memoized re-rendering.
//!
//! # Usage
//!
//! ```
//! use lens_query::{DateRange, EventsNode, MathOperator, QuerySource, TrendsQuery};
//!
//! let query = QuerySource::TrendsQuery(TrendsQuery {
//!     series: vec![EventsNode::for_event("pageview")
//!         .with_math(MathOperator::Total)
//!         .into()],
//!     date_range: Some(DateRange::last_days(7)),
//!     ..TrendsQuery::default()
//! });
//! assert_eq!(query.series().len(), 1);
//! ```

pub mod daterange;
pub mod error;
pub mod math;
pub mod node;
pub mod property;

#[cfg(test)]
mod node_test;
#[cfg(test)]
mod property_test;

// Re-exports for convenience
pub use daterange::{DateRange, Interval};
pub use error::{QueryError, Result};
pub use math::MathOperator;
pub use node::{
    ActionsNode, ChartDisplayType, EventsNode, InsightVizNode, QuerySource, SeriesNode,
    TrendsFilter, TrendsQuery,
};
pub use property::{PropertyFilter, PropertyOperator, PropertyScope, PropertyValue};
