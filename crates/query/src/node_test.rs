//! Tests for query document shapes

use serde_json::json;

use crate::daterange::{DateRange, Interval};
use crate::math::MathOperator;
use crate::node::{
    ActionsNode, EventsNode, InsightVizNode, QuerySource, SeriesNode, TrendsQuery,
};

fn pageview_trends() -> QuerySource {
    QuerySource::TrendsQuery(TrendsQuery {
        series: vec![
            EventsNode::for_event("pageview")
                .with_math(MathOperator::Total)
                .into(),
        ],
        date_range: Some(DateRange::last_days(7)),
        interval: Some(Interval::Day),
        ..TrendsQuery::default()
    })
}

#[test]
fn test_trends_query_kind_tag() {
    let value = serde_json::to_value(pageview_trends()).unwrap();

    assert_eq!(value["kind"], "TrendsQuery");
    assert_eq!(value["series"][0]["kind"], "EventsNode");
    assert_eq!(value["series"][0]["event"], "pageview");
    assert_eq!(value["series"][0]["math"], "total");
}

#[test]
fn test_actions_node_kind_tag() {
    let node: SeriesNode = ActionsNode::for_action("signup")
        .with_math(MathOperator::UniqueUsers)
        .into();
    let value = serde_json::to_value(&node).unwrap();

    assert_eq!(value["kind"], "ActionsNode");
    assert_eq!(value["id"], "signup");
    assert_eq!(value["math"], "unique_users");
}

#[test]
fn test_empty_fields_omitted() {
    let value = serde_json::to_value(SeriesNode::from(EventsNode::for_event("click"))).unwrap();
    let obj = value.as_object().unwrap();

    assert!(!obj.contains_key("math"));
    assert!(!obj.contains_key("math_property"));
    assert!(!obj.contains_key("properties"));
    assert!(!obj.contains_key("name"));
}

#[test]
fn test_document_round_trip() {
    let query = pageview_trends();
    let text = serde_json::to_string(&query).unwrap();
    let back: QuerySource = serde_json::from_str(&text).unwrap();

    assert_eq!(back, query);
}

#[test]
fn test_deserialize_sparse_document() {
    let back: QuerySource = serde_json::from_value(json!({
        "kind": "TrendsQuery",
        "series": [{"kind": "EventsNode", "event": "purchase"}],
    }))
    .unwrap();

    assert_eq!(back.series().len(), 1);
    assert_eq!(back.series()[0].math(), None);
}

#[test]
fn test_empty_query_is_empty() {
    let query = QuerySource::TrendsQuery(TrendsQuery::default());
    assert!(query.is_empty());
    assert!(!pageview_trends().is_empty());
}

#[test]
fn test_series_accessors() {
    let node: SeriesNode = EventsNode::for_event("purchase")
        .with_math(MathOperator::Sum)
        .with_math_property("revenue")
        .into();

    assert_eq!(node.math(), Some(MathOperator::Sum));
    assert_eq!(node.math_property(), Some("revenue"));
    assert_eq!(node.name(), None);
}

#[test]
fn test_preview_wrapper_defaults() {
    let viz = InsightVizNode::preview(pageview_trends());

    assert!(!viz.show_table);
    assert!(viz.show_last_computation);
    assert!(!viz.show_last_computation_refresh);
}

#[test]
fn test_structural_equality_implies_serialized_equality() {
    let a = serde_json::to_string(&pageview_trends()).unwrap();
    let b = serde_json::to_string(&pageview_trends()).unwrap();
    assert_eq!(a, b);
}
