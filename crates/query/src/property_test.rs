//! Tests for property filter conditions

use crate::property::{PropertyFilter, PropertyOperator, PropertyScope, PropertyValue};

#[test]
fn test_exact_constructor() {
    let filter = PropertyFilter::exact("plan", "premium");

    assert_eq!(filter.key, "plan");
    assert_eq!(filter.operator, PropertyOperator::Exact);
    assert_eq!(filter.value, PropertyValue::Single("premium".into()));
    assert_eq!(filter.scope, PropertyScope::Event);
}

#[test]
fn test_set_constructors() {
    assert_eq!(
        PropertyFilter::is_set("revenue").operator,
        PropertyOperator::IsSet
    );
    assert_eq!(
        PropertyFilter::is_not_set("revenue").operator,
        PropertyOperator::IsNotSet
    );
    assert_eq!(PropertyFilter::is_set("revenue").value, PropertyValue::None);
}

#[test]
fn test_one_of_uses_multiple_value() {
    let filter = PropertyFilter::one_of("browser", vec!["chrome".into(), "firefox".into()]);
    assert_eq!(
        filter.value,
        PropertyValue::Multiple(vec!["chrome".into(), "firefox".into()])
    );
}

#[test]
fn test_on_person_rescopes() {
    let filter = PropertyFilter::exact("email", "a@b.c").on_person();
    assert_eq!(filter.scope, PropertyScope::Person);
}

#[test]
fn test_operator_parse() {
    assert_eq!(
        PropertyOperator::parse("exact").unwrap(),
        PropertyOperator::Exact
    );
    assert_eq!(PropertyOperator::parse("!=").unwrap(), PropertyOperator::IsNot);
    assert_eq!(
        PropertyOperator::parse("is_not_set").unwrap(),
        PropertyOperator::IsNotSet
    );
    assert_eq!(PropertyOperator::parse("~").unwrap(), PropertyOperator::Regex);
    assert!(PropertyOperator::parse("between").is_err());
}

#[test]
fn test_serde_shape() {
    let filter = PropertyFilter::exact("plan", "premium");
    let value = serde_json::to_value(&filter).unwrap();

    assert_eq!(value["key"], "plan");
    assert_eq!(value["operator"], "exact");
    assert_eq!(value["value"], "premium");
    assert_eq!(value["scope"], "event");
}

#[test]
fn test_untagged_value_round_trip() {
    for filter in [
        PropertyFilter::is_set("k"),
        PropertyFilter::exact("k", "v"),
        PropertyFilter::one_of("k", vec!["a".into(), "b".into()]),
    ] {
        let text = serde_json::to_string(&filter).unwrap();
        let back: PropertyFilter = serde_json::from_str(&text).unwrap();
        assert_eq!(back, filter);
    }
}
