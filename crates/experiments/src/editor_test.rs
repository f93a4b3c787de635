//! Tests for the metric editor orchestration

use std::cell::RefCell;
use std::rc::Rc;

use lens_query::MathOperator;

use crate::editor::{EditorState, MetricEditor, MetricUpdate};
use crate::mapper::{EntityFilter, FilterSet};
use crate::metric::{EntityRef, ExperimentMetric, MetricType};

type Updates = Rc<RefCell<Vec<MetricUpdate>>>;

fn editor_with_sink(
    metric: ExperimentMetric,
) -> (MetricEditor<impl FnMut(MetricUpdate)>, Updates) {
    let updates: Updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    let editor = MetricEditor::new(metric, move |update| sink.borrow_mut().push(update));
    (editor, updates)
}

#[test]
fn test_starts_editing() {
    let (editor, updates) = editor_with_sink(ExperimentMetric::default());
    assert_eq!(editor.state(), EditorState::Editing);
    assert!(updates.borrow().is_empty());
}

#[test]
fn test_type_switch_notifies_once_with_reset_math() {
    let (mut editor, updates) = editor_with_sink(ExperimentMetric::new(MetricType::Count));

    editor.set_metric_type(MetricType::Continuous);

    let updates = updates.borrow();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].new_metric.metric_type, MetricType::Continuous);
    assert_eq!(updates[0].new_metric.metric_config.math, MathOperator::Sum);
    assert_eq!(editor.state(), EditorState::Previewing);
}

#[test]
fn test_type_switch_never_leaves_stale_math() {
    let (mut editor, updates) = editor_with_sink(ExperimentMetric::new(MetricType::Count));

    editor.set_metric_type(MetricType::Continuous);
    editor.set_metric_type(MetricType::Count);

    for update in updates.borrow().iter() {
        let metric = &update.new_metric;
        assert!(
            crate::policy::allowed_math_types(metric.metric_type)
                .contains(&metric.metric_config.math)
        );
    }
}

#[test]
fn test_filter_edit_notifies_once_with_merged_metric() {
    // User selects action "signup" with unique_users math in the widget.
    let (mut editor, updates) = editor_with_sink(ExperimentMetric::new(MetricType::Count));

    let filters = FilterSet {
        events: vec![],
        actions: vec![EntityFilter::action("signup").with_math(MathOperator::UniqueUsers)],
    };
    editor.set_filters(&filters);

    let updates = updates.borrow();
    assert_eq!(updates.len(), 1);
    let config = &updates[0].new_metric.metric_config;
    assert_eq!(config.entity, Some(EntityRef::action("signup")));
    assert_eq!(config.math, MathOperator::UniqueUsers);
    assert_eq!(updates[0].new_metric.metric_type, MetricType::Count);
    assert_eq!(editor.state(), EditorState::Previewing);
}

#[test]
fn test_empty_filter_edit_preserves_config_and_stays_quiet() {
    let mut metric = ExperimentMetric::new(MetricType::Count);
    metric.metric_config.entity = Some(EntityRef::event("pageview"));
    let before = metric.clone();

    let (mut editor, updates) = editor_with_sink(metric);
    editor.set_filters(&FilterSet::default());

    assert!(updates.borrow().is_empty());
    assert_eq!(editor.metric(), &before);
    assert_eq!(editor.state(), EditorState::Editing);
}

#[test]
fn test_filter_edit_takes_first_entity_only() {
    let (mut editor, updates) = editor_with_sink(ExperimentMetric::new(MetricType::Count));

    let filters = FilterSet {
        events: vec![EntityFilter::event("pageview"), EntityFilter::event("click")],
        actions: vec![EntityFilter::action("signup")],
    };
    editor.set_filters(&filters);

    let updates = updates.borrow();
    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0].new_metric.metric_config.entity,
        Some(EntityRef::event("pageview"))
    );
}

#[test]
fn test_filter_editor_options_for_count() {
    let (editor, _) = editor_with_sink(ExperimentMetric::new(MetricType::Count));
    let options = editor.filter_editor_options();

    assert_eq!(options.entities_limit, 1);
    assert!(!options.numeric_properties_only);
    assert!(options.math_availability.event_counts);
    assert_eq!(
        options.allowed_math_types,
        &[MathOperator::Total, MathOperator::UniqueUsers]
    );
    assert!(options.filters.is_empty());
}

#[test]
fn test_filter_editor_options_for_continuous() {
    let (editor, _) = editor_with_sink(ExperimentMetric::new(MetricType::Continuous));
    let options = editor.filter_editor_options();

    assert!(options.numeric_properties_only);
    assert!(options.math_availability.property_aggregations);
    assert_eq!(options.allowed_math_types[0], MathOperator::Sum);
}

#[test]
fn test_options_reflect_current_entity() {
    let (mut editor, _) = editor_with_sink(ExperimentMetric::new(MetricType::Count));

    let filters = FilterSet {
        events: vec![EntityFilter::event("pageview")],
        actions: vec![],
    };
    editor.set_filters(&filters);

    let options = editor.filter_editor_options();
    assert_eq!(options.filters.events.len(), 1);
    assert_eq!(options.filters.events[0].id, "pageview");
}

#[test]
fn test_preview_query_tracks_edits() {
    let (mut editor, _) = editor_with_sink(ExperimentMetric::new(MetricType::Count));
    assert!(editor.preview_query().source.is_empty());

    let filters = FilterSet {
        events: vec![EntityFilter::event("pageview")],
        actions: vec![],
    };
    editor.set_filters(&filters);

    let viz = editor.preview_query();
    assert_eq!(viz.source.series().len(), 1);
    assert!(!viz.show_table);
}
