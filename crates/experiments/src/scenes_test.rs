//! Tests for the experiment scene set

use lens_scenes::SceneLayout;

use crate::scenes::{self, SCENE_EXPERIMENT, SCENE_EXPERIMENTS, urls};

#[test]
fn test_table_compiles() {
    let table = scenes::scene_table().unwrap();
    assert_eq!(table.scene_count(), 3);
    assert_eq!(table.route_count(), 4);
    assert_eq!(table.redirect_count(), 2);
}

#[test]
fn test_list_route() {
    let table = scenes::scene_table().unwrap();
    let m = table.resolve(&urls::experiments()).unwrap();

    assert_eq!(m.route_key, "experiments");
    assert_eq!(table.scene_key(m.scene), Some(SCENE_EXPERIMENTS));
}

#[test]
fn test_detail_route_captures_id() {
    let table = scenes::scene_table().unwrap();
    let m = table.resolve(&urls::experiment("42")).unwrap();

    assert_eq!(m.route_key, "experiment");
    assert_eq!(m.param("id"), Some("42"));
    assert_eq!(table.scene_key(m.scene), Some(SCENE_EXPERIMENT));
}

#[test]
fn test_new_route_shadows_detail() {
    let table = scenes::scene_table().unwrap();
    let m = table.resolve(&urls::experiment_new()).unwrap();
    assert_eq!(m.route_key, "experimentNew");
}

#[test]
fn test_metric_route() {
    let table = scenes::scene_table().unwrap();
    let m = table.resolve(&urls::experiment_metric("42", 1)).unwrap();

    assert_eq!(m.route_key, "experimentMetric");
    assert_eq!(m.param("id"), Some("42"));
    assert_eq!(m.param("metric"), Some("1"));
}

#[test]
fn test_legacy_redirects() {
    let table = scenes::scene_table().unwrap();

    assert_eq!(table.redirect("/ab-testing").as_deref(), Some("/experiments"));
    assert_eq!(
        table.redirect("/ab-testing/7").as_deref(),
        Some("/experiments/7")
    );
}

#[test]
fn test_scene_configs() {
    let table = scenes::scene_table().unwrap();

    let list = table.scene_id(SCENE_EXPERIMENTS).unwrap();
    let detail = table.scene_id(SCENE_EXPERIMENT).unwrap();

    assert_eq!(table.config(list).unwrap().layout, SceneLayout::Plain);
    assert_eq!(table.config(detail).unwrap().layout, SceneLayout::AppContainer);
    assert_eq!(
        table.config(detail).unwrap().activity_scope.as_deref(),
        Some("Experiment")
    );
}

#[test]
fn test_modules_build_lazily() {
    let table = scenes::scene_table().unwrap();
    let id = table.scene_id(SCENE_EXPERIMENTS).unwrap();

    assert!(!table.is_loaded(id));
    assert_eq!(table.scene(id).unwrap().name(), "Experiments");
    assert!(table.is_loaded(id));
}

#[test]
fn test_url_builders() {
    assert_eq!(urls::experiments(), "/experiments");
    assert_eq!(urls::experiment("7"), "/experiments/7");
    assert_eq!(urls::experiment_new(), "/experiments/new");
    assert_eq!(urls::experiment_metric("7", 0), "/experiments/7/metrics/0");
}
