//! Experiment product scene set
//!
//! The scenes, routes, redirects, and URL builders the experiment product
//! contributes to the host application's scene table.

use lens_scenes::{Result, SceneConfig, SceneLayout, SceneModule, SceneTable};

/// Scene key for the experiment list
pub const SCENE_EXPERIMENTS: &str = "Experiments";
/// Scene key for a single experiment
pub const SCENE_EXPERIMENT: &str = "Experiment";
/// Scene key for the metric editor within an experiment
pub const SCENE_EXPERIMENT_METRIC: &str = "ExperimentMetric";

struct ExperimentsScene;

impl SceneModule for ExperimentsScene {
    fn name(&self) -> &str {
        "Experiments"
    }
}

struct ExperimentScene;

impl SceneModule for ExperimentScene {
    fn name(&self) -> &str {
        "Experiment"
    }
}

struct ExperimentMetricScene;

impl SceneModule for ExperimentMetricScene {
    fn name(&self) -> &str {
        "Experiment metric"
    }
}

/// Build the experiment product's scene table
///
/// Compiled once at startup by the host router. The new-experiment route is
/// registered before the `:id` route so the literal wins.
pub fn scene_table() -> Result<SceneTable> {
    let mut builder = SceneTable::builder();

    builder.register_scene(
        SCENE_EXPERIMENTS,
        SceneConfig::new("Experiments")
            .with_docs_path("/docs/experiments")
            .with_activity_scope("Experiment"),
        || Box::new(ExperimentsScene),
    )?;
    builder.register_scene(
        SCENE_EXPERIMENT,
        SceneConfig::new("Experiments")
            .with_docs_path("/docs/experiments")
            .with_activity_scope("Experiment")
            .with_layout(SceneLayout::AppContainer),
        || Box::new(ExperimentScene),
    )?;
    builder.register_scene(
        SCENE_EXPERIMENT_METRIC,
        SceneConfig::new("Experiment metric")
            .with_docs_path("/docs/experiments/metrics")
            .with_activity_scope("Experiment")
            .with_layout(SceneLayout::AppContainer),
        || Box::new(ExperimentMetricScene),
    )?;

    builder
        .add_route("/experiments", SCENE_EXPERIMENTS, "experiments")
        .add_route("/experiments/new", SCENE_EXPERIMENT, "experimentNew")
        .add_route("/experiments/:id", SCENE_EXPERIMENT, "experiment")
        .add_route(
            "/experiments/:id/metrics/:metric",
            SCENE_EXPERIMENT_METRIC,
            "experimentMetric",
        )
        .add_redirect("/ab-testing", "/experiments")
        .add_redirect("/ab-testing/:id", "/experiments/:id");

    builder.build()
}

/// URL builders for experiment scenes
pub mod urls {
    /// Experiment list
    pub fn experiments() -> String {
        "/experiments".to_string()
    }

    /// New-experiment form
    pub fn experiment_new() -> String {
        "/experiments/new".to_string()
    }

    /// Experiment detail
    pub fn experiment(id: &str) -> String {
        format!("/experiments/{id}")
    }

    /// Metric editor for one metric slot of an experiment
    pub fn experiment_metric(id: &str, metric: usize) -> String {
        format!("/experiments/{id}/metrics/{metric}")
    }
}
