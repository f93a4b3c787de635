//! Scene configuration records

use serde::{Deserialize, Serialize};

/// Presentation and classification settings for a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Display name shown in navigation and page titles
    pub name: String,
    /// Whether the scene lives under a project (vs. organization-wide)
    #[serde(default)]
    pub project_based: bool,
    /// Docs path suggested by the help surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_docs_path: Option<String>,
    /// Activity-log scope attributed to actions taken in the scene
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_scope: Option<String>,
    /// Page chrome the scene renders inside
    #[serde(default)]
    pub layout: SceneLayout,
}

impl SceneConfig {
    /// Create a project-based scene config with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_based: true,
            default_docs_path: None,
            activity_scope: None,
            layout: SceneLayout::default(),
        }
    }

    /// Mark the scene organization-wide instead of project-based
    pub fn organization_wide(mut self) -> Self {
        self.project_based = false;
        self
    }

    /// Set the suggested docs path
    pub fn with_docs_path(mut self, path: impl Into<String>) -> Self {
        self.default_docs_path = Some(path.into());
        self
    }

    /// Set the activity-log scope
    pub fn with_activity_scope(mut self, scope: impl Into<String>) -> Self {
        self.activity_scope = Some(scope.into());
        self
    }

    /// Set the page chrome
    pub fn with_layout(mut self, layout: SceneLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// Page chrome a scene renders inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneLayout {
    /// Bare page
    #[default]
    Plain,
    /// Standard app container with navigation
    AppContainer,
}
