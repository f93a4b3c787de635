//! Compiled scene table
//!
//! Compiled once at startup by [`SceneTableBuilder`]; every lookup after
//! that is read-only. Scene modules stay unbuilt until a resolution asks for
//! them, then live for the lifetime of the table.

use std::collections::HashMap;

use tracing::trace;

use crate::config::SceneConfig;
use crate::error::{Result, SceneError};
use crate::module::{LazyScene, SceneLoader, SceneModule};
use crate::pattern::{PathParams, RoutePattern};
use crate::scene_id::SceneId;

/// A resolved route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneMatch<'a> {
    /// Scene owning the route
    pub scene: SceneId,
    /// Logical key of the specific route (drives per-route behavior inside
    /// the scene, e.g. which tab to open)
    pub route_key: &'a str,
    /// Captured path parameters, in pattern order
    pub params: PathParams,
}

impl SceneMatch<'_> {
    /// Look up a captured parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug)]
struct SceneEntry {
    key: String,
    config: SceneConfig,
    module: LazyScene,
}

#[derive(Debug)]
struct Route {
    pattern: RoutePattern,
    scene: SceneId,
    route_key: String,
}

#[derive(Debug)]
struct Redirect {
    pattern: RoutePattern,
    target: String,
}

/// Compiled scene and route table
///
/// Routes are checked in registration order; the first match wins, so more
/// specific literal routes should be registered before parameterized ones
/// that would shadow them.
#[derive(Debug)]
pub struct SceneTable {
    scenes: Vec<SceneEntry>,
    ids: HashMap<String, SceneId>,
    routes: Vec<Route>,
    redirects: Vec<Redirect>,
}

impl SceneTable {
    /// Start building a table
    pub fn builder() -> SceneTableBuilder {
        SceneTableBuilder::default()
    }

    /// Resolve a path to its scene and route key
    pub fn resolve(&self, path: &str) -> Option<SceneMatch<'_>> {
        for route in &self.routes {
            if let Some(params) = route.pattern.match_path(path) {
                trace!(path, route_key = %route.route_key, "resolved scene route");
                return Some(SceneMatch {
                    scene: route.scene,
                    route_key: &route.route_key,
                    params,
                });
            }
        }
        None
    }

    /// Resolve a path to a redirect target, substituting captured parameters
    pub fn redirect(&self, path: &str) -> Option<String> {
        for redirect in &self.redirects {
            if let Some(params) = redirect.pattern.match_path(path) {
                trace!(path, target = %redirect.target, "resolved redirect");
                return Some(substitute(&redirect.target, &params));
            }
        }
        None
    }

    /// Look up a scene id by registration key
    pub fn scene_id(&self, key: &str) -> Option<SceneId> {
        self.ids.get(key).copied()
    }

    /// Get a scene module, building it on first access
    pub fn scene(&self, id: SceneId) -> Option<&dyn SceneModule> {
        self.scenes.get(id.index()).map(|entry| entry.module.get())
    }

    /// Get a scene's configuration
    pub fn config(&self, id: SceneId) -> Option<&SceneConfig> {
        self.scenes.get(id.index()).map(|entry| &entry.config)
    }

    /// Get a scene's registration key
    pub fn scene_key(&self, id: SceneId) -> Option<&str> {
        self.scenes.get(id.index()).map(|entry| entry.key.as_str())
    }

    /// Whether a scene module has been built yet
    pub fn is_loaded(&self, id: SceneId) -> bool {
        self.scenes
            .get(id.index())
            .is_some_and(|entry| entry.module.is_loaded())
    }

    /// Number of registered scenes
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Number of compiled routes
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of compiled redirects
    pub fn redirect_count(&self) -> usize {
        self.redirects.len()
    }
}

/// Substitute `:param` references in a redirect target
fn substitute(target: &str, params: &PathParams) -> String {
    let mut out = String::with_capacity(target.len());
    for (i, part) in target.split('/').enumerate() {
        if i > 0 {
            out.push('/');
        }
        match part.strip_prefix(':') {
            Some(name) => match params.iter().find(|(k, _)| k == name) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(part),
            },
            None => out.push_str(part),
        }
    }
    out
}

/// Builder for compiling scene tables
///
/// Registration order is preserved into match order. All validation happens
/// in [`SceneTableBuilder::build`], except duplicate scene keys which fail
/// eagerly at registration.
#[derive(Default)]
pub struct SceneTableBuilder {
    scenes: Vec<(String, SceneConfig, SceneLoader)>,
    ids: HashMap<String, SceneId>,
    routes: Vec<(String, String, String)>,
    redirects: Vec<(String, String)>,
}

impl SceneTableBuilder {
    /// Register a scene under a unique key
    pub fn register_scene(
        &mut self,
        key: impl Into<String>,
        config: SceneConfig,
        loader: SceneLoader,
    ) -> Result<SceneId> {
        let key = key.into();
        if self.ids.contains_key(&key) {
            return Err(SceneError::duplicate_scene(key));
        }

        let id = SceneId::new(self.scenes.len() as u16);
        self.ids.insert(key.clone(), id);
        self.scenes.push((key, config, loader));
        Ok(id)
    }

    /// Add a route from a pattern to a registered scene
    ///
    /// `route_key` is the logical name the scene sees for this route.
    /// Validation is deferred to `build`.
    pub fn add_route(
        &mut self,
        pattern: impl Into<String>,
        scene_key: impl Into<String>,
        route_key: impl Into<String>,
    ) -> &mut Self {
        self.routes
            .push((pattern.into(), scene_key.into(), route_key.into()));
        self
    }

    /// Add a redirect from a pattern to a target path
    ///
    /// The target may reference parameters captured by the pattern
    /// (`/legacy/:id` → `/experiments/:id`).
    pub fn add_redirect(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.redirects.push((from.into(), to.into()));
        self
    }

    /// Compile the table
    ///
    /// # Errors
    ///
    /// Fails on invalid patterns, routes to unregistered scenes, duplicate
    /// route patterns, and redirect targets using parameters their pattern
    /// does not capture.
    pub fn build(self) -> Result<SceneTable> {
        let ids = self.ids;

        let scenes: Vec<SceneEntry> = self
            .scenes
            .into_iter()
            .map(|(key, config, loader)| SceneEntry {
                key,
                config,
                module: LazyScene::new(loader),
            })
            .collect();

        let mut routes: Vec<Route> = Vec::with_capacity(self.routes.len());
        for (pattern, scene_key, route_key) in self.routes {
            let compiled = RoutePattern::compile(&pattern)?;
            if routes.iter().any(|r| r.pattern.as_str() == compiled.as_str()) {
                return Err(SceneError::duplicate_route(pattern));
            }
            let scene = *ids
                .get(&scene_key)
                .ok_or_else(|| SceneError::unknown_scene(scene_key))?;
            routes.push(Route {
                pattern: compiled,
                scene,
                route_key,
            });
        }

        let mut redirects: Vec<Redirect> = Vec::with_capacity(self.redirects.len());
        for (from, target) in self.redirects {
            let pattern = RoutePattern::compile(&from)?;
            for part in target.split('/') {
                if let Some(param) = part.strip_prefix(':') {
                    if !pattern.param_names().any(|n| n == param) {
                        return Err(SceneError::UnboundRedirectParam {
                            target: target.clone(),
                            param: param.to_string(),
                        });
                    }
                }
            }
            redirects.push(Redirect { pattern, target });
        }

        Ok(SceneTable {
            scenes,
            ids,
            routes,
            redirects,
        })
    }
}
