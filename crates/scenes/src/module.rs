//! Scene modules and deferred construction

use std::fmt;
use std::sync::OnceLock;

/// A UI module backing one or more routes
///
/// The host application provides the real implementations; this crate only
/// needs enough surface to identify a module once it is built.
pub trait SceneModule: Send + Sync {
    /// Human-readable module name
    fn name(&self) -> &str;
}

/// Deferred scene constructor
///
/// Runs at most once, on the first resolution that needs the scene.
pub type SceneLoader = fn() -> Box<dyn SceneModule>;

/// A scene slot: loader plus the lazily built module
pub(crate) struct LazyScene {
    loader: SceneLoader,
    cell: OnceLock<Box<dyn SceneModule>>,
}

impl LazyScene {
    pub(crate) fn new(loader: SceneLoader) -> Self {
        Self {
            loader,
            cell: OnceLock::new(),
        }
    }

    /// Get the module, building it on first access
    pub(crate) fn get(&self) -> &dyn SceneModule {
        self.cell.get_or_init(|| (self.loader)()).as_ref()
    }

    /// Whether the module has been built yet
    pub(crate) fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for LazyScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyScene")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
