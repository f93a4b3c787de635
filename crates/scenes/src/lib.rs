//! Lens Scenes - compiled scene and route table
//!
//! Products declare their scenes, routes, and redirects once; the host router
//! compiles them into a `SceneTable` at startup and resolves paths against it.
//!
//! # Design
//!
//! Everything dynamic about the original registry pattern (lookup by string
//! key, import-on-demand) becomes static here:
//!
//! - Routes are an explicit table of (pattern, scene, route key) rows,
//!   validated at compile time by [`SceneTableBuilder::build`].
//! - Scene modules are built through typed loader functions, deferred until
//!   the first route resolution that needs them, then cached.
//! - Redirects are patterns too, with `:param` substitution into the target.
//!
//! # Example
//!
//! ```
//! use lens_scenes::{SceneConfig, SceneModule, SceneTable};
//!
//! struct Dashboard;
//! impl SceneModule for Dashboard {
//!     fn name(&self) -> &str {
//!         "Dashboard"
//!     }
//! }
//!
//! let mut builder = SceneTable::builder();
//! let id = builder
//!     .register_scene("Dashboard", SceneConfig::new("Dashboard"), || Box::new(Dashboard))
//!     .unwrap();
//! builder.add_route("/dashboard/:id", "Dashboard", "dashboard");
//! let table = builder.build().unwrap();
//!
//! let m = table.resolve("/dashboard/42").unwrap();
//! assert_eq!(m.scene, id);
//! assert_eq!(m.params, vec![("id".to_string(), "42".to_string())]);
//! ```

mod config;
mod error;
mod module;
mod pattern;
mod scene_id;
mod table;


pub use config::{SceneConfig, SceneLayout};
pub use error::{Result, SceneError};
pub use module::{SceneLoader, SceneModule};
pub use pattern::{PathParams, RoutePattern};
pub use scene_id::SceneId;
pub use table::{SceneMatch, SceneTable, SceneTableBuilder};
