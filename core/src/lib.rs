//! Core model and interaction logic for the interactive hazard map.
//!
//! The modules keep the map's state in one owning controller and publish
//! everything that should appear on screen through a render target, so the
//! filter and selection rules can run without any UI toolkit attached.

pub mod background;
pub mod catalog;
pub mod config;
pub mod filtering;
pub mod mapping;
pub mod prelude;
pub mod render;
pub mod session;
pub mod telemetry;

pub use catalog::{Catalog, Category, HazardId, HazardRecord, Severity};
pub use config::MapConfig;
pub use prelude::{MapError, MapResult};
pub use render::RenderTarget;
pub use session::MapController;
