use std::path::PathBuf;

pub use crate::catalog::{Catalog, Category, HazardId, HazardRecord, Severity};
pub use crate::filtering::{CategoryFilter, Criterion, SearchQuery};
pub use crate::mapping::{MapPoint, MapView, ScreenPoint, Viewport};
pub use crate::render::{DetailPanel, Marker, Notice, RenderTarget, SidebarList, StreetView};
pub use crate::session::{MapController, Selection};

/// Common error type for catalog, configuration and controller operations.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("duplicate hazard id {0}")]
    DuplicateId(HazardId),
    #[error("unknown hazard {0}")]
    UnknownHazard(HazardId),
    #[error("hazard {0} is not in the visible subset")]
    NotVisible(HazardId),
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("parsing catalog: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("background image {path}: {reason}")]
    Background { path: PathBuf, reason: String },
}

pub type MapResult<T> = Result<T, MapError>;
