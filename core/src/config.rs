use crate::catalog::Catalog;
use crate::mapping::{ImageBounds, MapView};
use crate::prelude::{MapError, MapResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Map surface settings, loadable from YAML. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub background_image: PathBuf,
    pub image_bounds: ImageBounds,
    pub min_zoom: i32,
    pub max_zoom: i32,
    /// Zoom used when centering on a selected hazard.
    pub select_zoom: i32,
    pub resize_delay_ms: u64,
    /// Alternate JSON catalog; the built-in records are used when unset.
    pub catalog: Option<PathBuf>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            background_image: PathBuf::from("img/1.jpeg"),
            image_bounds: ImageBounds::default(),
            min_zoom: -2,
            max_zoom: 4,
            select_zoom: 1,
            resize_delay_ms: 300,
            catalog: None,
        }
    }
}

impl MapConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| MapError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let config: MapConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn map_view(&self) -> MapView {
        MapView::new(self.image_bounds, self.min_zoom, self.max_zoom)
    }

    pub fn resize_delay(&self) -> Duration {
        Duration::from_millis(self.resize_delay_ms)
    }

    pub fn load_catalog(&self) -> MapResult<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_shipped_map() {
        let config = MapConfig::default();
        assert_eq!(config.resize_delay(), Duration::from_millis(300));
        assert_eq!(config.map_view().bounds().width(), 4100.0);
        assert_eq!(config.load_catalog().unwrap().len(), 5);
    }

    #[test]
    fn config_load_reads_yaml_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"background_image: maps/river.png\nmax_zoom: 6\nimage_bounds:\n  min: {x: 0, y: 0}\n  max: {x: 2000, y: 1000}\n")
            .unwrap();
        let path = temp.into_temp_path();
        let config = MapConfig::load(&path).unwrap();
        assert_eq!(config.background_image, PathBuf::from("maps/river.png"));
        assert_eq!(config.max_zoom, 6);
        assert_eq!(config.min_zoom, -2);
        assert_eq!(config.image_bounds.height(), 1000.0);
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"max_zoom: [not, a, number]\n").unwrap();
        let err = MapConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }
}
