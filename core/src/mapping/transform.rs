use serde::{Deserialize, Serialize};

/// Longitude that lands on the image's x = 0 column.
pub const LNG_ORIGIN: f64 = 121.0;
/// Latitude that lands on the image's y = 0 row.
pub const LAT_ORIGIN: f64 = 14.7;
/// Map units per degree.
pub const SCALE: f64 = 100.0;

/// Point in image (map) units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps a hazard's local `(lat, lng)` onto the image surface.
///
/// Any finite input is accepted; points outside the image are not clamped.
pub fn project(lat: f64, lng: f64) -> MapPoint {
    MapPoint {
        x: (lng - LNG_ORIGIN) * SCALE,
        y: (LAT_ORIGIN - lat) * SCALE,
    }
}
