use crate::catalog::{Category, HazardId, HazardRecord, Severity};
use crate::mapping::{MapPoint, MapView, ScreenPoint};
use std::fmt;

pub const HIGH_SEVERITY_RADIUS: f32 = 10.0;
pub const DEFAULT_RADIUS: f32 = 8.0;
pub const STROKE_WIDTH: f32 = 1.0;
pub const FILL_OPACITY: f32 = 0.8;
pub const STROKE_COLOR: MarkerColor = MarkerColor(0xffffff);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerColor(pub u32);

impl MarkerColor {
    pub const NEUTRAL: MarkerColor = MarkerColor(0x333333);

    pub fn for_category(category: &Category) -> Self {
        match category {
            Category::Fire => Self(0xf30a06),
            Category::Flood => Self(0x4c00ff),
            Category::Structural => Self(0xff9900),
            Category::Road => Self(0x555555),
            Category::Environmental => Self(0x00aa00),
            Category::Other(_) => Self::NEUTRAL,
        }
    }

    pub fn rgb8(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

pub fn radius_for(severity: Severity) -> f32 {
    match severity {
        Severity::High => HIGH_SEVERITY_RADIUS,
        _ => DEFAULT_RADIUS,
    }
}

/// Circle marker for one visible hazard. The radius is in screen pixels and
/// does not change with zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: HazardId,
    pub position: MapPoint,
    pub fill: MarkerColor,
    pub radius: f32,
    pub label: String,
}

impl Marker {
    pub fn from_record(record: &HazardRecord) -> Self {
        Self {
            id: record.id,
            position: record.map_point(),
            fill: MarkerColor::for_category(&record.category),
            radius: radius_for(record.severity),
            label: record.name.clone(),
        }
    }

    pub fn contains(&self, view: &MapView, cursor: ScreenPoint) -> bool {
        view.project(self.position).distance(cursor) <= self.radius + STROKE_WIDTH / 2.0
    }
}

/// Top-most marker under `cursor`; later markers are drawn above earlier ones.
pub fn hit_test(markers: &[Marker], view: &MapView, cursor: ScreenPoint) -> Option<HazardId> {
    markers
        .iter()
        .rev()
        .find(|marker| marker.contains(view, cursor))
        .map(|marker| marker.id)
}
