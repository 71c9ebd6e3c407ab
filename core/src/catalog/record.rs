use crate::mapping::{transform, MapPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// Session-stable identifier of a hazard record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HazardId(pub u32);

impl fmt::Display for HazardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("#{}", self.0))
    }
}

/// Hazard category. Names outside the recognized set are kept verbatim in
/// `Other` and render with the neutral marker color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Fire,
    Flood,
    Structural,
    Road,
    Environmental,
    Other(String),
}

impl Category {
    /// Recognized categories in selector order.
    pub const KNOWN: [Category; 5] = [
        Category::Fire,
        Category::Flood,
        Category::Structural,
        Category::Road,
        Category::Environmental,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "fire" => Self::Fire,
            "flood" => Self::Flood,
            "structural" => Self::Structural,
            "road" => Self::Road,
            "environmental" => Self::Environmental,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Fire => "fire",
            Self::Flood => "flood",
            Self::Structural => "structural",
            Self::Road => "road",
            Self::Environmental => "environmental",
            Self::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Severity level; `High` is the only level drawn with an enlarged marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One entry in the hazard catalog. Records are never edited once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardRecord {
    pub id: HazardId,
    pub name: String,
    pub description: String,
    pub address: String,
    pub category: Category,
    pub severity: Severity,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub street_view: String,
    pub street_name: String,
    pub street_description: String,
}

impl HazardRecord {
    /// Position of the record on the image surface.
    pub fn map_point(&self) -> MapPoint {
        transform::project(self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn unknown_category_round_trips_its_name() {
        let category = Category::from_name("landslide");
        assert_eq!(category, Category::Other("landslide".into()));
        assert!(!category.is_known());
        assert_eq!(category.to_string(), "landslide");
    }

    #[test]
    fn severity_parses_lowercase_names() {
        assert_eq!(Severity::from_str("high").unwrap(), Severity::High);
        assert_eq!(Severity::Medium.to_string(), "medium");
        assert!(Severity::from_str("extreme").is_err());
    }

    #[test]
    fn record_deserializes_camel_case_fields() {
        let json = r#"{
            "id": 9,
            "name": "Gully",
            "description": "Washed out",
            "address": "Hill Road",
            "category": "landslide",
            "severity": "low",
            "lat": 1.0,
            "lng": 122.0,
            "tags": ["mud"],
            "streetView": "img/9.jpg",
            "streetName": "Hill Road",
            "streetDescription": "Steep"
        }"#;
        let record: HazardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, HazardId(9));
        assert_eq!(record.category, Category::Other("landslide".into()));
        assert_eq!(record.street_view, "img/9.jpg");
    }
}
