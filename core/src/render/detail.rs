use super::marker::MarkerColor;
use crate::catalog::{Category, HazardId, HazardRecord};

/// One visual tag element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
}

impl TagChip {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Style key of the chip, e.g. `hazard-flood`.
    pub fn class(&self) -> String {
        format!("hazard-{}", self.label)
    }

    /// Tags that name a recognized category borrow its marker color.
    pub fn color(&self) -> MarkerColor {
        MarkerColor::for_category(&Category::from_name(&self.label))
    }
}

fn chips(record: &HazardRecord) -> Vec<TagChip> {
    record.tags.iter().map(TagChip::new).collect()
}

/// Summary shown for the selected hazard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub id: HazardId,
    pub name: String,
    pub address: String,
    pub description: String,
    pub tags: Vec<TagChip>,
}

impl DetailPanel {
    pub fn from_record(record: &HazardRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            address: record.address.clone(),
            description: record.description.clone(),
            tags: chips(record),
        }
    }
}

/// Contents of the street-level modal. `image` is passed through untouched;
/// a missing file shows up as an empty image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetView {
    pub id: HazardId,
    pub street_name: String,
    pub image: String,
    pub street_description: String,
    pub tags: Vec<TagChip>,
}

impl StreetView {
    pub fn from_record(record: &HazardRecord) -> Self {
        Self {
            id: record.id,
            street_name: record.street_name.clone(),
            image: record.street_view.clone(),
            street_description: record.street_description.clone(),
            tags: chips(record),
        }
    }
}
