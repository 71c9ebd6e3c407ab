use super::record::{Category, HazardId, HazardRecord, Severity};

struct Seed {
    id: u32,
    name: &'static str,
    description: &'static str,
    address: &'static str,
    category: Category,
    lat: f64,
    lng: f64,
    severity: Severity,
    tags: [&'static str; 3],
    street_view: &'static str,
    street_name: &'static str,
    street_description: &'static str,
}

impl Seed {
    fn into_record(self) -> HazardRecord {
        HazardRecord {
            id: HazardId(self.id),
            name: self.name.into(),
            description: self.description.into(),
            address: self.address.into(),
            category: self.category,
            severity: self.severity,
            lat: self.lat,
            lng: self.lng,
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            street_view: self.street_view.into(),
            street_name: self.street_name.into(),
            street_description: self.street_description.into(),
        }
    }
}

/// The five surveyed sections along Palayan Road, in display order.
pub fn records() -> Vec<HazardRecord> {
    vec![
        Seed {
            id: 1,
            name: "Section 1 (Fire Prone)",
            description: "Overloaded electrical circuits and crowded conditions create significant fire risk. No visible fire extinguishers in the area.",
            address: "Market Area, Palayan Road, Philippines",
            category: Category::Fire,
            lat: 2.0,
            lng: 137.9,
            severity: Severity::Medium,
            tags: ["fire", "electrical", "crowded"],
            street_view: "img/2.jpg",
            street_name: "Market Area, Palayan Road",
            street_description: "Crowded market area with visible electrical wiring issues. Limited emergency access routes.",
        },
        Seed {
            id: 2,
            name: "Section 2 (Flood Prone) ",
            description: "This area experiences frequent flooding during heavy rains, with water levels reaching up to 1 meter. Avoid during stormy weather.",
            address: "Main Road, Palayan Road, Philippines",
            category: Category::Flood,
            lat: 0.0,
            lng: 132.0,
            severity: Severity::High,
            tags: ["flood", "water", "accessibility"],
            street_view: "img/3.jpg",
            street_name: "Main Road, Palayan Road",
            street_description: "This street is prone to flooding during the rainy season. Drainage systems are inadequate for heavy rainfall.",
        },
        Seed {
            id: 3,
            name: "Section 3 (Unstable Structure)",
            description: "Building shows significant structural cracks. Appears abandoned but still accessible to the public.",
            address: "123 Old Street, Palayan Road, Philippines",
            category: Category::Structural,
            lat: 2.0,
            lng: 150.0,
            severity: Severity::High,
            tags: ["structural", "collapse", "building"],
            street_view: "img/6.jpeg",
            street_name: "Old Street, Palayan Road",
            street_description: "Dilapidated building with visible structural damage. Potential collapse risk during seismic activity or heavy storms.",
        },
        Seed {
            id: 4,
            name: "Section 4 (Slippery Road)",
            description: "Steep, unpaved road becomes extremely slippery when wet. Multiple accidents reported in this area.",
            address: "Mountain Path, Palayan Road, Phlippines",
            category: Category::Road,
            lat: 6.672,
            lng: 131.047,
            severity: Severity::Medium,
            tags: ["road", "slippery", "accident"],
            street_view: "img/4.jpeg",
            street_name: "Mountain Path, Palayan Road",
            street_description: "Unpaved mountain road with steep inclines. Becomes dangerously slippery during rain. Limited guard rails.",
        },
        Seed {
            id: 5,
            name: "Section 5 (Erosion Risk)",
            description: "Significant soil erosion along the riverbank. Risk of collapse during heavy rains.",
            address: "Riverside, Palayan Road, Philipines",
            category: Category::Environmental,
            lat: 0.0,
            lng: 138.1,
            severity: Severity::Medium,
            tags: ["erosion", "river", "environmental"],
            street_view: "img/5.jpeg",
            street_name: "Riverside, Palayan Road",
            street_description: "Riverbank area showing significant erosion. Nearby structures may be at risk during flooding events.",
        },
    ]
    .into_iter()
    .map(Seed::into_record)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_records_have_unique_ids_in_order() {
        let records = records();
        let ids: Vec<u32> = records.iter().map(|record| record.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn builtin_categories_are_all_recognized() {
        assert!(records().iter().all(|record| record.category.is_known()));
    }
}
