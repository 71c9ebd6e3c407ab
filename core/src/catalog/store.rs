use super::builtin;
use super::record::{HazardId, HazardRecord};
use crate::prelude::{MapError, MapResult};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Ordered, immutable collection of hazard records with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<HazardRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids. Record order is kept.
    pub fn new(records: Vec<HazardRecord>) -> MapResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(MapError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// The five Palayan Road sections shipped with the map.
    pub fn builtin() -> Self {
        Self {
            records: builtin::records(),
        }
    }

    pub fn from_json_str(contents: &str) -> MapResult<Self> {
        let records: Vec<HazardRecord> = serde_json::from_str(contents)?;
        Self::new(records)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| MapError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        log::info!(
            "loaded {} hazard records from {}",
            catalog.len(),
            path_ref.display()
        );
        Ok(catalog)
    }

    pub fn get(&self, id: HazardId) -> Option<&HazardRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HazardRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[HazardRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
