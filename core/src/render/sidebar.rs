use crate::catalog::{HazardId, HazardRecord};

pub const EMPTY_MESSAGE: &str = "No hazards found.";
const EXCERPT_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: HazardId,
    pub title: String,
    pub excerpt: String,
}

impl ListEntry {
    pub fn from_record(record: &HazardRecord) -> Self {
        let mut excerpt: String = record.description.chars().take(EXCERPT_CHARS).collect();
        excerpt.push_str("...");
        Self {
            id: record.id,
            title: record.name.clone(),
            excerpt,
        }
    }
}

/// Sidebar contents mirroring the visible subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarList {
    Entries(Vec<ListEntry>),
    Empty { message: String },
}

impl SidebarList {
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a HazardRecord>,
    {
        let entries: Vec<ListEntry> = records.into_iter().map(ListEntry::from_record).collect();
        if entries.is_empty() {
            Self::Empty {
                message: EMPTY_MESSAGE.to_string(),
            }
        } else {
            Self::Entries(entries)
        }
    }

    pub fn ids(&self) -> Vec<HazardId> {
        match self {
            Self::Entries(entries) => entries.iter().map(|entry| entry.id).collect(),
            Self::Empty { .. } => Vec::new(),
        }
    }
}
