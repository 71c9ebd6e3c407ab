use crate::catalog::HazardRecord;

/// Normalized free-text query: trimmed and lowercased, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring match over name, description, address and every tag.
    pub fn matches(&self, record: &HazardRecord) -> bool {
        let needle = self.0.as_str();
        contains(&record.name, needle)
            || contains(&record.description, needle)
            || contains(&record.address, needle)
            || record.tags.iter().any(|tag| contains(tag, needle))
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
