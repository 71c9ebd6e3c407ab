use super::search::SearchQuery;
use crate::catalog::{Category, HazardRecord};
use std::fmt;

/// State of the category selector: the `all` sentinel or one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector controls in display order, `all` first.
    pub fn controls() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::KNOWN.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "all" => Self::All,
            other => Self::Only(Category::from_name(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, record: &HazardRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => &record.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single rule the visible subset is derived from. A search replaces
/// the category filter rather than narrowing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Category(CategoryFilter),
    Search(SearchQuery),
}

impl Criterion {
    pub fn matches(&self, record: &HazardRecord) -> bool {
        match self {
            Self::Category(filter) => filter.matches(record),
            Self::Search(query) => query.matches(record),
        }
    }
}

impl Default for Criterion {
    fn default() -> Self {
        Self::Category(CategoryFilter::All)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(filter) => write!(f, "category={filter}"),
            Self::Search(query) => write!(f, "search={:?}", query.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_start_with_all() {
        let controls = CategoryFilter::controls();
        assert_eq!(controls.len(), 6);
        assert_eq!(controls[0], CategoryFilter::All);
        assert_eq!(controls[2].as_str(), "flood");
    }

    #[test]
    fn names_parse_to_filters() {
        assert_eq!(CategoryFilter::from_name("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_name("road"),
            CategoryFilter::Only(Category::Road)
        );
    }
}
