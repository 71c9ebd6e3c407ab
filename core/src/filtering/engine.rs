use super::criterion::Criterion;
use crate::catalog::{Catalog, HazardRecord};

/// Records matching `criterion`, in catalog order.
pub fn compute_visible<'a>(catalog: &'a Catalog, criterion: &Criterion) -> Vec<&'a HazardRecord> {
    catalog
        .iter()
        .filter(|record| criterion.matches(record))
        .collect()
}
