use crate::workflow::config::Step;
use hazardcore::catalog::{Catalog, Category};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Settings for generating a random click-through session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub steps: usize,
    pub seed: u64,
    /// Queries drawn for search steps; blank entries exercise the fallback.
    pub queries: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            steps: 200,
            seed: 0,
            queries: ["fire", "Erosion", "palayan", "ROAD", "river", "   ", "", "volcano"]
                .iter()
                .map(|query| query.to_string())
                .collect(),
        }
    }
}

fn filter_names() -> Vec<String> {
    std::iter::once("all".to_string())
        .chain(Category::KNOWN.iter().map(|category| category.to_string()))
        .chain(std::iter::once("landslide".to_string()))
        .collect()
}

/// Builds a reproducible sequence of interactions. Selections draw from
/// every catalog id plus one unknown id, so refused clicks occur too.
pub fn build_steps(config: &GeneratorConfig, catalog: &Catalog) -> Vec<Step> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let filters = filter_names();
    let mut ids: Vec<u32> = catalog.iter().map(|record| record.id.0).collect();
    if let Some(unknown) = ids.iter().copied().max().unwrap_or(0).checked_add(1) {
        ids.push(unknown);
    }

    let mut steps = Vec::with_capacity(config.steps);
    for _ in 0..config.steps {
        let step = match rng.gen_range(0..14) {
            0 | 1 => Step::Filter(filters.choose(&mut rng).cloned().unwrap_or_default()),
            2 | 3 => Step::Search(config.queries.choose(&mut rng).cloned().unwrap_or_default()),
            4 | 5 => Step::Select(ids.choose(&mut rng).copied().unwrap_or(0)),
            6 => Step::SelectFromList(ids.choose(&mut rng).copied().unwrap_or(0)),
            7 => Step::CloseDetail,
            8 => Step::OpenStreetView,
            9 => {
                if rng.gen_bool(0.5) {
                    Step::CloseStreetView
                } else {
                    Step::ClickBackdrop
                }
            }
            10 => {
                if rng.gen_bool(0.5) {
                    Step::ZoomIn
                } else {
                    Step::ZoomOut
                }
            }
            11 => Step::ToggleSidebar,
            12 => Step::ToggleFullscreen,
            _ => {
                if rng.gen_bool(0.5) {
                    Step::LocateMe
                } else {
                    Step::ReportHazard
                }
            }
        };
        steps.push(step);
    }
    steps
}
