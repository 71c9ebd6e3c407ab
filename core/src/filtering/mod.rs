pub mod criterion;
pub mod engine;
pub mod search;

pub use criterion::{CategoryFilter, Criterion};
pub use engine::compute_visible;
pub use search::SearchQuery;
