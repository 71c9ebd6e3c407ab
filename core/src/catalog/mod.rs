pub mod builtin;
pub mod record;
pub mod store;

pub use record::{Category, HazardId, HazardRecord, Severity};
pub use store::Catalog;
