pub mod chrome;
pub mod controller;
pub mod selection;

pub use chrome::{ChromeState, DeferredResize, Icon};
pub use controller::MapController;
pub use selection::Selection;
