pub mod model;
pub mod target;
