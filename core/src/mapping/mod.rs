pub mod transform;
pub mod view;

pub use transform::{project, MapPoint};
pub use view::{ImageBounds, MapView, ScreenPoint, Viewport};
