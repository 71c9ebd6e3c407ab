use super::transform::MapPoint;
use serde::{Deserialize, Serialize};

/// Pixel size of the area the map is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Point in viewport pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: ScreenPoint) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Extent of the background image in map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageBounds {
    pub min: MapPoint,
    pub max: MapPoint,
}

impl ImageBounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

impl Default for ImageBounds {
    fn default() -> Self {
        Self {
            min: MapPoint::new(-100.0, -100.0),
            max: MapPoint::new(4000.0, 3000.0),
        }
    }
}

/// Flat-plane view over the image: map `y` grows upward, and each zoom step
/// doubles the number of screen pixels per map unit.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    center: MapPoint,
    zoom: i32,
    viewport: Viewport,
    bounds: ImageBounds,
    min_zoom: i32,
    max_zoom: i32,
}

impl MapView {
    pub fn new(bounds: ImageBounds, min_zoom: i32, max_zoom: i32) -> Self {
        let max_zoom = max_zoom.max(min_zoom);
        Self {
            center: bounds.center(),
            zoom: 0.clamp(min_zoom, max_zoom),
            viewport: Viewport::default(),
            bounds,
            min_zoom,
            max_zoom,
        }
    }

    pub fn center(&self) -> MapPoint {
        self.center
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bounds(&self) -> ImageBounds {
        self.bounds
    }

    /// Screen pixels per map unit at the current zoom.
    pub fn scale(&self) -> f64 {
        2f64.powi(self.zoom)
    }

    pub fn set_view(&mut self, center: MapPoint, zoom: i32) {
        self.center = center;
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Centers on the image and picks the largest whole zoom at which the
    /// image fits the viewport.
    pub fn fit_bounds(&mut self) {
        self.center = self.bounds.center();
        if self.viewport.is_degenerate() || self.bounds.width() <= 0.0 || self.bounds.height() <= 0.0
        {
            self.zoom = self.min_zoom;
            return;
        }
        let ratio = (self.viewport.width as f64 / self.bounds.width())
            .min(self.viewport.height as f64 / self.bounds.height());
        let zoom = ratio.log2().floor() as i32;
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Returns `false` when already at the maximum zoom.
    pub fn zoom_in(&mut self) -> bool {
        self.step_zoom(1)
    }

    /// Returns `false` when already at the minimum zoom.
    pub fn zoom_out(&mut self) -> bool {
        self.step_zoom(-1)
    }

    fn step_zoom(&mut self, delta: i32) -> bool {
        let next = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    /// Moves the view so content follows a drag of `(dx, dy)` pixels.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        let scale = self.scale();
        self.center.x -= dx as f64 / scale;
        self.center.y += dy as f64 / scale;
    }

    /// Adopts a new viewport size while keeping the same center.
    pub fn invalidate_size(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn project(&self, point: MapPoint) -> ScreenPoint {
        let scale = self.scale();
        ScreenPoint {
            x: ((point.x - self.center.x) * scale + self.viewport.width as f64 / 2.0) as f32,
            y: ((self.center.y - point.y) * scale + self.viewport.height as f64 / 2.0) as f32,
        }
    }

    pub fn unproject(&self, screen: ScreenPoint) -> MapPoint {
        let scale = self.scale();
        MapPoint {
            x: (screen.x as f64 - self.viewport.width as f64 / 2.0) / scale + self.center.x,
            y: self.center.y - (screen.y as f64 - self.viewport.height as f64 / 2.0) / scale,
        }
    }

    /// Screen-space top-left corner and size of the background image.
    pub fn image_rect(&self) -> (ScreenPoint, f32, f32) {
        let top_left = self.project(MapPoint::new(self.bounds.min.x, self.bounds.max.y));
        let bottom_right = self.project(MapPoint::new(self.bounds.max.x, self.bounds.min.y));
        (
            top_left,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(ImageBounds::default(), -2, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(width: f32, height: f32) -> MapView {
        let mut view = MapView::default();
        view.invalidate_size(Viewport::new(width, height));
        view
    }

    #[test]
    fn fit_bounds_picks_largest_fitting_zoom() {
        let mut view = view_with(1025.0, 775.0);
        view.fit_bounds();
        assert_eq!(view.zoom(), -2);
        assert_eq!(view.center(), MapPoint::new(1950.0, 1450.0));

        let mut view = view_with(2050.0, 1550.0);
        view.fit_bounds();
        assert_eq!(view.zoom(), -1);
    }

    #[test]
    fn fit_bounds_clamps_to_minimum_zoom() {
        let mut view = view_with(100.0, 100.0);
        view.fit_bounds();
        assert_eq!(view.zoom(), -2);
    }

    #[test]
    fn zoom_steps_are_clamped() {
        let mut view = view_with(800.0, 600.0);
        view.set_view(MapPoint::new(0.0, 0.0), 3);
        assert!(view.zoom_in());
        assert!(!view.zoom_in());
        assert_eq!(view.zoom(), 4);
        view.set_view(MapPoint::new(0.0, 0.0), -10);
        assert_eq!(view.zoom(), -2);
        assert!(!view.zoom_out());
    }

    #[test]
    fn center_projects_to_viewport_middle() {
        let mut view = view_with(800.0, 600.0);
        view.set_view(MapPoint::new(1690.0, 1270.0), 1);
        assert_eq!(
            view.project(MapPoint::new(1690.0, 1270.0)),
            ScreenPoint::new(400.0, 300.0)
        );
        // map y grows upward
        let above = view.project(MapPoint::new(1690.0, 1280.0));
        assert_eq!(above, ScreenPoint::new(400.0, 280.0));
    }

    #[test]
    fn unproject_inverts_project() {
        let mut view = view_with(640.0, 480.0);
        view.set_view(MapPoint::new(100.0, 200.0), 2);
        let point = MapPoint::new(112.5, 190.25);
        let back = view.unproject(view.project(point));
        assert!((back.x - point.x).abs() < 1e-3);
        assert!((back.y - point.y).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_content_with_the_drag() {
        let mut view = view_with(400.0, 400.0);
        view.set_view(MapPoint::new(0.0, 0.0), 0);
        let before = view.project(MapPoint::new(10.0, 10.0));
        view.pan_by(25.0, -5.0);
        let after = view.project(MapPoint::new(10.0, 10.0));
        assert_eq!(after.x - before.x, 25.0);
        assert_eq!(after.y - before.y, -5.0);
    }

    #[test]
    fn invalidate_size_keeps_center() {
        let mut view = view_with(400.0, 300.0);
        view.set_view(MapPoint::new(50.0, 60.0), 1);
        view.invalidate_size(Viewport::new(900.0, 700.0));
        assert_eq!(view.center(), MapPoint::new(50.0, 60.0));
        assert_eq!(view.project(view.center()), ScreenPoint::new(450.0, 350.0));
    }
}
