use crate::Message;
use hazardcore::catalog::HazardId;
use hazardcore::mapping::{MapView, ScreenPoint, Viewport};
use hazardcore::render::marker::{hit_test, Marker, FILL_OPACITY, STROKE_WIDTH};
use iced::{
    mouse, window,
    widget::{
        canvas::{self, Frame, Geometry, Path, Stroke},
        image,
    },
    Color, Pixels, Point, Rectangle, Renderer, Size, Theme,
};

/// Movement in pixels below which a press-release counts as a click.
const CLICK_SLOP: f32 = 3.0;

/// Image surface with one circle per visible hazard.
pub struct MapCanvas<'a> {
    pub markers: &'a [Marker],
    pub view: &'a MapView,
    pub background: Option<&'a image::Handle>,
    pub pinned: Option<HazardId>,
}

#[derive(Debug, Default)]
pub struct MapCanvasState {
    last_size: Option<Size>,
    drag_from: Option<Point>,
    dragging: bool,
}

fn screen(point: Point) -> ScreenPoint {
    ScreenPoint::new(point.x, point.y)
}

impl MapCanvas<'_> {
    fn marker_at(&self, cursor: mouse::Cursor, bounds: Rectangle) -> Option<HazardId> {
        let position = cursor.position_in(bounds)?;
        hit_test(self.markers, self.view, screen(position))
    }

    fn draw_label(&self, frame: &mut Frame, marker: &Marker) {
        let anchor = self.view.project(marker.position);
        let width = marker.label.trim().chars().count() as f32 * 7.0 + 12.0;
        let height = 20.0;
        let top_left = Point::new(
            anchor.x - width / 2.0,
            anchor.y - marker.radius - height - 6.0,
        );
        frame.fill_rectangle(
            top_left,
            Size::new(width, height),
            Color::from_rgba(0.1, 0.1, 0.12, 0.9),
        );
        frame.fill_text(canvas::Text {
            content: marker.label.trim().to_string(),
            position: Point::new(top_left.x + 6.0, top_left.y + 3.0),
            color: Color::WHITE,
            size: Pixels(13.0),
            ..Default::default()
        });
    }
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = MapCanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Window(window::Event::RedrawRequested(_)) => {
                let size = bounds.size();
                if state.last_size == Some(size) {
                    return None;
                }
                state.last_size = Some(size);
                Some(canvas::Action::publish(Message::ViewportMeasured(
                    Viewport::new(size.width, size.height),
                )))
            }
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.drag_from = Some(position);
                state.dragging = false;
                Some(canvas::Action::capture())
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let Some(origin) = state.drag_from else {
                    // hover labels follow the cursor
                    return Some(canvas::Action::request_redraw());
                };
                let position = cursor.position_in(bounds)?;
                let (dx, dy) = (position.x - origin.x, position.y - origin.y);
                if !state.dragging && dx.abs() + dy.abs() < CLICK_SLOP {
                    return None;
                }
                state.dragging = true;
                state.drag_from = Some(position);
                Some(canvas::Action::publish(Message::Panned(dx, dy)).and_capture())
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.drag_from.take()?;
                if std::mem::take(&mut state.dragging) {
                    return Some(canvas::Action::capture());
                }
                self.marker_at(cursor, bounds)
                    .map(|id| canvas::Action::publish(Message::MarkerClicked(id)).and_capture())
            }
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                let message = if y > 0.0 {
                    Message::ZoomIn
                } else if y < 0.0 {
                    Message::ZoomOut
                } else {
                    return None;
                };
                Some(canvas::Action::publish(message).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.87, 0.89, 0.91),
        );

        if let Some(handle) = self.background {
            let (top_left, width, height) = self.view.image_rect();
            frame.draw_image(
                Rectangle::new(Point::new(top_left.x, top_left.y), Size::new(width, height)),
                canvas::Image::new(handle.clone()),
            );
        }

        for marker in self.markers {
            let center = self.view.project(marker.position);
            let circle = Path::circle(Point::new(center.x, center.y), marker.radius);
            let (r, g, b) = marker.fill.rgb8();
            frame.fill(&circle, Color::from_rgba8(r, g, b, FILL_OPACITY));
            frame.stroke(
                &circle,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(Color::WHITE),
            );
        }

        let hovered = self.marker_at(cursor, bounds);
        for marker in self
            .markers
            .iter()
            .filter(|marker| Some(marker.id) == hovered || Some(marker.id) == self.pinned)
        {
            self.draw_label(&mut frame, marker);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if self.marker_at(cursor, bounds).is_some() {
            mouse::Interaction::Pointer
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas::Program;
    use std::time::Instant;

    fn canvas(view: &MapView) -> MapCanvas<'_> {
        MapCanvas {
            markers: &[],
            view,
            background: None,
            pinned: None,
        }
    }

    #[test]
    fn press_after_resize_starts_a_drag() {
        let view = MapView::default();
        let program = canvas(&view);
        let mut state = MapCanvasState {
            last_size: Some(Size::new(800.0, 600.0)),
            ..Default::default()
        };
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(1100.0, 600.0));
        let cursor = mouse::Cursor::Available(Point::new(40.0, 40.0));
        let press = canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        assert!(program.update(&mut state, &press, bounds, cursor).is_some());
        assert_eq!(state.drag_from, Some(Point::new(40.0, 40.0)));
    }

    #[test]
    fn redraw_measures_only_new_sizes() {
        let view = MapView::default();
        let program = canvas(&view);
        let mut state = MapCanvasState::default();
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(640.0, 480.0));
        let redraw = canvas::Event::Window(window::Event::RedrawRequested(Instant::now()));

        assert!(program
            .update(&mut state, &redraw, bounds, mouse::Cursor::Unavailable)
            .is_some());
        assert_eq!(state.last_size, Some(Size::new(640.0, 480.0)));
        assert!(program
            .update(&mut state, &redraw, bounds, mouse::Cursor::Unavailable)
            .is_none());
    }
}
