// SPDX-License-Identifier: MPL-2.0
//! Canvas widget showing the selected image.
//!
//! The widget is a thin adapter: it turns Iced mouse events into
//! [`PointerEvent`]s in viewport coordinates and draws whatever the
//! [`Session`] currently holds. All decisions are taken by the session.

use crate::canvas::{CursorShape, Interaction, PointerButton, PointerEvent, ViewTransform};
use crate::session::Session;
use crate::ui::design_tokens::{border, opacity, palette, sizing};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{image, Action};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer input together with the canvas size it was measured in.
    Pointer { event: PointerEvent, viewport: Size },
    /// The canvas was laid out with a new size.
    Resized(Size),
}

pub struct CanvasView<'a> {
    session: &'a Session,
}

impl<'a> CanvasView<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

/// Renders the canvas filling the available space.
pub fn view(session: &Session) -> Element<'_, Message> {
    canvas::Canvas::new(CanvasView::new(session))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Maps an Iced mouse button onto the buttons the canvas distinguishes.
#[must_use]
pub fn pointer_button(button: mouse::Button) -> PointerButton {
    match button {
        mouse::Button::Left => PointerButton::Primary,
        mouse::Button::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

#[must_use]
pub fn mouse_interaction_for(shape: CursorShape) -> mouse::Interaction {
    match shape {
        CursorShape::Default => mouse::Interaction::default(),
        CursorShape::ClosedHand => mouse::Interaction::Grabbing,
        CursorShape::Cross => mouse::Interaction::Crosshair,
    }
}

/// Cursor position relative to `bounds`, even outside of them.
fn relative_position(cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
    cursor
        .position()
        .map(|p| Point::new(p.x - bounds.x, p.y - bounds.y))
}

impl CanvasView<'_> {
    fn publish(&self, event: PointerEvent, bounds: Rectangle) -> Option<Action<Message>> {
        Some(
            Action::publish(Message::Pointer {
                event,
                viewport: bounds.size(),
            })
            .and_capture(),
        )
    }

    fn dragging(&self) -> bool {
        self.session.interaction() != Interaction::Idle
    }

    fn draw_scroll_indicators(&self, frame: &mut Frame, transform: &ViewTransform) {
        let viewport = transform.viewport();
        let content = transform.content_size();
        let max = transform.max_offset();
        let offset = transform.offset();
        let color = Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        };

        if max.x > 0.0 {
            let length = viewport.width * (viewport.width / content.width);
            let start = (viewport.width - length) * (offset.x / max.x);
            frame.fill_rectangle(
                Point::new(start, viewport.height - sizing::SCROLL_INDICATOR),
                Size::new(length, sizing::SCROLL_INDICATOR),
                color,
            );
        }
        if max.y > 0.0 {
            let length = viewport.height * (viewport.height / content.height);
            let start = (viewport.height - length) * (offset.y / max.y);
            frame.fill_rectangle(
                Point::new(viewport.width - sizing::SCROLL_INDICATOR, start),
                Size::new(sizing::SCROLL_INDICATOR, length),
                color,
            );
        }
    }
}

impl canvas::Program<Message> for CanvasView<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                let position = cursor.position_in(bounds)?;
                self.publish(
                    PointerEvent::Pressed {
                        button: pointer_button(*button),
                        position,
                    },
                    bounds,
                )
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.dragging() => {
                let position = relative_position(cursor, bounds)?;
                self.publish(PointerEvent::Moved { position }, bounds)
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(button)) if self.dragging() => {
                let position = relative_position(cursor, bounds)?;
                self.publish(
                    PointerEvent::Released {
                        button: pointer_button(*button),
                        position,
                    },
                    bounds,
                )
            }
            iced::Event::Window(_) if self.session.transform().viewport() != bounds.size() => {
                Some(Action::publish(Message::Resized(bounds.size())))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            theme.extended_palette().background.weak.color,
        );

        if let Some(rendition) = self.session.rendition() {
            let transform = self.session.transform();
            let target = transform.scene_rect_to_viewport(rendition.bounds());
            frame.draw_image(
                target,
                canvas::Image::new(rendition.handle.clone())
                    .filter_method(image::FilterMethod::Nearest),
            );
            self.draw_scroll_indicators(&mut frame, transform);
        }

        if let Some(band) = self.session.rubber_band() {
            let path = Path::rectangle(band.position(), band.size());
            frame.fill(
                &path,
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_500
                },
            );
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(border::WIDTH_SM)
                    .with_color(palette::PRIMARY_500),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging() || cursor.is_over(bounds) {
            mouse_interaction_for(self.session.cursor())
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_buttons_map_to_primary_and_secondary() {
        assert_eq!(pointer_button(mouse::Button::Left), PointerButton::Primary);
        assert_eq!(pointer_button(mouse::Button::Right), PointerButton::Secondary);
        assert_eq!(pointer_button(mouse::Button::Middle), PointerButton::Other);
    }

    #[test]
    fn cursor_shapes_map_to_mouse_interactions() {
        assert_eq!(
            mouse_interaction_for(CursorShape::ClosedHand),
            mouse::Interaction::Grabbing
        );
        assert_eq!(
            mouse_interaction_for(CursorShape::Cross),
            mouse::Interaction::Crosshair
        );
        assert_eq!(
            mouse_interaction_for(CursorShape::Default),
            mouse::Interaction::default()
        );
    }

    #[test]
    fn positions_stay_relative_outside_bounds() {
        let bounds = Rectangle::new(Point::new(100.0, 50.0), Size::new(200.0, 200.0));
        let cursor = mouse::Cursor::Available(Point::new(90.0, 300.0));

        assert_eq!(
            relative_position(cursor, bounds),
            Some(Point::new(-10.0, 250.0))
        );
        assert_eq!(relative_position(mouse::Cursor::Unavailable, bounds), None);
    }
}
