// SPDX-License-Identifier: MPL-2.0
//! Pointer interaction state machine of the canvas.
//!
//! The machine only knows viewport coordinates and the selected
//! [`CanvasMode`]. Each pointer event moves it between [`Interaction`] states
//! and yields the [`Effect`]s the owner must apply (scrolling, painting,
//! zooming). Mapping to scene coordinates and touching pixels is left to the
//! owner so the machine stays a plain value.

use crate::domain::canvas::CanvasMode;
use iced::{Point, Rectangle, Size, Vector};

/// Mouse buttons the canvas distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// Pointer input in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { button: PointerButton, position: Point },
    Moved { position: Point },
    Released { button: PointerButton, position: Point },
}

/// Cursor the canvas should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    ClosedHand,
    Cross,
}

/// Drag currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Secondary-button drag scrolling the view.
    Panning { anchor: Point },
    /// Primary-button drag painting a freehand stroke.
    Drawing { anchor: Point },
    /// Primary-button drag selecting a rectangle.
    RubberBanding { origin: Point, current: Point },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Add this delta to the scroll offset.
    Scroll(Vector),
    /// Paint a segment between two viewport points.
    Stroke { from: Point, to: Point },
    /// A stroke ended; the image changed.
    StrokeFinished,
    /// Zoom so the viewport rectangle fills the view.
    ZoomTo(Rectangle),
    /// Paint the viewport rectangle with the background color.
    Fill(Rectangle),
}

/// Normalised rectangle spanned by two corners.
#[must_use]
pub fn span(a: Point, b: Point) -> Rectangle {
    Rectangle::new(
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Size::new((a.x - b.x).abs(), (a.y - b.y).abs()),
    )
}

/// Canvas mode plus the drag in progress.
#[derive(Debug, Clone, Default)]
pub struct CanvasMachine {
    mode: CanvasMode,
    interaction: Interaction,
}

impl CanvasMachine {
    #[must_use]
    pub fn new(mode: CanvasMode) -> Self {
        Self {
            mode,
            interaction: Interaction::Idle,
        }
    }

    #[must_use]
    pub fn mode(&self) -> CanvasMode {
        self.mode
    }

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Switches the primary-button tool and abandons any drag.
    pub fn set_mode(&mut self, mode: CanvasMode) {
        self.mode = mode;
        self.interaction = Interaction::Idle;
    }

    #[must_use]
    pub fn cursor(&self) -> CursorShape {
        match self.interaction {
            Interaction::Panning { .. } => CursorShape::ClosedHand,
            Interaction::Drawing { .. } => CursorShape::Cross,
            Interaction::Idle | Interaction::RubberBanding { .. } => CursorShape::Default,
        }
    }

    /// Rectangle being selected, if a rubber band is active.
    #[must_use]
    pub fn rubber_band(&self) -> Option<Rectangle> {
        match self.interaction {
            Interaction::RubberBanding { origin, current } => Some(span(origin, current)),
            _ => None,
        }
    }

    /// Applies one pointer event and returns the effects to perform, in order.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Effect> {
        let effects = match event {
            PointerEvent::Pressed { button, position } => self.press(button, position),
            PointerEvent::Moved { position } => self.motion(position),
            PointerEvent::Released { button, position } => self.release(button, position),
        };
        log::trace!("{event:?} -> {:?}", self.interaction);
        effects
    }

    fn press(&mut self, button: PointerButton, position: Point) -> Vec<Effect> {
        match button {
            PointerButton::Secondary => {
                let mut effects = Vec::new();
                if matches!(self.interaction, Interaction::Drawing { .. }) {
                    effects.push(Effect::StrokeFinished);
                }
                self.interaction = Interaction::Panning { anchor: position };
                effects
            }
            PointerButton::Primary if self.interaction == Interaction::Idle => {
                self.interaction = if self.mode.strokes() {
                    Interaction::Drawing { anchor: position }
                } else {
                    Interaction::RubberBanding {
                        origin: position,
                        current: position,
                    }
                };
                Vec::new()
            }
            PointerButton::Primary | PointerButton::Other => Vec::new(),
        }
    }

    fn motion(&mut self, position: Point) -> Vec<Effect> {
        match &mut self.interaction {
            Interaction::Idle => Vec::new(),
            Interaction::Panning { anchor } => {
                let delta = position - *anchor;
                *anchor = position;
                vec![Effect::Scroll(Vector::new(-delta.x, -delta.y))]
            }
            Interaction::Drawing { anchor } => {
                let from = *anchor;
                *anchor = position;
                vec![Effect::Stroke { from, to: position }]
            }
            Interaction::RubberBanding { current, .. } => {
                *current = position;
                Vec::new()
            }
        }
    }

    fn release(&mut self, button: PointerButton, position: Point) -> Vec<Effect> {
        match (button, self.interaction) {
            (PointerButton::Secondary, Interaction::Panning { .. }) => {
                self.interaction = Interaction::Idle;
                Vec::new()
            }
            (PointerButton::Primary, Interaction::Drawing { .. }) => {
                self.interaction = Interaction::Idle;
                vec![Effect::StrokeFinished]
            }
            (PointerButton::Primary, Interaction::RubberBanding { origin, .. }) => {
                self.interaction = Interaction::Idle;
                let rect = span(origin, position);
                match self.mode {
                    CanvasMode::Fill => vec![Effect::Fill(rect)],
                    _ => vec![Effect::ZoomTo(rect)],
                }
            }
            _ => Vec::new(),
        }
    }
}
