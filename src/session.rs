// SPDX-License-Identifier: MPL-2.0
//! Editing session: the image list plus everything the canvas needs.
//!
//! [`Session`] is the single owner of the loaded images, the canvas state
//! machine, the view transform and the tool settings. Every operation runs to
//! completion and returns the [`SessionEvent`]s it produced, so the shell only
//! redraws once the pixels, the list entry and the rendition agree.
//!
//! Painting borrows the selected entry's raster in place; after each
//! mutation the rendition is rebuilt from the same pixels, and once an edit
//! is committed the entry's thumbnail is regenerated.

use crate::canvas::interaction::{CanvasMachine, CursorShape, Effect, Interaction, PointerEvent};
use crate::canvas::transform::{self, ViewTransform};
use crate::canvas::paint;
use crate::config::CanvasConfig;
use crate::domain::canvas::{BrushWidth, CanvasMode, PaintColor};
use crate::library::{ImageList, LoadProgress, LoadReport};
use crate::media::{Raster, RasterDecoder};
use iced::widget::image::Handle;
use iced::{Rectangle, Size};
use std::path::Path;

/// Notifications produced by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Pixels of the selected image were modified.
    ImageChanged,
    /// The view scale changed.
    ZoomChanged,
    /// A different image (or none) is now shown on the canvas.
    SelectionRendered,
}

/// Drawable copy of the selected raster.
#[derive(Debug, Clone)]
pub struct Rendition {
    pub handle: Handle,
    /// Image size in scene units.
    pub size: Size,
}

impl Rendition {
    fn from_raster(raster: &Raster) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let size = Size::new(raster.width() as f32, raster.height() as f32);
        Self {
            handle: Handle::from_rgba(raster.width(), raster.height(), raster.to_rgba()),
            size,
        }
    }

    /// Image bounds in scene coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(iced::Point::ORIGIN, self.size)
    }
}

#[derive(Debug)]
pub struct Session {
    list: ImageList,
    machine: CanvasMachine,
    transform: ViewTransform,
    foreground: PaintColor,
    background: PaintColor,
    brush: BrushWidth,
    rendition: Option<Rendition>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl Session {
    /// Creates an empty session with the tool settings from `settings`.
    #[must_use]
    pub fn new(settings: &CanvasConfig) -> Self {
        Self {
            list: ImageList::new(),
            machine: CanvasMachine::new(settings.mode()),
            transform: ViewTransform::default(),
            foreground: settings.foreground(),
            background: settings.background(),
            brush: settings.brush(),
            rendition: None,
        }
    }

    #[must_use]
    pub fn list(&self) -> &ImageList {
        &self.list
    }

    #[must_use]
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    #[must_use]
    pub fn rendition(&self) -> Option<&Rendition> {
        self.rendition.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> CanvasMode {
        self.machine.mode()
    }

    #[must_use]
    pub fn cursor(&self) -> CursorShape {
        self.machine.cursor()
    }

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.machine.interaction()
    }

    /// Active rubber band in viewport coordinates.
    #[must_use]
    pub fn rubber_band(&self) -> Option<Rectangle> {
        self.machine.rubber_band()
    }

    #[must_use]
    pub fn brush(&self) -> BrushWidth {
        self.brush
    }

    #[must_use]
    pub fn foreground(&self) -> PaintColor {
        self.foreground
    }

    #[must_use]
    pub fn background(&self) -> PaintColor {
        self.background
    }

    pub fn set_foreground(&mut self, color: PaintColor) {
        self.foreground = color;
    }

    pub fn set_background(&mut self, color: PaintColor) {
        self.background = color;
    }

    pub fn set_brush(&mut self, brush: BrushWidth) {
        log::debug!("Brush width set to {}px", brush.pixels());
        self.brush = brush;
    }

    /// Selects the primary-button tool and abandons any drag in progress.
    pub fn set_mode(&mut self, mode: CanvasMode) {
        log::debug!("Canvas mode set to {mode}");
        self.machine.set_mode(mode);
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.rendition.is_some() && self.transform.factor().can_zoom_in()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.rendition.is_some() && self.transform.factor().can_zoom_out()
    }

    /// Records the canvas size. The first known size refits the selection,
    /// which may have been rendered before the canvas was laid out.
    pub fn set_viewport(&mut self, viewport: Size) -> Vec<SessionEvent> {
        let previous = self.transform.viewport();
        if previous == viewport {
            return Vec::new();
        }
        self.transform.set_viewport(viewport);

        let first_layout = previous.width <= 0.0 || previous.height <= 0.0;
        if first_layout && self.rendition.is_some() {
            self.fit_to_window()
        } else {
            Vec::new()
        }
    }

    /// Decodes `paths` into new list entries.
    ///
    /// The very first image ever loaded becomes the selection.
    pub fn load_files<P, F>(
        &mut self,
        paths: &[P],
        decoder: &dyn RasterDecoder,
        progress: F,
    ) -> (LoadReport, Vec<SessionEvent>)
    where
        P: AsRef<Path>,
        F: FnMut(LoadProgress),
    {
        let was_empty = self.list.is_empty();
        let report = self.list.load_batch(paths, decoder, progress);
        log::info!(
            "Loaded {} image(s), {} failure(s)",
            report.added.len(),
            report.failures.len()
        );

        let events = if was_empty && !self.list.is_empty() {
            self.select(self.list.find_label("1"))
        } else {
            Vec::new()
        };
        (report, events)
    }

    /// Shows the entry at `index` fitted to the window, or clears the canvas.
    pub fn select(&mut self, index: Option<usize>) -> Vec<SessionEvent> {
        let selected = self.list.set_selected(index);
        self.rendition = None;

        let Some(entry) = selected.and_then(|i| self.list.get(i)) else {
            log::debug!("Selection cleared");
            return vec![SessionEvent::SelectionRendered];
        };

        log::info!("Selected entry {} ({})", entry.label(), entry.path().display());
        let rendition = Rendition::from_raster(entry.raster());
        self.transform.set_scene(transform::scene_rect(rendition.size));
        self.rendition = Some(rendition);

        let mut events = vec![SessionEvent::SelectionRendered];
        events.extend(self.fit_to_window());
        events
    }

    fn image_size(&self) -> Option<Size> {
        self.rendition.as_ref().map(|r| r.size)
    }

    fn fit_with(&mut self, fit: impl FnOnce(&mut ViewTransform, Size)) -> Vec<SessionEvent> {
        let Some(size) = self.image_size() else {
            return Vec::new();
        };
        fit(&mut self.transform, size);
        log::debug!("View scale {:.3}", self.transform.scale());
        vec![SessionEvent::ZoomChanged]
    }

    pub fn fit_to_window(&mut self) -> Vec<SessionEvent> {
        self.fit_with(ViewTransform::fit_to_window)
    }

    pub fn fit_width(&mut self) -> Vec<SessionEvent> {
        self.fit_with(ViewTransform::fit_width)
    }

    pub fn fill_window(&mut self) -> Vec<SessionEvent> {
        self.fit_with(ViewTransform::fill_window)
    }

    pub fn zoom_in(&mut self) -> Vec<SessionEvent> {
        self.zoom_step(ViewTransform::zoom_in)
    }

    pub fn zoom_out(&mut self) -> Vec<SessionEvent> {
        self.zoom_step(ViewTransform::zoom_out)
    }

    fn zoom_step(&mut self, step: fn(&mut ViewTransform) -> bool) -> Vec<SessionEvent> {
        if self.rendition.is_none() || !step(&mut self.transform) {
            return Vec::new();
        }
        log::debug!("Zoom factor {:.3}", self.transform.factor().value());
        vec![SessionEvent::ZoomChanged]
    }

    /// Feeds a canvas pointer event through the state machine and applies
    /// the resulting effects.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<SessionEvent> {
        let effects = self.machine.handle(event);
        let mut events = Vec::new();
        for effect in effects {
            events.extend(self.apply(effect));
        }
        events
    }

    fn apply(&mut self, effect: Effect) -> Vec<SessionEvent> {
        if self.rendition.is_none() {
            return Vec::new();
        }

        match effect {
            Effect::Scroll(delta) => {
                self.transform.scroll_by(delta);
                Vec::new()
            }
            Effect::Stroke { from, to } => {
                let from = self.transform.viewport_to_scene(from);
                let to = self.transform.viewport_to_scene(to);
                let color = match self.machine.mode() {
                    CanvasMode::Erase => self.background,
                    _ => self.foreground,
                };
                let brush = self.brush;
                self.paint(|raster| paint::stroke_segment(raster, from, to, color, brush));
                Vec::new()
            }
            Effect::StrokeFinished => self.commit(),
            Effect::ZoomTo(rect) => {
                let target = self.transform.viewport_rect_to_scene(rect);
                if self.transform.fit_rect(target) {
                    log::debug!("Zoomed onto {target:?}");
                    vec![SessionEvent::ZoomChanged]
                } else {
                    Vec::new()
                }
            }
            Effect::Fill(rect) => {
                let target = self.transform.viewport_rect_to_scene(rect);
                let color = self.background;
                self.paint(|raster| paint::fill_rect(raster, target, color));
                self.commit()
            }
        }
    }

    /// Runs `op` on the selected raster, then replaces the rendition.
    fn paint(&mut self, op: impl FnOnce(&mut Raster)) {
        let Some(raster) = self.list.selected_raster_mut() else {
            return;
        };
        op(raster);

        // Remove the stale rendition before adding the new one
        self.rendition = None;
        self.rendition = self.list.selected_entry().map(|e| Rendition::from_raster(e.raster()));
    }

    /// Publishes the edit made to the selected raster.
    fn commit(&mut self) -> Vec<SessionEvent> {
        let Some(index) = self.list.selected() else {
            return Vec::new();
        };
        self.list.refresh_thumbnail(index);
        vec![SessionEvent::ImageChanged]
    }
}
