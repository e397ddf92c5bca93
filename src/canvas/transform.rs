// SPDX-License-Identifier: MPL-2.0
//! View transform and fit calculator.
//!
//! The canvas shows a *scene* whose coordinates are image pixels. The scene
//! rectangle of an image is the image bounds grown by half the fit margin on
//! every side. The transform maps it into the *viewport* (widget-local logical
//! pixels) with a uniform scale:
//!
//! - on an axis where the scaled scene is smaller than the viewport, the
//!   scene is centred;
//! - otherwise the scroll offset selects the visible part, clamped to the
//!   scrollable range.
//!
//! Fit operations reset the relative [`ZoomFactor`] to its baseline. Zoom
//! steps multiply the absolute scale and the factor together and keep the
//! scene point under the viewport centre in place.

use crate::config::{FIT_MARGIN, FIT_RATIO, SCROLLBAR_THICKNESS};
use crate::domain::canvas::{zoom_bounds, ZoomFactor};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size, Vector};

/// Scene rectangle surrounding an image of the given size.
#[must_use]
pub fn scene_rect(image: Size) -> Rectangle {
    let half = FIT_MARGIN / 2.0;
    Rectangle::new(
        Point::new(-half, -half),
        Size::new(image.width + FIT_MARGIN, image.height + FIT_MARGIN),
    )
}

/// Scale at which the padded image fits entirely in the viewport.
#[must_use]
pub fn fit_window_scale(viewport: Size, image: Size) -> f32 {
    let (by_width, by_height) = axis_ratios(viewport, image);
    by_width.min(by_height)
}

/// Scale at which the padded image fills the viewport width, leaving room
/// for a vertical scrollbar.
#[must_use]
pub fn fit_width_scale(viewport: Size, image: Size) -> f32 {
    let available = (viewport.width - SCROLLBAR_THICKNESS).max(0.0);
    FIT_RATIO * available / (image.width + FIT_MARGIN)
}

/// Scale at which the padded image covers the viewport, overflowing on one
/// axis. Both scrollbar footprints are removed first.
#[must_use]
pub fn fill_window_scale(viewport: Size, image: Size) -> f32 {
    let available = Size::new(
        (viewport.width - SCROLLBAR_THICKNESS).max(0.0),
        (viewport.height - SCROLLBAR_THICKNESS).max(0.0),
    );
    let (by_width, by_height) = axis_ratios(available, image);
    by_width.max(by_height)
}

fn axis_ratios(viewport: Size, image: Size) -> (f32, f32) {
    (
        FIT_RATIO * viewport.width / (image.width + FIT_MARGIN),
        FIT_RATIO * viewport.height / (image.height + FIT_MARGIN),
    )
}

/// Uniform scene-to-viewport transform of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    scale: f32,
    factor: ZoomFactor,
    offset: AbsoluteOffset,
    viewport: Size,
    scene: Rectangle,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            factor: ZoomFactor::baseline(),
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            viewport: Size::ZERO,
            scene: Rectangle::new(Point::ORIGIN, Size::ZERO),
        }
    }
}

impl ViewTransform {
    /// Absolute scale: viewport pixels per image pixel.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Zoom factor relative to the last fit.
    #[must_use]
    pub fn factor(&self) -> ZoomFactor {
        self.factor
    }

    #[must_use]
    pub fn offset(&self) -> AbsoluteOffset {
        self.offset
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn scene(&self) -> Rectangle {
        self.scene
    }

    /// Size of the whole scene once scaled into the viewport.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.scene.width * self.scale, self.scene.height * self.scale)
    }

    /// Largest scroll offset on each axis.
    #[must_use]
    pub fn max_offset(&self) -> AbsoluteOffset {
        let content = self.content_size();
        AbsoluteOffset {
            x: (content.width - self.viewport.width).max(0.0),
            y: (content.height - self.viewport.height).max(0.0),
        }
    }

    /// Records a new viewport size, keeping the scroll offset in range.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.clamp_offset();
    }

    /// Shows a new scene from its top-left corner, keeping the scale.
    pub fn set_scene(&mut self, scene: Rectangle) {
        self.scene = scene;
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Translation applied after scaling on each axis.
    fn translation(&self) -> Vector {
        let content = self.content_size();
        let axis = |content: f32, viewport: f32, offset: f32| {
            if content < viewport {
                (viewport - content) / 2.0
            } else {
                -offset
            }
        };
        Vector::new(
            axis(content.width, self.viewport.width, self.offset.x),
            axis(content.height, self.viewport.height, self.offset.y),
        )
    }

    #[must_use]
    pub fn scene_to_viewport(&self, point: Point) -> Point {
        let t = self.translation();
        Point::new(
            (point.x - self.scene.x) * self.scale + t.x,
            (point.y - self.scene.y) * self.scale + t.y,
        )
    }

    #[must_use]
    pub fn viewport_to_scene(&self, point: Point) -> Point {
        let t = self.translation();
        Point::new(
            (point.x - t.x) / self.scale + self.scene.x,
            (point.y - t.y) / self.scale + self.scene.y,
        )
    }

    /// Maps a viewport rectangle into scene coordinates.
    #[must_use]
    pub fn viewport_rect_to_scene(&self, rect: Rectangle) -> Rectangle {
        let top_left = self.viewport_to_scene(rect.position());
        Rectangle::new(
            top_left,
            Size::new(rect.width / self.scale, rect.height / self.scale),
        )
    }

    /// Where a scene rectangle lands in the viewport.
    #[must_use]
    pub fn scene_rect_to_viewport(&self, rect: Rectangle) -> Rectangle {
        let top_left = self.scene_to_viewport(rect.position());
        Rectangle::new(
            top_left,
            Size::new(rect.width * self.scale, rect.height * self.scale),
        )
    }

    /// Scrolls by `delta` viewport pixels, clamped to the scrollable range.
    pub fn scroll_by(&mut self, delta: Vector) {
        self.offset.x += delta.x;
        self.offset.y += delta.y;
        self.clamp_offset();
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        self.offset.x = self.offset.x.clamp(0.0, max.x);
        self.offset.y = self.offset.y.clamp(0.0, max.y);
    }

    /// Scrolls so that `point` (scene) sits at the viewport centre, as far
    /// as the scrollable range allows.
    pub fn center_on(&mut self, point: Point) {
        self.offset = AbsoluteOffset {
            x: (point.x - self.scene.x) * self.scale - self.viewport.width / 2.0,
            y: (point.y - self.scene.y) * self.scale - self.viewport.height / 2.0,
        };
        self.clamp_offset();
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    /// Changes the scale while keeping the scene point under the viewport
    /// centre in place.
    fn rescale_about_center(&mut self, scale: f32) {
        let anchor = self.viewport_to_scene(self.viewport_center());
        self.scale = scale;
        self.center_on(anchor);
    }

    fn apply_fit(&mut self, scale: f32) {
        if scale.is_finite() && scale > 0.0 {
            self.rescale_about_center(scale);
            self.factor = ZoomFactor::baseline();
        }
    }

    /// Fits the padded image inside the viewport and resets the zoom factor.
    pub fn fit_to_window(&mut self, image: Size) {
        self.apply_fit(fit_window_scale(self.viewport, image));
    }

    /// Fits the padded image width to the viewport and resets the zoom factor.
    pub fn fit_width(&mut self, image: Size) {
        self.apply_fit(fit_width_scale(self.viewport, image));
    }

    /// Fills the viewport with the padded image and resets the zoom factor.
    pub fn fill_window(&mut self, image: Size) {
        self.apply_fit(fill_window_scale(self.viewport, image));
    }

    /// One zoom-in step. Returns `false` when the factor is at its bound.
    pub fn zoom_in(&mut self) -> bool {
        self.step(self.factor.zoomed_in(), zoom_bounds::IN_STEP)
    }

    /// One zoom-out step. Returns `false` when the factor is at its bound.
    pub fn zoom_out(&mut self) -> bool {
        self.step(self.factor.zoomed_out(), zoom_bounds::OUT_STEP)
    }

    fn step(&mut self, next: Option<ZoomFactor>, multiplier: f32) -> bool {
        match next {
            Some(factor) => {
                self.factor = factor;
                self.rescale_about_center(self.scale * multiplier);
                true
            }
            None => false,
        }
    }

    /// Shows `rect` (scene) as large as possible with its aspect ratio kept,
    /// centred in the viewport. The zoom factor is left untouched.
    ///
    /// Returns `false` without changing anything for a degenerate rectangle
    /// or an empty viewport.
    pub fn fit_rect(&mut self, rect: Rectangle) -> bool {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return false;
        }
        let scale = (self.viewport.width / rect.width).min(self.viewport.height / rect.height);
        if !scale.is_finite() || scale <= 0.0 {
            return false;
        }
        self.scale = scale;
        self.center_on(rect.center());
        true
    }
}
