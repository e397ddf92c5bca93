// SPDX-License-Identifier: MPL-2.0
//! Painting strokes and fills into a raster.
//!
//! Coordinates are scene coordinates, i.e. image pixels. Anti-aliasing is
//! disabled so painting a color always writes that exact color, which keeps
//! grayscale rasters gray and lets the eraser restore the original pixels.

use crate::domain::canvas::{BrushWidth, PaintColor};
use crate::media::Raster;
use iced::{Point, Rectangle};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Stroke, Transform};

fn solid_paint(raster: &Raster, color: PaintColor) -> Paint<'static> {
    let color = raster.paint_color(color);
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = false;
    paint
}

/// Draws a straight segment with round caps and joins.
pub fn stroke_segment(
    raster: &mut Raster,
    from: Point,
    to: Point,
    color: PaintColor,
    width: BrushWidth,
) {
    let mut builder = PathBuilder::new();
    builder.move_to(from.x, from.y);
    builder.line_to(to.x, to.y);
    let Some(path) = builder.finish() else {
        return;
    };

    let paint = solid_paint(raster, color);
    #[allow(clippy::cast_precision_loss)]
    let stroke = Stroke {
        width: width.pixels() as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    raster
        .pixmap_mut()
        .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

/// Paints `rect` solid. Parts outside the raster are ignored; an empty
/// rectangle paints nothing.
pub fn fill_rect(raster: &mut Raster, rect: Rectangle, color: PaintColor) {
    // tiny-skia accepts zero extents and still covers a pixel row
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let Some(rect) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) else {
        return;
    };

    let paint = solid_paint(raster, color);
    raster
        .pixmap_mut()
        .fill_rect(rect, &paint, Transform::identity(), None);
}
