// SPDX-License-Identifier: MPL-2.0
//! In-memory pixel buffer for one loaded image.
//!
//! Pixels are held in a [`tiny_skia::Pixmap`] so strokes and fills can be
//! painted in place. The buffer remembers whether it represents a color or an
//! 8-bit grayscale image; grayscale buffers only ever receive gray paint.

use crate::domain::canvas::PaintColor;
use crate::error::{DecodeError, Result};
use image_rs::{DynamicImage, GenericImageView, RgbaImage};
use tiny_skia::{ColorU8, Pixmap, PixmapMut};

/// Pixel layout of the image a raster was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// 8 bits per channel color with alpha.
    #[default]
    Rgba8,
    /// 8-bit grayscale; palette-indexed sources are converted to this.
    Gray8,
}

#[derive(Clone)]
pub struct Raster {
    pixmap: Pixmap,
    format: PixelFormat,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        self.format == other.format && self.pixmap == other.pixmap
    }
}

impl Raster {
    /// Creates a raster filled with a single opaque color.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::EmptyImage`] for a zero dimension and
    /// [`DecodeError::TooLarge`] when the buffer cannot be allocated.
    pub fn filled(width: u32, height: u32, color: PaintColor, format: PixelFormat) -> Result<Self> {
        let mut raster = Self {
            pixmap: allocate(width, height)?,
            format,
        };
        let color = raster.paint_color(color);
        raster
            .pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
        Ok(raster)
    }

    /// Creates a raster from straight (non-premultiplied) RGBA bytes.
    ///
    /// For [`PixelFormat::Gray8`] each pixel is reduced to its luma.
    ///
    /// # Errors
    ///
    /// Fails when the dimensions are empty, too large, or do not match the
    /// length of `pixels`.
    pub fn from_rgba(width: u32, height: u32, pixels: &[u8], format: PixelFormat) -> Result<Self> {
        let mut pixmap = allocate(width, height)?;
        if pixels.len() != pixmap.data().len() {
            return Err(DecodeError::Corrupted(format!(
                "expected {} bytes for {}x{}, got {}",
                pixmap.data().len(),
                width,
                height,
                pixels.len()
            ))
            .into());
        }

        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(pixels.chunks_exact(4)) {
            let (r, g, b) = match format {
                PixelFormat::Rgba8 => (src[0], src[1], src[2]),
                PixelFormat::Gray8 => {
                    let l = PaintColor::rgb(src[0], src[1], src[2]).luma();
                    (l, l, l)
                }
            };
            *dst = ColorU8::from_rgba(r, g, b, src[3]).premultiply();
        }

        Ok(Self { pixmap, format })
    }

    /// Converts a decoded image into a raster of the requested format.
    ///
    /// # Errors
    ///
    /// Fails when the image has an empty dimension or is too large.
    pub fn from_dynamic(image: &DynamicImage, format: PixelFormat) -> Result<Self> {
        let (width, height) = image.dimensions();
        match format {
            PixelFormat::Rgba8 => Self::from_rgba(width, height, image.to_rgba8().as_raw(), format),
            PixelFormat::Gray8 => {
                let gray = DynamicImage::ImageLuma8(image.to_luma8());
                Self::from_rgba(width, height, gray.to_rgba8().as_raw(), format)
            }
        }
    }

    /// Wraps an already rendered pixmap (used for rasterized SVGs).
    pub(crate) fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap,
            format: PixelFormat::Rgba8,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Straight RGBA value of one pixel, `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // The pixmap only bounds-checks the flat index
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Straight RGBA bytes of the whole buffer, row-major.
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            out.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        out
    }

    /// Copy of the buffer as an `image` crate RGBA image.
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        // Length always matches width * height * 4
        RgbaImage::from_raw(self.width(), self.height(), self.to_rgba())
            .unwrap_or_else(|| RgbaImage::new(self.width(), self.height()))
    }

    /// The color actually written when painting `color` into this raster.
    ///
    /// Grayscale rasters receive the color's gray equivalent.
    #[must_use]
    pub fn paint_color(&self, color: PaintColor) -> PaintColor {
        match self.format {
            PixelFormat::Rgba8 => color,
            PixelFormat::Gray8 => color.to_gray(),
        }
    }

    /// Exclusive access to the pixels for painting.
    pub(crate) fn pixmap_mut(&mut self) -> PixmapMut<'_> {
        self.pixmap.as_mut()
    }
}

fn allocate(width: u32, height: u32) -> Result<Pixmap> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage.into());
    }
    Pixmap::new(width, height).ok_or_else(|| DecodeError::TooLarge { width, height }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{GrayImage, Luma, Rgba};

    #[test]
    fn filled_raster_reports_color() {
        let raster = Raster::filled(3, 2, PaintColor::rgb(10, 20, 30), PixelFormat::Rgba8)
            .expect("raster");

        assert_eq!((raster.width(), raster.height()), (3, 2));
        assert_eq!(raster.pixel(2, 1), Some([10, 20, 30, 255]));
        assert_eq!(raster.pixel(3, 0), None);
    }

    #[test]
    fn pixel_past_row_end_does_not_wrap() {
        let mut pixels = vec![255_u8; 3 * 2 * 4];
        pixels[12..16].copy_from_slice(&[0, 0, 0, 255]);
        let raster = Raster::from_rgba(3, 2, &pixels, PixelFormat::Rgba8).expect("raster");

        assert_eq!(raster.pixel(0, 1), Some([0, 0, 0, 255]));
        assert_eq!(raster.pixel(3, 0), None);
        assert_eq!(raster.pixel(0, 2), None);
    }

    #[test]
    fn gray_raster_receives_gray_paint() {
        let raster =
            Raster::filled(1, 1, PaintColor::rgb(255, 0, 0), PixelFormat::Gray8).expect("raster");
        assert_eq!(raster.pixel(0, 0), Some([54, 54, 54, 255]));
    }

    #[test]
    fn empty_dimensions_are_rejected() {
        match Raster::filled(0, 4, PaintColor::WHITE, PixelFormat::Rgba8) {
            Err(Error::Decode(DecodeError::EmptyImage)) => {}
            other => panic!("expected EmptyImage, got {other:?}"),
        }
    }

    #[test]
    fn from_rgba_rejects_short_buffers() {
        let result = Raster::from_rgba(2, 2, &[0; 8], PixelFormat::Rgba8);
        assert!(matches!(result, Err(Error::Decode(DecodeError::Corrupted(_)))));
    }

    #[test]
    fn rgba_round_trip_keeps_opaque_pixels() {
        let image = RgbaImage::from_fn(4, 3, |x, y| Rgba([x as u8 * 40, y as u8 * 60, 7, 255]));
        let raster = Raster::from_dynamic(&DynamicImage::ImageRgba8(image.clone()), PixelFormat::Rgba8)
            .expect("raster");

        assert_eq!(raster.to_rgba_image(), image);
    }

    #[test]
    fn gray_source_keeps_levels() {
        let image = GrayImage::from_fn(2, 2, |x, y| Luma([(x * 100 + y * 50) as u8]));
        let raster =
            Raster::from_dynamic(&DynamicImage::ImageLuma8(image), PixelFormat::Gray8).expect("raster");

        assert_eq!(raster.format(), PixelFormat::Gray8);
        assert_eq!(raster.pixel(1, 1), Some([150, 150, 150, 255]));
    }
}
