// SPDX-License-Identifier: MPL-2.0
//! Turning image files into rasters.
//!
//! [`RasterDecoder`] is the seam between the library and whatever decodes
//! files. [`FileDecoder`] is the production implementation: raster formats go
//! through the `image` crate, SVG documents are rendered with `resvg`.
//! Palette-indexed sources are converted to 8-bit grayscale; everything else
//! keeps its colors.

use super::raster::{PixelFormat, Raster};
use crate::error::{DecodeError, Error, Result};
use image_rs::{ImageFormat, ImageReader};
use resvg::usvg;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Image file extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
];

/// Decodes one file into a raster.
pub trait RasterDecoder {
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or decoded.
    fn decode(&self, path: &Path) -> Result<Raster>;
}

/// Decoder backed by the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl RasterDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<Raster> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let bytes = fs::read(path)?;

        if extension.eq_ignore_ascii_case("svg") {
            decode_svg(&bytes)
        } else {
            decode_raster(&bytes)
        }
    }
}

/// Decodes encoded raster bytes (PNG, JPEG, GIF, ...).
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedFormat`] when the format cannot be
/// guessed and [`DecodeError::Corrupted`] when decoding fails.
pub fn decode_raster(bytes: &[u8]) -> Result<Raster> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format().ok_or(DecodeError::UnsupportedFormat)?;
    let image = reader.decode()?;

    let pixel_format = if is_palette_indexed(bytes, format) {
        PixelFormat::Gray8
    } else {
        PixelFormat::Rgba8
    };

    Raster::from_dynamic(&image, pixel_format)
}

fn decode_svg(bytes: &[u8]) -> Result<Raster> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(Raster::from_pixmap(pixmap))
}

/// Whether the encoded image stores palette indices rather than colors.
///
/// Only the container header is inspected; the `image` crate expands
/// palettes during decoding so the decoded buffer cannot tell.
#[must_use]
pub fn is_palette_indexed(bytes: &[u8], format: ImageFormat) -> bool {
    match format {
        // IHDR color type follows signature(8) + length(4) + tag(4) + size(8) + depth(1)
        ImageFormat::Png => bytes.get(25) == Some(&3),
        ImageFormat::Gif => true,
        // BITMAPINFOHEADER bit count at offset 28, palettes up to 8 bpp
        ImageFormat::Bmp => bytes
            .get(28..30)
            .map(|b| u16::from_le_bytes([b[0], b[1]]))
            .is_some_and(|bits| bits > 0 && bits <= 8),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::codecs::png::PngEncoder;
    use image_rs::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
    use tempfile::tempdir;

    /// Smallest valid 2x1 palette PNG: one red and one white entry.
    fn palette_png() -> Vec<u8> {
        // Built by hand since the image crate cannot encode indexed PNGs.
        fn chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
            out.extend_from_slice(&(data.len() as u32).to_be_bytes());
            let start = out.len();
            out.extend_from_slice(tag);
            out.extend_from_slice(data);
            let crc = crc32(&out[start..]);
            out.extend_from_slice(&crc.to_be_bytes());
        }

        fn crc32(bytes: &[u8]) -> u32 {
            let mut crc = 0xFFFF_FFFFu32;
            for &byte in bytes {
                crc ^= u32::from(byte);
                for _ in 0..8 {
                    let mask = (crc & 1).wrapping_neg();
                    crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
                }
            }
            !crc
        }

        fn adler32(bytes: &[u8]) -> u32 {
            let (mut a, mut b) = (1u32, 0u32);
            for &byte in bytes {
                a = (a + u32::from(byte)) % 65521;
                b = (b + a) % 65521;
            }
            (b << 16) | a
        }

        let mut out = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let mut ihdr = Vec::new();
        ihdr.extend_from_slice(&2u32.to_be_bytes());
        ihdr.extend_from_slice(&1u32.to_be_bytes());
        ihdr.extend_from_slice(&[8, 3, 0, 0, 0]);
        chunk(&mut out, b"IHDR", &ihdr);
        chunk(&mut out, b"PLTE", &[255, 0, 0, 255, 255, 255]);

        // One scanline: filter byte 0, indices 0 and 1, stored uncompressed.
        let raw = [0u8, 0, 1];
        let mut zlib = vec![0x78, 0x01, 0x01];
        zlib.extend_from_slice(&(raw.len() as u16).to_le_bytes());
        zlib.extend_from_slice(&(!(raw.len() as u16)).to_le_bytes());
        zlib.extend_from_slice(&raw);
        zlib.extend_from_slice(&adler32(&raw).to_be_bytes());
        chunk(&mut out, b"IDAT", &zlib);
        chunk(&mut out, b"IEND", &[]);
        out
    }

    fn rgba_png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
            .expect("encode png");
        bytes
    }

    #[test]
    fn rgba_png_keeps_color() {
        let raster = decode_raster(&rgba_png(4, 2)).expect("png should decode");

        assert_eq!((raster.width(), raster.height()), (4, 2));
        assert_eq!(raster.format(), PixelFormat::Rgba8);
        assert_eq!(raster.pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn palette_png_becomes_grayscale() {
        let bytes = palette_png();
        assert!(is_palette_indexed(&bytes, ImageFormat::Png));

        let raster = decode_raster(&bytes).expect("palette png should decode");

        assert_eq!(raster.format(), PixelFormat::Gray8);
        // Palette red reduced to its luma
        assert_eq!(raster.pixel(0, 0), Some([54, 54, 54, 255]));
        assert_eq!(raster.pixel(1, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn truecolor_png_is_not_palette() {
        assert!(!is_palette_indexed(&rgba_png(1, 1), ImageFormat::Png));
    }

    #[test]
    fn unknown_bytes_are_unsupported() {
        match decode_raster(b"definitely not an image") {
            Err(Error::Decode(DecodeError::UnsupportedFormat)) => {}
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist.png");

        match FileDecoder.decode(&missing) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn svg_file_is_rasterized() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let raster = FileDecoder.decode(&svg_path).expect("svg should load");
        assert_eq!((raster.width(), raster.height()), (6, 3));
        assert_eq!(raster.pixel(1, 1), Some([0, 0, 255, 255]));
    }

    #[test]
    fn broken_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match FileDecoder.decode(&bad_svg_path) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }
}
