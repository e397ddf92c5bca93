// SPDX-License-Identifier: MPL-2.0
//! List previews.

use super::raster::Raster;
use crate::config::THUMBNAIL_SIZE;
use iced::widget::image::Handle;
use image_rs::imageops::{self, FilterType};

/// Scaled-down copy of a raster shown in the image list.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl Thumbnail {
    /// Renders a smoothed preview that fits inside the thumbnail box.
    #[must_use]
    pub fn render(raster: &Raster) -> Self {
        let (width, height) = fit_within(raster.width(), raster.height(), THUMBNAIL_SIZE);
        let preview = imageops::resize(&raster.to_rgba_image(), width, height, FilterType::Triangle);

        Self {
            handle: Handle::from_rgba(width, height, preview.into_raw()),
            width,
            height,
        }
    }
}

/// Largest size with the same aspect ratio that fits in a `bound` square.
///
/// Never returns a zero dimension.
#[must_use]
pub fn fit_within(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (bound, bound);
    }
    if width >= height {
        let scaled = u64::from(height) * u64::from(bound) / u64::from(width);
        (bound, u32::try_from(scaled).unwrap_or(bound).max(1))
    } else {
        let scaled = u64::from(width) * u64::from(bound) / u64::from(height);
        (u32::try_from(scaled).unwrap_or(bound).max(1), bound)
    }
}
