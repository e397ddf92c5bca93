// SPDX-License-Identifier: MPL-2.0
//! Image data: decoding files into rasters and previewing them.

pub mod decode;
pub mod raster;
pub mod thumbnail;

pub use decode::{FileDecoder, RasterDecoder, IMAGE_EXTENSIONS};
pub use raster::{PixelFormat, Raster};
pub use thumbnail::Thumbnail;
