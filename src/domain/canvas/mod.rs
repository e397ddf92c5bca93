// SPDX-License-Identifier: MPL-2.0
//! Canvas domain types.
//!
//! - [`CanvasMode`]: what the primary button does
//! - [`ZoomFactor`]: zoom relative to the last fit
//! - [`BrushWidth`]: pencil/eraser width
//! - [`PaintColor`]: stroke and fill colors

pub mod mode;
pub mod newtypes;

pub use mode::CanvasMode;
pub use newtypes::{zoom_bounds, BrushWidth, PaintColor, ZoomFactor};
