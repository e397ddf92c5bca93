// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Fit**: Margins and ratios used by the fit calculator
//! - **Canvas**: Default colors, brush and scrollbar footprint
//! - **Thumbnails**: Preview size in the image list

// ==========================================================================
// Fit Defaults
// ==========================================================================

/// Total margin added around the image on each axis (half on each side).
pub const FIT_MARGIN: f32 = 20.0;

/// Fraction of the viewport a fitted image may occupy, leaving a thin border.
pub const FIT_RATIO: f32 = 0.995;

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Default pencil color.
pub const DEFAULT_FOREGROUND_COLOR: &str = "#000000";

/// Default eraser and fill color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Default brush width in pixels.
pub const DEFAULT_BRUSH_WIDTH: u32 = 1;

/// Thickness of the canvas scrollbars, removed from the viewport by
/// fit-width and fill-window.
pub const SCROLLBAR_THICKNESS: f32 = 12.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Maximum edge of a list thumbnail in pixels.
pub const THUMBNAIL_SIZE: u32 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(FIT_MARGIN >= 0.0);
    assert!(FIT_RATIO > 0.0);
    assert!(FIT_RATIO <= 1.0);
    assert!(SCROLLBAR_THICKNESS >= 0.0);
    assert!(DEFAULT_BRUSH_WIDTH > 0);
    assert!(THUMBNAIL_SIZE > 0);
};
