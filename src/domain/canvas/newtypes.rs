// SPDX-License-Identifier: MPL-2.0
//! Canvas newtypes.
//!
//! Type-safe wrappers for the values the canvas works with: zoom factor,
//! brush width and paint color.

// =============================================================================
// Zoom Factor Bounds
// =============================================================================

/// Zoom factor bounds and multipliers.
///
/// The factor is relative to the last fit operation (1.0 = fit baseline),
/// not an absolute magnification.
pub mod zoom_bounds {
    /// Smallest factor from which zooming out is still allowed.
    pub const MIN: f32 = 0.2;
    /// Largest factor from which zooming in is still allowed.
    pub const MAX: f32 = 5.0;
    /// Factor right after a fit operation.
    pub const BASELINE: f32 = 1.0;
    /// Multiplier applied by one zoom-in step.
    pub const IN_STEP: f32 = 1.25;
    /// Multiplier applied by one zoom-out step.
    pub const OUT_STEP: f32 = 0.8;
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Zoom factor relative to the fit baseline.
///
/// Unlike a clamped percentage, the factor is never clamped: a step is either
/// allowed (and applied in full) or refused. This keeps `n` zoom-in steps
/// exactly equal to `1.25^n` for every reachable `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Returns the factor right after a fit operation.
    #[must_use]
    pub fn baseline() -> Self {
        Self(zoom_bounds::BASELINE)
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the factor as a display percentage (1.0 → 100).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Whether one more zoom-in step is allowed.
    #[must_use]
    pub fn can_zoom_in(self) -> bool {
        self.0 < zoom_bounds::MAX
    }

    /// Whether one more zoom-out step is allowed.
    #[must_use]
    pub fn can_zoom_out(self) -> bool {
        self.0 > zoom_bounds::MIN
    }

    /// Applies one zoom-in step, or `None` when the upper bound was reached.
    #[must_use]
    pub fn zoomed_in(self) -> Option<Self> {
        self.can_zoom_in()
            .then(|| Self(self.0 * zoom_bounds::IN_STEP))
    }

    /// Applies one zoom-out step, or `None` when the lower bound was reached.
    #[must_use]
    pub fn zoomed_out(self) -> Option<Self> {
        self.can_zoom_out()
            .then(|| Self(self.0 * zoom_bounds::OUT_STEP))
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::baseline()
    }
}

// =============================================================================
// BrushWidth
// =============================================================================

/// Stroke width used by the pencil and the eraser.
///
/// Only a small fixed set of widths is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrushWidth {
    #[default]
    Px1,
    Px4,
    Px8,
    Px12,
}

impl BrushWidth {
    /// Every available width, thinnest first.
    pub const ALL: [BrushWidth; 4] = [
        BrushWidth::Px1,
        BrushWidth::Px4,
        BrushWidth::Px8,
        BrushWidth::Px12,
    ];

    /// Width in image pixels.
    #[must_use]
    pub fn pixels(self) -> u32 {
        match self {
            BrushWidth::Px1 => 1,
            BrushWidth::Px4 => 4,
            BrushWidth::Px8 => 8,
            BrushWidth::Px12 => 12,
        }
    }

    /// Returns the available width closest to `pixels`.
    ///
    /// Ties resolve to the thinner width.
    #[must_use]
    pub fn nearest(pixels: u32) -> Self {
        let mut best = BrushWidth::Px1;
        for width in Self::ALL {
            if width.pixels().abs_diff(pixels) < best.pixels().abs_diff(pixels) {
                best = width;
            }
        }
        best
    }
}

// =============================================================================
// PaintColor
// =============================================================================

/// Opaque sRGB color used for strokes and fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaintColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaintColor {
    pub const BLACK: PaintColor = PaintColor::rgb(0, 0, 0);
    pub const WHITE: PaintColor = PaintColor::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional, case-insensitive).
    #[must_use]
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Luma of the color with the Rec. 709 weights used by the grayscale
    /// conversion of decoded images.
    #[must_use]
    pub fn luma(self) -> u8 {
        let weighted = 2126 * u32::from(self.r) + 7152 * u32::from(self.g) + 722 * u32::from(self.b);
        // Max is 255 * 10000 / 10000, always fits in u8
        #[allow(clippy::cast_possible_truncation)]
        let luma = ((weighted + 5000) / 10000) as u8;
        luma
    }

    /// Gray color with the same luma.
    #[must_use]
    pub fn to_gray(self) -> Self {
        let l = self.luma();
        Self::rgb(l, l, l)
    }
}
