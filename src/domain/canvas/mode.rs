// SPDX-License-Identifier: MPL-2.0
//! What the primary mouse button does on the canvas.

use std::fmt;
use std::str::FromStr;

/// Canvas tool mode selected from the toolbar.
///
/// The secondary button always pans, whatever the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CanvasMode {
    /// Drag a rubber band to zoom onto it.
    #[default]
    Pointer,
    /// Freehand strokes in the foreground color.
    Draw,
    /// Freehand strokes in the background color.
    Erase,
    /// Drag a rubber band to paint it with the background color.
    Fill,
}

impl CanvasMode {
    pub const ALL: [CanvasMode; 4] = [
        CanvasMode::Pointer,
        CanvasMode::Draw,
        CanvasMode::Erase,
        CanvasMode::Fill,
    ];

    /// Whether a primary drag selects a rectangle in this mode.
    #[must_use]
    pub fn uses_rubber_band(self) -> bool {
        matches!(self, CanvasMode::Pointer | CanvasMode::Fill)
    }

    /// Whether a primary drag paints a freehand stroke in this mode.
    #[must_use]
    pub fn strokes(self) -> bool {
        matches!(self, CanvasMode::Draw | CanvasMode::Erase)
    }

    /// Stable identifier used in the settings file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CanvasMode::Pointer => "pointer",
            CanvasMode::Draw => "draw",
            CanvasMode::Erase => "erase",
            CanvasMode::Fill => "fill",
        }
    }
}

impl fmt::Display for CanvasMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanvasMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pointer" | "zoom" => Ok(CanvasMode::Pointer),
            "draw" | "pencil" => Ok(CanvasMode::Draw),
            "erase" | "eraser" => Ok(CanvasMode::Erase),
            "fill" | "area-fill" => Ok(CanvasMode::Fill),
            other => Err(format!("invalid canvas mode: {other}")),
        }
    }
}
