// SPDX-License-Identifier: MPL-2.0
//! GUI-independent canvas core: pointer state machine, view transform and
//! raster painting.

pub mod interaction;
pub mod paint;
pub mod transform;

pub use interaction::{CanvasMachine, CursorShape, Effect, Interaction, PointerButton, PointerEvent};
pub use transform::ViewTransform;
