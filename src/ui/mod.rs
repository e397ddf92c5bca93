// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from borrowed state and emits its own `Message` type, which
//! the application maps onto session operations.
//!
//! - [`toolbar`] - File, tool, brush and zoom actions
//! - [`thumbnail_list`] - Column of previews for selecting an image
//! - [`canvas_view`] - Canvas widget forwarding pointer input to the session
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod canvas_view;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod thumbnail_list;
pub mod toolbar;
