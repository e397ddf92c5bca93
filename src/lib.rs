// SPDX-License-Identifier: MPL-2.0
//! `tiffany` is a small image viewer and touch-up editor built with the Iced
//! GUI framework.
//!
//! Several images are loaded into a thumbnail list; the selected one is shown
//! on a canvas where it can be zoomed, panned, drawn on, erased and
//! area-filled. The canvas interaction core ([`canvas`], [`session`]) does
//! not depend on any widget and is tested headlessly.

pub mod app;
pub mod canvas;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod library;
pub mod media;
pub mod session;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
