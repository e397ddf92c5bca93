// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded at build time from `assets/i18n/`.
//!
//! # Locale resolution
//!
//! 1. `--lang` command line argument
//! 2. `[general] language` in the settings file
//! 3. Operating system locale
//! 4. `en-US`

pub mod fluent;

pub use fluent::I18n;
