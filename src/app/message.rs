// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::{canvas_view, thumbnail_list, toolbar};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    Canvas(canvas_view::Message),
    List(thumbnail_list::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the open dialog; empty when cancelled.
    FilesPicked(Vec<PathBuf>),
    /// Decode the files now. Sent one frame after the status bar switched to
    /// "Reading..." so the message is visible while the batch runs.
    LoadFiles(Vec<PathBuf>),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed from `main` into the app.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override provided on the command line.
    pub lang: Option<String>,
    /// Files to open at start-up.
    pub files: Vec<PathBuf>,
}
