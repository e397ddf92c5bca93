// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Notifications appear in the bottom-right corner of the window. Errors
//! (such as a file that cannot be decoded) stay until dismissed; other
//! severities fade out on their own.
//!
//! - [`notification`] - `Notification` data and severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, LOAD_ERROR_KEY};
pub use toast::Toast;
