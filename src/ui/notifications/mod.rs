// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Dispositions from the review session and configuration warnings surface
//! here. Nothing downstream depends on a toast being seen; pushes are
//! fire-and-forget.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view;
