// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation acknowledged (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }
}

/// A notification to be displayed to the user.
///
/// `message_key` is an i18n key; `detail` is an optional literal appended
/// verbatim (e.g. the title of the item that was dispositioned).
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    detail: Option<String>,
    created_at: Instant,
}

impl Notification {
    fn new(severity: Severity, message_key: &str) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.to_string(),
            detail: None,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn success(message_key: &str) -> Self {
        Self::new(Severity::Success, message_key)
    }

    #[must_use]
    pub fn info(message_key: &str) -> Self {
        Self::new(Severity::Info, message_key)
    }

    #[must_use]
    pub fn warning(message_key: &str) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Attaches a literal detail string rendered after the localized message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Whether the notification has outlived its display window.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.severity.auto_dismiss_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(NotificationId::new(), NotificationId::new());
    }

    #[test]
    fn warnings_linger_longer_than_successes() {
        assert!(
            Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration()
        );
    }

    #[test]
    fn fresh_notification_is_not_expired() {
        let toast = Notification::success("notification-approved");
        assert!(!toast.is_expired(Instant::now()));
    }

    #[test]
    fn notification_expires_after_its_window() {
        let toast = Notification::success("notification-approved");
        let later = Instant::now() + Duration::from_secs(10);
        assert!(toast.is_expired(later));
    }

    #[test]
    fn detail_is_carried_through() {
        let toast = Notification::info("notification-deferred").with_detail("Q4 learning report");
        assert_eq!(toast.detail(), Some("Q4 learning report"));
    }
}
