// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and promotes
//! queued ones as space frees up.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick(Instant),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Processes a notification message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
            Message::Tick(now) => self.expire(now),
        }
    }

    fn dismiss(&mut self, id: NotificationId) {
        self.visible.retain(|toast| toast.id() != id);
        self.promote_queued();
    }

    fn expire(&mut self, now: Instant) {
        self.visible.retain(|toast| !toast.is_expired(now));
        self.promote_queued();
    }

    fn promote_queued(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(next) => self.visible.push_front(next),
                None => break,
            }
        }
    }

    /// Notifications currently on screen, newest first.
    #[must_use]
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// True when any toast is showing or queued; drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn push_displays_up_to_the_visible_cap() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::success("notification-approved"));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_promotes_a_queued_notification() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::success("notification-approved"));
        }
        let first = manager.visible().next().unwrap().id();
        manager.update(Message::Dismiss(first));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
    }

    #[test]
    fn tick_expires_old_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-approved"));
        let later = Instant::now() + Duration::from_secs(10);
        manager.update(Message::Tick(later));
        assert_eq!(manager.visible().count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-deferred"));
        manager.update(Message::Dismiss(NotificationId::new()));
        assert_eq!(manager.visible().count(), 1);
    }
}
