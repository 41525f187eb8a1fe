// SPDX-License-Identifier: MPL-2.0
//! Interactive review session over an ordered queue of items.
//!
//! The session pages through a fixed-length list with a clamped cursor and
//! records one of three dispositions per item. Dispositions are reported to
//! the host as [`Event`]s; the session itself never mutates the queue and
//! never remembers which items were already dispositioned, so revisiting an
//! item via Previous shows it again with cleared feedback.

mod state;
mod view;

pub use state::State;
pub use view::{view, ViewContext};

/// Messages emitted by the review session widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    FeedbackChanged(String),
    Approve,
    Reject,
    Defer,
}

/// Events propagated to the parent application.
///
/// Hosts consume these fire-and-forget; there is no acknowledgment path
/// back into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Approved { id: String },
    Rejected { id: String, feedback: String },
    Deferred { id: String },
}

/// Process a review session message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Next => {
            state.next();
            Event::None
        }
        Message::Previous => {
            state.previous();
            Event::None
        }
        Message::FeedbackChanged(feedback) => {
            state.set_feedback(feedback);
            Event::None
        }
        Message::Approve => state
            .approve()
            .map(|id| Event::Approved { id })
            .unwrap_or(Event::None),
        Message::Reject => state
            .reject()
            .map(|(id, feedback)| Event::Rejected { id, feedback })
            .unwrap_or(Event::None),
        Message::Defer => state
            .defer()
            .map(|id| Event::Deferred { id })
            .unwrap_or(Event::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReviewItem, ReviewItemKind};

    fn item(id: &str) -> ReviewItem {
        ReviewItem {
            id: id.to_string(),
            kind: ReviewItemKind::Seed,
            title: format!("Item {id}"),
            content: "content".to_string(),
            author: "author".to_string(),
            submitted_at: "now".to_string(),
        }
    }

    fn session(n: usize) -> State {
        State::new((0..n).map(|i| item(&format!("r{i}"))).collect())
    }

    #[test]
    fn approve_reports_the_current_item_id() {
        let mut state = session(3);
        let event = update(&mut state, Message::Approve);
        assert_eq!(
            event,
            Event::Approved {
                id: "r0".to_string()
            }
        );
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn reject_carries_the_feedback_text() {
        let mut state = session(2);
        let _ = update(&mut state, Message::FeedbackChanged("too vague".to_string()));
        let event = update(&mut state, Message::Reject);
        assert_eq!(
            event,
            Event::Rejected {
                id: "r0".to_string(),
                feedback: "too vague".to_string()
            }
        );
        assert!(state.feedback().is_empty());
    }

    #[test]
    fn defer_advances_like_next() {
        let mut state = session(2);
        let event = update(&mut state, Message::Defer);
        assert_eq!(
            event,
            Event::Deferred {
                id: "r0".to_string()
            }
        );
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn navigation_messages_emit_no_event() {
        let mut state = session(3);
        assert_eq!(update(&mut state, Message::Next), Event::None);
        assert_eq!(update(&mut state, Message::Previous), Event::None);
    }

    #[test]
    fn empty_session_swallows_dispositions() {
        let mut state = session(0);
        assert_eq!(update(&mut state, Message::Approve), Event::None);
        assert_eq!(update(&mut state, Message::Reject), Event::None);
        assert_eq!(update(&mut state, Message::Defer), Event::None);
    }
}
