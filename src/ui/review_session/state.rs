// SPDX-License-Identifier: MPL-2.0
//! Review session cursor state.

use crate::domain::ReviewItem;

/// Cursor into an ordered, fixed-length review queue.
///
/// The cursor clamps at both ends; there is no wraparound. Dispositioned
/// items stay in the list, and the session keeps no record of which indices
/// were already handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    items: Vec<ReviewItem>,
    current_index: usize,
    feedback: String,
}

impl State {
    /// Creates a session positioned on the first item.
    #[must_use]
    pub fn new(items: Vec<ReviewItem>) -> Self {
        Self {
            items,
            current_index: 0,
            feedback: String::new(),
        }
    }

    /// The item under the cursor, or `None` when the queue is empty.
    #[must_use]
    pub fn current_item(&self) -> Option<&ReviewItem> {
        self.items.get(self.current_index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// The full queue, in order. Dispositioned items are never removed.
    #[must_use]
    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.items.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Replaces the transient feedback text for the current item.
    pub fn set_feedback(&mut self, feedback: String) {
        self.feedback = feedback;
    }

    /// Moves to the next item; no-op at the last index.
    pub fn next(&mut self) {
        if self.has_next() {
            self.current_index += 1;
        }
    }

    /// Moves to the previous item; no-op at index 0.
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.current_index -= 1;
        }
    }

    /// Approves the current item, returning its id.
    ///
    /// Advances like [`next`](Self::next) and clears feedback. Returns
    /// `None` on an empty queue.
    pub fn approve(&mut self) -> Option<String> {
        let id = self.current_item()?.id.clone();
        self.advance_after_disposition();
        Some(id)
    }

    /// Rejects the current item, returning its id and the feedback text.
    pub fn reject(&mut self) -> Option<(String, String)> {
        let id = self.current_item()?.id.clone();
        let feedback = std::mem::take(&mut self.feedback);
        self.advance_after_disposition();
        Some((id, feedback))
    }

    /// Defers the current item, returning its id.
    pub fn defer(&mut self) -> Option<String> {
        let id = self.current_item()?.id.clone();
        self.advance_after_disposition();
        Some(id)
    }

    fn advance_after_disposition(&mut self) {
        if self.has_next() {
            self.current_index += 1;
        }
        self.feedback.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReviewItemKind;

    fn item(id: &str) -> ReviewItem {
        ReviewItem {
            id: id.to_string(),
            kind: ReviewItemKind::Insight,
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
    fn new_session_starts_at_the_first_item() {
        let state = session(3);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_item().unwrap().id, "r0");
        assert!(state.feedback().is_empty());
    }

    #[test]
    fn empty_session_has_no_current_item() {
        let state = session(0);
        assert!(state.is_empty());
        assert!(state.current_item().is_none());
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn previous_at_index_zero_is_a_no_op() {
        let mut state = session(3);
        state.previous();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn next_at_last_index_is_a_no_op() {
        let mut state = session(2);
        state.next();
        assert_eq!(state.current_index(), 1);
        state.next();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn cursor_never_exceeds_last_index_over_any_disposition_sequence() {
        // For N dispositions on an N-item queue the cursor lands on
        // min(0 + N, N - 1) and stays there.
        for n in 1..=5 {
            let mut state = session(n);
            for step in 0..n {
                let _ = state.approve().expect("queue is never empty");
                let expected = usize::min(step + 1, n - 1);
                assert_eq!(state.current_index(), expected, "n={n} step={step}");
            }
            assert_eq!(state.current_index(), n - 1);
        }
    }

    #[test]
    fn disposition_at_last_index_stays_put() {
        let mut state = session(2);
        state.next();
        assert_eq!(state.defer(), Some("r1".to_string()));
        assert_eq!(state.current_index(), 1);
        // A second disposition still reports the same item: no dedupe guard.
        assert_eq!(state.defer(), Some("r1".to_string()));
    }

    #[test]
    fn feedback_resets_after_every_disposition() {
        let mut state = session(3);
        state.set_feedback("needs sources".to_string());
        let _ = state.approve();
        assert_eq!(state.feedback(), "");

        state.set_feedback("unclear".to_string());
        let _ = state.reject();
        assert_eq!(state.feedback(), "");

        state.set_feedback("later".to_string());
        let _ = state.defer();
        assert_eq!(state.feedback(), "");
    }

    #[test]
    fn reject_returns_feedback_before_clearing_it() {
        let mut state = session(1);
        state.set_feedback("duplicate of r4".to_string());
        let (id, feedback) = state.reject().unwrap();
        assert_eq!(id, "r0");
        assert_eq!(feedback, "duplicate of r4");
    }

    #[test]
    fn revisiting_a_dispositioned_item_shows_it_again() {
        let mut state = session(3);
        let _ = state.approve();
        assert_eq!(state.current_index(), 1);
        state.previous();
        assert_eq!(state.current_item().unwrap().id, "r0");
        // Re-approving the same item is allowed by design.
        assert_eq!(state.approve(), Some("r0".to_string()));
    }

    #[test]
    fn approving_three_items_in_order_visits_each_index() {
        let mut state = session(3);
        assert_eq!(state.approve(), Some("r0".to_string()));
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.approve(), Some("r1".to_string()));
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.approve(), Some("r2".to_string()));
        assert_eq!(state.current_index(), 2);
    }
}
