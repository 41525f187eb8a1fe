// SPDX-License-Identifier: MPL-2.0
//! End-to-end review flow against the mock data provider.

use smart::app::routes::Route;
use smart::data;
use smart::ui::review_session::{update, Event, Message, State};

#[tokio::test]
async fn approving_the_whole_queue_walks_every_index_and_stops_at_the_end() {
    // The review route validates before any fetch happens.
    let route = Route::parse("/review").expect("review route should parse");
    assert_eq!(route, Route::Review);

    let queue = data::review_queue().await;
    assert_eq!(queue.len(), 3);

    let mut session = State::new(queue);

    // First approval reports review-1 from index 0.
    assert_eq!(session.current_index(), 0);
    let event = update(&mut session, Message::Approve);
    assert_eq!(
        event,
        Event::Approved {
            id: "review-1".to_string()
        }
    );

    // Second approval reports review-2 from index 1.
    assert_eq!(session.current_index(), 1);
    let event = update(&mut session, Message::Approve);
    assert_eq!(
        event,
        Event::Approved {
            id: "review-2".to_string()
        }
    );

    // Third approval reports review-3 and the cursor stays on the last index.
    assert_eq!(session.current_index(), 2);
    let event = update(&mut session, Message::Approve);
    assert_eq!(
        event,
        Event::Approved {
            id: "review-3".to_string()
        }
    );
    assert_eq!(session.current_index(), 2);

    // Still viewing the last item; nothing was removed from the queue.
    assert_eq!(session.len(), 3);
    assert_eq!(session.current_item().unwrap().id, "review-3");
    assert!(session.feedback().is_empty());
}

#[tokio::test]
async fn rejecting_with_feedback_resets_the_text_between_items() {
    let mut session = State::new(data::review_queue().await);

    let _ = update(
        &mut session,
        Message::FeedbackChanged("needs a source".to_string()),
    );
    let event = update(&mut session, Message::Reject);
    assert_eq!(
        event,
        Event::Rejected {
            id: "review-1".to_string(),
            feedback: "needs a source".to_string()
        }
    );
    assert!(session.feedback().is_empty());

    // Going back shows the same item again with cleared feedback.
    let _ = update(&mut session, Message::Previous);
    assert_eq!(session.current_item().unwrap().id, "review-1");
    assert!(session.feedback().is_empty());
}

#[tokio::test]
async fn unknown_identifiers_degrade_to_placeholders_not_errors() {
    let circle = data::circle_detail("ghost").await;
    assert_eq!(circle.name, "Circle ghost");

    let profile = data::user_profile("wanderer").await;
    assert_eq!(profile.display_name, "wanderer");

    let doc = data::summary_document("lost-slug").await;
    assert!(doc.title.contains("lost-slug"));
}

#[test]
fn invalid_route_parameters_never_reach_the_data_layer() {
    assert!(Route::parse("/u/a").is_err());
    assert!(Route::parse("/u/has space").is_err());
    assert!(Route::parse("/circles//").is_err());
    assert!(Route::parse("/garden/insight").is_err());
}
