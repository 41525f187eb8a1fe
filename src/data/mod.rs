// SPDX-License-Identifier: MPL-2.0
//! Mock data provider simulating an asynchronous backend.
//!
//! Every accessor waits a fixed short delay and returns owned fixture
//! data. Per-identifier lookups never fail: an unknown key synthesizes a
//! placeholder record that echoes the key into the display field, so page
//! code can render without a not-found branch. Accessors are independent
//! and side-effect-free; callers may await several of them concurrently.

pub mod fixtures;

use crate::domain::{
    AuthCallbackState, AuthProvider, AuthStatus, BillingSettings, CircleDetail, CircleSummary,
    GardenInsight, GardenOverview, HomeOverview, LearningPath, LearningPathDetail,
    NotificationSettings, PricingPlan, ProfileSettings, ReviewItem, SummaryDocument, UserProfile,
    UserStats, WorkspaceStat,
};
use std::time::Duration;

/// Simulated backend latency applied by every accessor.
const FETCH_DELAY: Duration = Duration::from_millis(40);

async fn delay() {
    tokio::time::sleep(FETCH_DELAY).await;
}

/// Timestamp stamped onto synthesized placeholder records.
fn placeholder_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub async fn workspace_stats() -> Vec<WorkspaceStat> {
    delay().await;
    fixtures::workspace_stats()
}

pub async fn home_overview() -> HomeOverview {
    delay().await;
    fixtures::home_overview()
}

pub async fn pricing_plans() -> Vec<PricingPlan> {
    delay().await;
    fixtures::pricing_plans()
}

pub async fn summary_document(slug: &str) -> SummaryDocument {
    delay().await;
    fixtures::summary_documents()
        .into_iter()
        .find(|doc| doc.slug == slug)
        .unwrap_or_else(|| SummaryDocument {
            slug: slug.to_string(),
            title: format!("Summary: {slug}"),
            summary: "This placeholder summary will be replaced with live data.".to_string(),
            highlights: vec![
                "Call the API once it is available".to_string(),
                "Render insight level metrics".to_string(),
            ],
            last_updated: placeholder_timestamp(),
        })
}

pub async fn garden_overview() -> GardenOverview {
    delay().await;
    fixtures::garden_overview()
}

pub async fn garden_insights() -> Vec<GardenInsight> {
    delay().await;
    fixtures::garden_insights()
}

pub async fn garden_insight(id: &str) -> GardenInsight {
    delay().await;
    fixtures::garden_insights()
        .into_iter()
        .find(|insight| insight.id == id)
        .unwrap_or_else(|| GardenInsight {
            id: id.to_string(),
            title: "Unknown insight".to_string(),
            excerpt: "No insight has been recorded for this ID yet.".to_string(),
            tags: vec!["todo".to_string()],
            last_edited: placeholder_timestamp(),
        })
}

pub async fn review_queue() -> Vec<ReviewItem> {
    delay().await;
    fixtures::review_queue()
}

pub async fn circles() -> Vec<CircleSummary> {
    delay().await;
    fixtures::circles()
}

pub async fn circle_detail(id: &str) -> CircleDetail {
    delay().await;
    fixtures::circle_details()
        .into_iter()
        .find(|circle| circle.id == id)
        .unwrap_or_else(|| CircleDetail {
            id: id.to_string(),
            name: format!("Circle {id}"),
            description: "This circle has not been configured yet.".to_string(),
            member_count: 0,
            is_public: false,
            focus_topics: vec!["todo".to_string()],
            meeting_cadence: "TBD".to_string(),
        })
}

pub async fn learning_paths() -> Vec<LearningPath> {
    delay().await;
    fixtures::learning_paths()
        .iter()
        .map(LearningPathDetail::summary)
        .collect()
}

pub async fn path_detail(id: &str) -> LearningPathDetail {
    delay().await;
    fixtures::learning_paths()
        .into_iter()
        .find(|path| path.id == id)
        .unwrap_or_else(|| LearningPathDetail {
            id: id.to_string(),
            name: format!("Path {id}"),
            description: "Details coming soon.".to_string(),
            progress: 0,
            total_steps: 0,
            milestones: Vec::new(),
        })
}

pub async fn profile_settings() -> ProfileSettings {
    delay().await;
    fixtures::profile_settings()
}

pub async fn billing_settings() -> BillingSettings {
    delay().await;
    fixtures::billing_settings()
}

pub async fn notification_settings() -> NotificationSettings {
    delay().await;
    fixtures::notification_settings()
}

pub async fn user_profile(username: &str) -> UserProfile {
    delay().await;
    fixtures::user_profiles()
        .into_iter()
        .find(|profile| profile.username == username)
        .unwrap_or_else(|| UserProfile {
            username: username.to_string(),
            display_name: username.to_string(),
            bio: "This profile will be hydrated with live data soon.".to_string(),
            joined_at: placeholder_timestamp(),
            stats: UserStats {
                circles: 0,
                paths: 0,
                contributions: 0,
            },
        })
}

pub async fn auth_providers() -> Vec<AuthProvider> {
    delay().await;
    fixtures::auth_providers()
}

pub async fn auth_callback_state() -> AuthCallbackState {
    delay().await;
    AuthCallbackState {
        status: AuthStatus::Pending,
        message: "Verifying session with Smart identity provider...".to_string(),
        next_route: "/home".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReviewItemKind;

    #[tokio::test]
    async fn review_queue_has_three_fixed_items() {
        let queue = review_queue().await;
        assert_eq!(queue.len(), 3);
        assert_eq!(queue[0].id, "review-1");
        assert_eq!(queue[0].kind, ReviewItemKind::Seed);
        assert_eq!(queue[1].kind, ReviewItemKind::Insight);
        assert_eq!(queue[2].kind, ReviewItemKind::Summary);
    }

    #[tokio::test]
    async fn known_circle_returns_configured_detail() {
        let circle = circle_detail("pattern-lab").await;
        assert_eq!(circle.name, "Pattern Lab");
        assert_eq!(circle.member_count, 18);
        assert!(circle.is_public);
    }

    #[tokio::test]
    async fn unknown_circle_echoes_identifier_into_name() {
        let circle = circle_detail("ghost").await;
        assert_eq!(circle.name, "Circle ghost");
        assert_eq!(circle.member_count, 0);
        assert!(!circle.is_public);
    }

    #[tokio::test]
    async fn unknown_summary_echoes_slug_into_title() {
        let doc = summary_document("q3-retro").await;
        assert_eq!(doc.title, "Summary: q3-retro");
        assert_eq!(doc.slug, "q3-retro");
    }

    #[tokio::test]
    async fn unknown_path_echoes_identifier_and_has_no_milestones() {
        let path = path_detail("missing").await;
        assert_eq!(path.name, "Path missing");
        assert!(path.milestones.is_empty());
        assert_eq!(path.total_steps, 0);
    }

    #[tokio::test]
    async fn unknown_user_uses_username_as_display_name() {
        let profile = user_profile("wanderer").await;
        assert_eq!(profile.display_name, "wanderer");
        assert_eq!(profile.stats.contributions, 0);
    }

    #[tokio::test]
    async fn path_listing_drops_milestones_but_keeps_progress() {
        let paths = learning_paths().await;
        assert_eq!(paths.len(), 2);
        let discovery = paths.iter().find(|p| p.id == "discovery-first").unwrap();
        assert_eq!(discovery.progress, 3);
        assert_eq!(discovery.total_steps, 7);
    }

    #[tokio::test]
    async fn independent_accessors_can_be_awaited_together() {
        let (overview, stats) = tokio::join!(home_overview(), workspace_stats());
        assert_eq!(overview.quick_links.len(), 3);
        assert_eq!(stats.len(), 3);
    }
}
