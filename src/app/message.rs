// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::routes::Route;
use crate::domain::{
    AuthCallbackState, AuthProvider, BillingSettings, CircleDetail, CircleSummary, GardenInsight,
    GardenOverview, HomeOverview, LearningPath, LearningPathDetail, NotificationSettings,
    PricingPlan, ProfileSettings, ReviewItem, SummaryDocument, UserProfile, WorkspaceStat,
};
use crate::ui::notifications;
use crate::ui::review_session;
use crate::ui::screens::components_demo;
use crate::ui::shell;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint;
/// the `*Loaded` variants carry results from mock data fetches.
#[derive(Debug, Clone)]
pub enum Message {
    Shell(shell::Message),
    Review(review_session::Message),
    Demo(components_demo::Message),
    Notification(notifications::Message),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),

    StatsLoaded(Vec<WorkspaceStat>),
    HomeLoaded {
        overview: HomeOverview,
        stats: Vec<WorkspaceStat>,
    },
    PricingLoaded(Vec<PricingPlan>),
    ReviewQueueLoaded(Vec<ReviewItem>),
    SummaryLoaded(SummaryDocument),
    GardenLoaded {
        overview: GardenOverview,
        insights: Vec<GardenInsight>,
    },
    InsightLoaded(GardenInsight),
    CirclesLoaded(Vec<CircleSummary>),
    CircleLoaded(CircleDetail),
    PathsLoaded(Vec<LearningPath>),
    PathLoaded(LearningPathDetail),
    ProfileSettingsLoaded(ProfileSettings),
    BillingLoaded(BillingSettings),
    NotificationPrefsLoaded(NotificationSettings),
    UserProfileLoaded(UserProfile),
    AuthProvidersLoaded(Vec<AuthProvider>),
    AuthCallbackLoaded(AuthCallbackState),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Initial screen, parsed and validated by the launcher.
    pub route: Option<Route>,
}
