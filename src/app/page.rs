// SPDX-License-Identifier: MPL-2.0
//! Per-screen page state.
//!
//! Each route owns exactly the data it fetches; `None` renders as the
//! loading line. Navigating away drops the whole variant, which is the
//! only cleanup the mock data layer needs.

use crate::app::routes::Route;
use crate::config::backend::{self, BackendEnvSummary};
use crate::domain::{
    AuthCallbackState, AuthProvider, BillingSettings, CircleDetail, CircleSummary, GardenInsight,
    GardenOverview, HomeOverview, LearningPath, LearningPathDetail, NotificationSettings,
    PricingPlan, ProfileSettings, SummaryDocument, UserProfile, WorkspaceStat,
};
use crate::ui::review_session;
use crate::ui::screens::components_demo;

/// Fetched data for the active screen.
#[derive(Debug)]
pub enum PageState {
    Overview {
        stats: Option<Vec<WorkspaceStat>>,
        backend: BackendEnvSummary,
    },
    Home {
        overview: Option<HomeOverview>,
        stats: Option<Vec<WorkspaceStat>>,
    },
    Pricing {
        plans: Option<Vec<PricingPlan>>,
    },
    Review {
        session: Option<review_session::State>,
    },
    Summary {
        document: Option<SummaryDocument>,
    },
    Garden {
        overview: Option<GardenOverview>,
        insights: Option<Vec<GardenInsight>>,
    },
    Insight {
        insight: Option<GardenInsight>,
    },
    Circles {
        circles: Option<Vec<CircleSummary>>,
    },
    CircleDetail {
        circle: Option<CircleDetail>,
    },
    Paths {
        paths: Option<Vec<LearningPath>>,
    },
    PathDetail {
        path: Option<LearningPathDetail>,
    },
    SettingsProfile {
        settings: Option<ProfileSettings>,
    },
    SettingsBilling {
        settings: Option<BillingSettings>,
    },
    SettingsNotifications {
        settings: Option<NotificationSettings>,
    },
    UserProfile {
        profile: Option<UserProfile>,
    },
    SignIn {
        providers: Option<Vec<AuthProvider>>,
    },
    SignUp {
        providers: Option<Vec<AuthProvider>>,
    },
    AuthCallback {
        callback: Option<AuthCallbackState>,
    },
    ComponentsDemo(components_demo::State),
}

impl PageState {
    /// Fresh, not-yet-loaded state for a route.
    ///
    /// The overview's backend summary is computed here, synchronously: it
    /// is a process-environment check, not a fetch.
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Overview => PageState::Overview {
                stats: None,
                backend: backend::from_process_env(),
            },
            Route::Home => PageState::Home {
                overview: None,
                stats: None,
            },
            Route::Pricing => PageState::Pricing { plans: None },
            Route::Review => PageState::Review { session: None },
            Route::Summary { .. } => PageState::Summary { document: None },
            Route::Garden => PageState::Garden {
                overview: None,
                insights: None,
            },
            Route::Insight { .. } => PageState::Insight { insight: None },
            Route::Circles => PageState::Circles { circles: None },
            Route::CircleDetail { .. } => PageState::CircleDetail { circle: None },
            Route::Paths => PageState::Paths { paths: None },
            Route::PathDetail { .. } => PageState::PathDetail { path: None },
            Route::SettingsProfile => PageState::SettingsProfile { settings: None },
            Route::SettingsBilling => PageState::SettingsBilling { settings: None },
            Route::SettingsNotifications => PageState::SettingsNotifications { settings: None },
            Route::UserProfile { .. } => PageState::UserProfile { profile: None },
            Route::SignIn => PageState::SignIn { providers: None },
            Route::SignUp => PageState::SignUp { providers: None },
            Route::AuthCallback => PageState::AuthCallback { callback: None },
            Route::ComponentsDemo => PageState::ComponentsDemo(components_demo::State::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_pages_start_unloaded() {
        match PageState::for_route(&Route::Circles) {
            PageState::Circles { circles } => assert!(circles.is_none()),
            other => panic!("unexpected page state: {other:?}"),
        }
    }

    #[test]
    fn demo_page_is_ready_without_fetching() {
        assert!(matches!(
            PageState::for_route(&Route::ComponentsDemo),
            PageState::ComponentsDemo(_)
        ));
    }

    #[test]
    fn overview_computes_backend_summary_synchronously() {
        match PageState::for_route(&Route::Overview) {
            PageState::Overview { stats, backend } => {
                assert!(stats.is_none());
                let present = usize::from(backend.has_url)
                    + usize::from(backend.has_anon_key)
                    + usize::from(backend.has_service_role_key);
                assert_eq!(present + backend.missing_keys.len(), 3);
            }
            other => panic!("unexpected page state: {other:?}"),
        }
    }
}
