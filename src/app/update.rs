// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Navigation swaps the page state and spawns the fetch task for the new
//! route. Fetch results are only applied when the matching page is still
//! active; a result arriving after the user navigated away is dropped,
//! which is the entire cancellation story of the mock data layer.

use super::page::PageState;
use super::routes::Route;
use super::Message;
use crate::config;
use crate::data;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::review_session::{self, Event as ReviewEvent};
use crate::ui::screens::components_demo;
use crate::ui::shell;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub route: &'a mut Route,
    pub page: &'a mut PageState,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

/// Switches to `route` and kicks off its data fetch.
pub fn navigate(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    *ctx.page = PageState::for_route(&route);
    *ctx.route = route.clone();
    fetch_task(&route)
}

/// Builds the fetch task for a route. Pages with two independent records
/// await both accessors together.
fn fetch_task(route: &Route) -> Task<Message> {
    match route {
        Route::Overview => Task::perform(data::workspace_stats(), Message::StatsLoaded),
        Route::Home => Task::perform(
            async { tokio::join!(data::home_overview(), data::workspace_stats()) },
            |(overview, stats)| Message::HomeLoaded { overview, stats },
        ),
        Route::Pricing => Task::perform(data::pricing_plans(), Message::PricingLoaded),
        Route::Review => Task::perform(data::review_queue(), Message::ReviewQueueLoaded),
        Route::Summary { slug } => {
            let slug = slug.clone();
            Task::perform(
                async move { data::summary_document(&slug).await },
                Message::SummaryLoaded,
            )
        }
        Route::Garden => Task::perform(
            async { tokio::join!(data::garden_overview(), data::garden_insights()) },
            |(overview, insights)| Message::GardenLoaded { overview, insights },
        ),
        Route::Insight { id } => {
            let id = id.clone();
            Task::perform(
                async move { data::garden_insight(&id).await },
                Message::InsightLoaded,
            )
        }
        Route::Circles => Task::perform(data::circles(), Message::CirclesLoaded),
        Route::CircleDetail { id } => {
            let id = id.clone();
            Task::perform(
                async move { data::circle_detail(&id).await },
                Message::CircleLoaded,
            )
        }
        Route::Paths => Task::perform(data::learning_paths(), Message::PathsLoaded),
        Route::PathDetail { id } => {
            let id = id.clone();
            Task::perform(
                async move { data::path_detail(&id).await },
                Message::PathLoaded,
            )
        }
        Route::SettingsProfile => {
            Task::perform(data::profile_settings(), Message::ProfileSettingsLoaded)
        }
        Route::SettingsBilling => Task::perform(data::billing_settings(), Message::BillingLoaded),
        Route::SettingsNotifications => Task::perform(
            data::notification_settings(),
            Message::NotificationPrefsLoaded,
        ),
        Route::UserProfile { username } => {
            let username = username.clone();
            Task::perform(
                async move { data::user_profile(&username).await },
                Message::UserProfileLoaded,
            )
        }
        Route::SignIn | Route::SignUp => {
            Task::perform(data::auth_providers(), Message::AuthProvidersLoaded)
        }
        Route::AuthCallback => {
            Task::perform(data::auth_callback_state(), Message::AuthCallbackLoaded)
        }
        Route::ComponentsDemo => Task::none(),
    }
}

/// Applies a fetch result to the active page, dropping stale results.
pub fn apply_loaded(ctx: &mut UpdateContext<'_>, message: Message) {
    match (&mut *ctx.page, message) {
        (PageState::Overview { stats, .. }, Message::StatsLoaded(loaded)) => {
            *stats = Some(loaded);
        }
        (
            PageState::Home { overview, stats },
            Message::HomeLoaded {
                overview: loaded_overview,
                stats: loaded_stats,
            },
        ) => {
            *overview = Some(loaded_overview);
            *stats = Some(loaded_stats);
        }
        (PageState::Pricing { plans }, Message::PricingLoaded(loaded)) => {
            *plans = Some(loaded);
        }
        (PageState::Review { session }, Message::ReviewQueueLoaded(items)) => {
            *session = Some(review_session::State::new(items));
        }
        (PageState::Summary { document }, Message::SummaryLoaded(loaded)) => {
            *document = Some(loaded);
        }
        (
            PageState::Garden { overview, insights },
            Message::GardenLoaded {
                overview: loaded_overview,
                insights: loaded_insights,
            },
        ) => {
            *overview = Some(loaded_overview);
            *insights = Some(loaded_insights);
        }
        (PageState::Insight { insight }, Message::InsightLoaded(loaded)) => {
            *insight = Some(loaded);
        }
        (PageState::Circles { circles }, Message::CirclesLoaded(loaded)) => {
            *circles = Some(loaded);
        }
        (PageState::CircleDetail { circle }, Message::CircleLoaded(loaded)) => {
            *circle = Some(loaded);
        }
        (PageState::Paths { paths }, Message::PathsLoaded(loaded)) => {
            *paths = Some(loaded);
        }
        (PageState::PathDetail { path }, Message::PathLoaded(loaded)) => {
            *path = Some(loaded);
        }
        (PageState::SettingsProfile { settings }, Message::ProfileSettingsLoaded(loaded)) => {
            *settings = Some(loaded);
        }
        (PageState::SettingsBilling { settings }, Message::BillingLoaded(loaded)) => {
            *settings = Some(loaded);
        }
        (
            PageState::SettingsNotifications { settings },
            Message::NotificationPrefsLoaded(loaded),
        ) => {
            *settings = Some(loaded);
        }
        (PageState::UserProfile { profile }, Message::UserProfileLoaded(loaded)) => {
            *profile = Some(loaded);
        }
        (
            PageState::SignIn { providers } | PageState::SignUp { providers },
            Message::AuthProvidersLoaded(loaded),
        ) => {
            *providers = Some(loaded);
        }
        (PageState::AuthCallback { callback }, Message::AuthCallbackLoaded(loaded)) => {
            *callback = Some(loaded);
        }
        // Result for a page that is no longer active: discard.
        _ => {}
    }
}

/// Handles shell chrome messages (navigation, theme toggle).
pub fn handle_shell_message(
    ctx: &mut UpdateContext<'_>,
    message: shell::Message,
) -> Task<Message> {
    match message {
        shell::Message::Navigate(route) => navigate(ctx, route),
        shell::Message::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.next();
            let config = config::Config {
                language: Some(ctx.i18n.current_locale().to_string()),
                theme_mode: *ctx.theme_mode,
            };
            if config::save(&config).is_err() {
                ctx.notifications
                    .push(Notification::warning("notification-config-save-error"));
            }
            Task::none()
        }
    }
}

/// Handles review session messages on the review screen and surfaces
/// dispositions as toasts.
pub fn handle_review_message(
    ctx: &mut UpdateContext<'_>,
    message: review_session::Message,
) -> Task<Message> {
    let PageState::Review { session: Some(session) } = &mut *ctx.page else {
        return Task::none();
    };

    let title_of = |session: &review_session::State, id: &str| {
        session
            .items()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.title.clone())
    };

    let event = review_session::update(session, message);
    let toast = match event {
        ReviewEvent::None => None,
        ReviewEvent::Approved { id } => Some(
            Notification::success("notification-approved")
                .with_detail(title_of(session, &id).unwrap_or(id)),
        ),
        ReviewEvent::Rejected { id, .. } => Some(
            Notification::warning("notification-rejected")
                .with_detail(title_of(session, &id).unwrap_or(id)),
        ),
        ReviewEvent::Deferred { id } => Some(
            Notification::info("notification-deferred")
                .with_detail(title_of(session, &id).unwrap_or(id)),
        ),
    };

    if let Some(toast) = toast {
        ctx.notifications.push(toast);
    }
    Task::none()
}

/// Forwards demo screen messages when the demo page is active.
pub fn handle_demo_message(ctx: &mut UpdateContext<'_>, message: components_demo::Message) {
    if let PageState::ComponentsDemo(state) = &mut *ctx.page {
        components_demo::update(state, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::backend::BackendEnvSummary;
    use crate::data::fixtures;

    fn test_ctx<'a>(
        i18n: &'a mut I18n,
        route: &'a mut Route,
        page: &'a mut PageState,
        theme_mode: &'a mut ThemeMode,
        manager: &'a mut notifications::Manager,
    ) -> UpdateContext<'a> {
        UpdateContext {
            i18n,
            route,
            page,
            theme_mode,
            notifications: manager,
        }
    }

    #[test]
    fn loaded_results_fill_the_matching_page() {
        let mut i18n = I18n::default();
        let mut route = Route::Circles;
        let mut page = PageState::Circles { circles: None };
        let mut theme = ThemeMode::System;
        let mut toasts = notifications::Manager::new();
        let mut ctx = test_ctx(&mut i18n, &mut route, &mut page, &mut theme, &mut toasts);

        apply_loaded(&mut ctx, Message::CirclesLoaded(fixtures::circles()));
        match &page {
            PageState::Circles { circles } => assert_eq!(circles.as_ref().unwrap().len(), 2),
            other => panic!("unexpected page state: {other:?}"),
        }
    }

    #[test]
    fn stale_results_for_other_pages_are_dropped() {
        let mut i18n = I18n::default();
        let mut route = Route::Overview;
        let mut page = PageState::Overview {
            stats: None,
            backend: BackendEnvSummary::default(),
        };
        let mut theme = ThemeMode::System;
        let mut toasts = notifications::Manager::new();
        let mut ctx = test_ctx(&mut i18n, &mut route, &mut page, &mut theme, &mut toasts);

        // A circles result arriving after navigating to the overview.
        apply_loaded(&mut ctx, Message::CirclesLoaded(fixtures::circles()));
        match &page {
            PageState::Overview { stats, .. } => assert!(stats.is_none()),
            other => panic!("unexpected page state: {other:?}"),
        }
    }

    #[test]
    fn review_queue_result_builds_the_session() {
        let mut i18n = I18n::default();
        let mut route = Route::Review;
        let mut page = PageState::Review { session: None };
        let mut theme = ThemeMode::System;
        let mut toasts = notifications::Manager::new();
        let mut ctx = test_ctx(&mut i18n, &mut route, &mut page, &mut theme, &mut toasts);

        apply_loaded(
            &mut ctx,
            Message::ReviewQueueLoaded(fixtures::review_queue()),
        );
        match &page {
            PageState::Review { session } => {
                let session = session.as_ref().unwrap();
                assert_eq!(session.len(), 3);
                assert_eq!(session.current_index(), 0);
            }
            other => panic!("unexpected page state: {other:?}"),
        }
    }

    #[test]
    fn dispositions_surface_as_toasts_with_the_item_title() {
        let mut i18n = I18n::default();
        let mut route = Route::Review;
        let mut page = PageState::Review {
            session: Some(review_session::State::new(fixtures::review_queue())),
        };
        let mut theme = ThemeMode::System;
        let mut toasts = notifications::Manager::new();
        let mut ctx = test_ctx(&mut i18n, &mut route, &mut page, &mut theme, &mut toasts);

        let _ = handle_review_message(&mut ctx, review_session::Message::Approve);
        let toast = toasts.visible().next().expect("toast expected");
        assert_eq!(toast.message_key(), "notification-approved");
        assert_eq!(toast.detail(), Some("Garden retro notes"));
    }

    #[test]
    fn review_messages_without_a_session_are_ignored() {
        let mut i18n = I18n::default();
        let mut route = Route::Review;
        let mut page = PageState::Review { session: None };
        let mut theme = ThemeMode::System;
        let mut toasts = notifications::Manager::new();
        let mut ctx = test_ctx(&mut i18n, &mut route, &mut page, &mut theme, &mut toasts);

        let _ = handle_review_message(&mut ctx, review_session::Message::Approve);
        assert!(!toasts.has_notifications());
    }

    #[test]
    fn navigate_swaps_route_and_resets_page() {
        let mut i18n = I18n::default();
        let mut route = Route::Overview;
        let mut page = PageState::for_route(&route);
        let mut theme = ThemeMode::System;
        let mut toasts = notifications::Manager::new();
        let mut ctx = test_ctx(&mut i18n, &mut route, &mut page, &mut theme, &mut toasts);

        let _task = navigate(
            &mut ctx,
            Route::CircleDetail {
                id: "ops-guild".to_string(),
            },
        );
        assert_eq!(
            route,
            Route::CircleDetail {
                id: "ops-guild".to_string()
            }
        );
        assert!(matches!(page, PageState::CircleDetail { circle: None }));
    }
}
