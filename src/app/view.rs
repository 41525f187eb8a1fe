// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Dispatches to the screen view for the active page and frames it with
//! the shell chrome (sidebar, top bar, toasts).

use super::page::PageState;
use super::routes::Route;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications;
use crate::ui::screens::{
    auth, circle_detail, circles, components_demo, garden, home, insight, overview, path_detail,
    paths, pricing, review, settings, summary, user_profile,
};
use crate::ui::shell::{self, SidebarContext, TopBarContext};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{container, scrollable, Column, Row};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: &'a Route,
    pub page: &'a PageState,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sidebar = shell::sidebar(SidebarContext {
        i18n: ctx.i18n,
        current: ctx.route,
    })
    .map(Message::Shell);

    let (title, description) = page_title(&ctx);
    let top_bar = shell::top_bar(TopBarContext {
        i18n: ctx.i18n,
        title,
        description,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Shell);

    let content = page_content(&ctx);

    let mut main_column = Column::new().push(top_bar);
    if ctx.notifications.has_notifications() {
        main_column = main_column.push(
            container(notifications::view(ctx.notifications, ctx.i18n).map(Message::Notification))
                .padding([spacing::XS, spacing::LG]),
        );
    }
    main_column = main_column.push(
        scrollable(
            container(content)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .padding(spacing::LG)
                .width(Length::Fill),
        )
        .height(Length::Fill),
    );

    container(
        Row::new()
            .push(sidebar)
            .push(main_column.width(Length::Fill).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::surface)
    .into()
}

/// Shell title and description for the active page. Detail screens use the
/// loaded record's display name once it arrives.
fn page_title(ctx: &ViewContext<'_>) -> (String, Option<String>) {
    let tr = |key: &str| ctx.i18n.tr(key);

    match ctx.page {
        PageState::Overview { .. } => (
            tr("screen-overview-title"),
            Some(tr("screen-overview-description")),
        ),
        PageState::Home { .. } => (tr("screen-home-title"), Some(tr("screen-home-description"))),
        PageState::Pricing { .. } => (
            tr("screen-pricing-title"),
            Some(tr("screen-pricing-description")),
        ),
        PageState::Review { .. } => (
            tr("screen-review-title"),
            Some(tr("screen-review-description")),
        ),
        PageState::Summary { document } => match document {
            Some(document) => (document.title.clone(), Some(document.summary.clone())),
            None => (tr("screen-summary-title"), None),
        },
        PageState::Garden { .. } => (
            tr("screen-garden-title"),
            Some(tr("screen-garden-description")),
        ),
        PageState::Insight { insight } => match insight {
            Some(insight) => (insight.title.clone(), None),
            None => (tr("screen-insight-title"), None),
        },
        PageState::Circles { .. } => (
            tr("screen-circles-title"),
            Some(tr("screen-circles-description")),
        ),
        PageState::CircleDetail { circle } => match circle {
            Some(circle) => (circle.name.clone(), Some(circle.description.clone())),
            None => (tr("screen-circle-title"), None),
        },
        PageState::Paths { .. } => (
            tr("screen-paths-title"),
            Some(tr("screen-paths-description")),
        ),
        PageState::PathDetail { path } => match path {
            Some(path) => (path.name.clone(), Some(path.description.clone())),
            None => (tr("screen-path-title"), None),
        },
        PageState::SettingsProfile { .. } => (
            tr("screen-settings-profile-title"),
            Some(tr("screen-settings-description")),
        ),
        PageState::SettingsBilling { .. } => (
            tr("screen-settings-billing-title"),
            Some(tr("screen-settings-description")),
        ),
        PageState::SettingsNotifications { .. } => (
            tr("screen-settings-notifications-title"),
            Some(tr("screen-settings-description")),
        ),
        PageState::UserProfile { profile } => match profile {
            Some(profile) => (
                profile.display_name.clone(),
                Some(format!("@{}", profile.username)),
            ),
            None => (tr("screen-user-profile-title"), None),
        },
        PageState::SignIn { .. } => (tr("screen-signin-title"), None),
        PageState::SignUp { .. } => (tr("screen-signup-title"), None),
        PageState::AuthCallback { .. } => (tr("screen-callback-title"), None),
        PageState::ComponentsDemo(_) => (
            tr("screen-components-title"),
            Some(tr("screen-components-description")),
        ),
    }
}

fn page_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.page {
        PageState::Overview { stats, backend } => overview::view(overview::ViewContext {
            i18n: ctx.i18n,
            stats: stats.as_deref(),
            backend,
        })
        .map(Message::Shell),
        PageState::Home { overview, stats } => home::view(home::ViewContext {
            i18n: ctx.i18n,
            overview: overview.as_ref(),
            stats: stats.as_deref(),
        })
        .map(Message::Shell),
        PageState::Pricing { plans } => pricing::view(plans.as_deref(), ctx.i18n),
        PageState::Review { session } => review::view(review::ViewContext {
            i18n: ctx.i18n,
            session: session.as_ref(),
        })
        .map(Message::Review),
        PageState::Summary { document } => summary::view(document.as_ref(), ctx.i18n),
        PageState::Garden { overview, insights } => garden::view(garden::ViewContext {
            i18n: ctx.i18n,
            overview: overview.as_ref(),
            insights: insights.as_deref(),
        })
        .map(Message::Shell),
        PageState::Insight { insight: record } => insight::view(record.as_ref(), ctx.i18n),
        PageState::Circles { circles: list } => {
            circles::view(list.as_deref(), ctx.i18n).map(Message::Shell)
        }
        PageState::CircleDetail { circle } => circle_detail::view(circle.as_ref(), ctx.i18n),
        PageState::Paths { paths: list } => {
            paths::view(list.as_deref(), ctx.i18n).map(Message::Shell)
        }
        PageState::PathDetail { path } => path_detail::view(path.as_ref(), ctx.i18n),
        PageState::SettingsProfile { settings: record } => {
            settings::profile(record.as_ref(), ctx.i18n)
        }
        PageState::SettingsBilling { settings: record } => {
            settings::billing(record.as_ref(), ctx.i18n)
        }
        PageState::SettingsNotifications { settings: record } => {
            settings::notifications(record.as_ref(), ctx.i18n)
        }
        PageState::UserProfile { profile } => user_profile::view(profile.as_ref(), ctx.i18n),
        PageState::SignIn { providers } | PageState::SignUp { providers } => {
            auth::providers(providers.as_deref(), ctx.i18n)
        }
        PageState::AuthCallback { callback } => auth::callback(callback.as_ref(), ctx.i18n),
        PageState::ComponentsDemo(state) => {
            components_demo::view(state, ctx.i18n).map(Message::Demo)
        }
    }
}
