// SPDX-License-Identifier: MPL-2.0
//! Application shell: sidebar navigation, top bar, and page framing.
//!
//! The shell never owns data; it renders the current route and forwards
//! navigation clicks to the application.

use crate::app::routes::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, scrollable, Column, Row, Space, Text};
use iced::{Element, Length};

/// Messages emitted by the shell chrome.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleTheme,
}

/// One sidebar section: a heading key plus its links.
struct NavSection {
    title_key: &'static str,
    items: Vec<(&'static str, Route)>,
}

fn nav_sections() -> Vec<NavSection> {
    vec![
        NavSection {
            title_key: "nav-section-workspace",
            items: vec![
                ("nav-overview", Route::Overview),
                ("nav-home", Route::Home),
                ("nav-pricing", Route::Pricing),
                ("nav-review", Route::Review),
                ("nav-components", Route::ComponentsDemo),
            ],
        },
        NavSection {
            title_key: "nav-section-insights",
            items: vec![
                (
                    "nav-summary",
                    Route::Summary {
                        slug: "north-star".to_string(),
                    },
                ),
                ("nav-garden", Route::Garden),
                (
                    "nav-insight-detail",
                    Route::Insight {
                        id: "async-rituals".to_string(),
                    },
                ),
            ],
        },
        NavSection {
            title_key: "nav-section-collaboration",
            items: vec![
                ("nav-circles", Route::Circles),
                (
                    "nav-circle-detail",
                    Route::CircleDetail {
                        id: "pattern-lab".to_string(),
                    },
                ),
                ("nav-paths", Route::Paths),
                (
                    "nav-path-detail",
                    Route::PathDetail {
                        id: "discovery-first".to_string(),
                    },
                ),
            ],
        },
        NavSection {
            title_key: "nav-section-settings",
            items: vec![
                ("nav-settings-profile", Route::SettingsProfile),
                ("nav-settings-billing", Route::SettingsBilling),
                ("nav-settings-notifications", Route::SettingsNotifications),
            ],
        },
        NavSection {
            title_key: "nav-section-account",
            items: vec![
                (
                    "nav-user-profile",
                    Route::UserProfile {
                        username: "demo-user".to_string(),
                    },
                ),
                ("nav-signin", Route::SignIn),
                ("nav-signup", Route::SignUp),
                ("nav-auth-callback", Route::AuthCallback),
            ],
        },
    ]
}

/// Contextual data needed to render the sidebar.
pub struct SidebarContext<'a> {
    pub i18n: &'a I18n,
    pub current: &'a Route,
}

/// Render the sidebar navigation.
pub fn sidebar<'a>(ctx: SidebarContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("window-title"))
                .size(typography::TITLE)
                .width(Length::Fill),
        )
        .push(Text::new(ctx.i18n.tr("app-tagline")).size(typography::CAPTION))
        .push(Space::new().height(spacing::MD));

    for section in nav_sections() {
        column = column.push(
            Text::new(ctx.i18n.tr(section.title_key).to_uppercase()).size(typography::CAPTION),
        );
        for (label_key, route) in section.items {
            let active = *ctx.current == route;
            let style = if active {
                styles::button::link_active
            } else {
                styles::button::link
            };
            column = column.push(
                button(Text::new(ctx.i18n.tr(label_key)).size(typography::BODY_SM))
                    .style(style)
                    .width(Length::Fill)
                    .padding([spacing::XXS, spacing::XS])
                    .on_press(Message::Navigate(route)),
            );
        }
        column = column.push(Space::new().height(spacing::SM));
    }

    container(scrollable(column.padding(spacing::MD)))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

/// Contextual data needed to render the top bar.
pub struct TopBarContext<'a> {
    pub i18n: &'a I18n,
    pub title: String,
    pub description: Option<String>,
    pub theme_mode: ThemeMode,
}

/// Render the top bar with title, description, and global shortcuts.
pub fn top_bar<'a>(ctx: TopBarContext<'a>) -> Element<'a, Message> {
    let mut heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.title).size(typography::TITLE));
    if let Some(description) = ctx.description {
        heading = heading.push(Text::new(description).size(typography::BODY_SM));
    }

    let theme_button = button(
        Text::new(ctx.i18n.tr(ctx.theme_mode.label_key())).size(typography::BODY_SM),
    )
    .style(styles::button::secondary)
    .on_press(Message::ToggleTheme);

    let pricing_link = button(
        Text::new(ctx.i18n.tr("topbar-pricing-link")).size(typography::BODY_SM),
    )
    .style(styles::button::link)
    .on_press(Message::Navigate(Route::Pricing));

    let signin_link = button(
        Text::new(ctx.i18n.tr("topbar-signin-link")).size(typography::BODY_SM),
    )
    .style(styles::button::secondary)
    .on_press(Message::Navigate(Route::SignIn));

    container(
        Row::new()
            .spacing(spacing::SM)
            .push(heading.width(Length::Fill))
            .push(pricing_link)
            .push(signin_link)
            .push(theme_button),
    )
    .padding([spacing::SM, spacing::LG])
    .width(Length::Fill)
    .style(styles::container::surface)
    .into()
}

/// Frame a block of content with a section heading, as every page does.
pub fn page_section<'a, M: 'a>(
    title: String,
    description: Option<String>,
    content: Element<'a, M>,
) -> Element<'a, M> {
    let mut heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_SM));
    if let Some(description) = description {
        heading = heading.push(Text::new(description).size(typography::BODY_SM));
    }

    Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(content)
        .into()
}

/// Placeholder line shown while a fetch is in flight.
pub fn loading<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    container(Text::new(i18n.tr("loading")).size(typography::BODY))
        .padding(spacing::XL)
        .width(Length::Fill)
        .into()
}
