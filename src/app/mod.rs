// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires together localization, routing, per-screen page
//! state, and toast notifications, and translates messages into side
//! effects like data fetches or preference persistence. Policy decisions
//! (window sizing, locale resolution order, theme persistence) stay close
//! to the main update loop so user-facing behavior is easy to audit.

mod message;
mod page;
pub mod routes;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use page::PageState;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use routes::Route;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    route: Route,
    page: PageState,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App").field("route", &self.route).finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let route = Route::Overview;
        Self {
            i18n: I18n::default(),
            page: PageState::for_route(&route),
            route,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the first fetch for the
    /// route selected by `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, None),
            Err(_) => (
                config::Config::default(),
                Some("notification-config-load-error"),
            ),
        };

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let route = flags.route.unwrap_or(Route::Overview);
        let task = update::navigate(&mut app.update_context(), route);
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            route: &mut self.route,
            page: &mut self.page,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let route_path = self.route.path();
        if route_path == "/" {
            app_name
        } else {
            format!("{route_path} - {app_name}")
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        match message {
            Message::Shell(message) => update::handle_shell_message(&mut ctx, message),
            Message::Review(message) => update::handle_review_message(&mut ctx, message),
            Message::Demo(message) => {
                update::handle_demo_message(&mut ctx, message);
                Task::none()
            }
            Message::Notification(message) => {
                ctx.notifications.update(message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications
                    .update(notifications::Message::Tick(now));
                Task::none()
            }
            loaded => {
                update::apply_loaded(&mut ctx, loaded);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: &self.route,
            page: &self.page,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_sits_on_the_overview() {
        let app = App::default();
        assert_eq!(app.route, Route::Overview);
        assert!(matches!(app.page, PageState::Overview { .. }));
    }

    #[test]
    fn title_includes_the_route_path() {
        let mut app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));

        let _ = update::navigate(&mut app.update_context(), Route::Garden);
        assert!(app.title().starts_with("/garden"));
    }

    #[test]
    fn shell_navigation_message_switches_pages() {
        let mut app = App::default();
        let _ = app.update(Message::Shell(crate::ui::shell::Message::Navigate(
            Route::Pricing,
        )));
        assert_eq!(app.route, Route::Pricing);
        assert!(matches!(app.page, PageState::Pricing { plans: None }));
    }

    #[test]
    fn ticks_without_notifications_are_harmless() {
        let mut app = App::default();
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(!app.notifications.has_notifications());
    }
}
