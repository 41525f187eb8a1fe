// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn bordered(background: Color, text_color: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Primary action button (approve, continue-with, selected state).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => bordered(palette::PRIMARY_400, palette::WHITE, palette::PRIMARY_500),
        button::Status::Disabled => disabled_style(),
        _ => bordered(palette::PRIMARY_500, palette::WHITE, palette::PRIMARY_600),
    }
}

/// Success-tinted action button (approve).
pub fn success(_theme: &Theme, status: button::Status) -> button::Style {
    let base = palette::SUCCESS_500;
    match status {
        button::Status::Hovered => bordered(
            Color { a: 0.85, ..base },
            palette::WHITE,
            base,
        ),
        button::Status::Disabled => disabled_style(),
        _ => bordered(base, palette::WHITE, base),
    }
}

/// Warning-tinted action button (defer).
pub fn warning(_theme: &Theme, status: button::Status) -> button::Style {
    let base = palette::WARNING_500;
    match status {
        button::Status::Hovered => bordered(
            Color { a: 0.85, ..base },
            palette::WHITE,
            base,
        ),
        button::Status::Disabled => disabled_style(),
        _ => bordered(base, palette::WHITE, base),
    }
}

/// Danger-tinted action button (reject).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let base = palette::ERROR_500;
    match status {
        button::Status::Hovered => bordered(
            Color { a: 0.85, ..base },
            palette::WHITE,
            base,
        ),
        button::Status::Disabled => disabled_style(),
        _ => bordered(base, palette::WHITE, base),
    }
}

/// Secondary button that adapts to the active theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (bg, text, border) = if is_light {
        (palette::SLATE_100, palette::SLATE_900, palette::SLATE_400)
    } else {
        (palette::SLATE_700, palette::WHITE, palette::SLATE_400)
    };

    match status {
        button::Status::Hovered => bordered(
            if is_light {
                palette::SLATE_200
            } else {
                palette::SLATE_800
            },
            text,
            palette::PRIMARY_500,
        ),
        button::Status::Disabled => disabled_style(),
        _ => bordered(bg, text, border),
    }
}

/// Borderless navigation link button.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text = if is_light {
        palette::SLATE_700
    } else {
        palette::SLATE_200
    };

    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => palette::PRIMARY_500,
            _ => text,
        },
        ..button::Style::default()
    }
}

/// Navigation link for the currently active route.
pub fn link_active(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette::PRIMARY_500
        })),
        text_color: palette::PRIMARY_500,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

fn disabled_style() -> button::Style {
    bordered(palette::SLATE_200, palette::SLATE_400, palette::SLATE_400)
}
