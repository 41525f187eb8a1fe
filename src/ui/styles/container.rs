// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    }
}

/// Rounded card surface with a hairline border.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::LG.into(),
        },
        text_color: Some(colors.text_primary),
        ..container::Style::default()
    }
}

/// Muted inset panel used inside cards.
pub fn inset(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        text_color: Some(colors.text_secondary),
        ..container::Style::default()
    }
}

/// Sidebar background strip.
pub fn sidebar(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..container::Style::default()
    }
}

/// Page background.
pub fn surface(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..container::Style::default()
    }
}

/// Tinted pill badge; `tint` comes from the semantic palette.
pub fn badge(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE_TINT,
            ..tint
        })),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        text_color: Some(tint),
        ..container::Style::default()
    }
}

/// Toast surface colored by severity.
pub fn toast(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        container::Style {
            background: Some(Background::Color(colors.surface_card)),
            border: Border {
                color: tint,
                width: 1.5,
                radius: radius::MD.into(),
            },
            text_color: Some(colors.text_primary),
            ..container::Style::default()
        }
    }
}

/// Progress bar track.
pub fn track(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        ..container::Style::default()
    }
}

/// Progress bar fill.
pub fn track_fill(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        ..container::Style::default()
    }
}
