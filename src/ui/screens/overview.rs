// SPDX-License-Identifier: MPL-2.0
//! Workspace overview: headline stats, backend status, and shortcuts.
//!
//! This is the only surface that consumes the backend environment summary.

use crate::app::routes::Route;
use crate::config::backend::BackendEnvSummary;
use crate::domain::WorkspaceStat;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::shell::{self, Message};
use crate::ui::styles;
use crate::ui::cards;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub stats: Option<&'a [WorkspaceStat]>,
    pub backend: &'a BackendEnvSummary,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(stats) = ctx.stats else {
        return shell::loading(ctx.i18n);
    };

    let mut stat_row = Row::new().spacing(spacing::MD);
    for stat in stats {
        stat_row = stat_row.push(cards::stat_card(stat));
    }

    let backend_section = shell::page_section(
        ctx.i18n.tr("overview-backend-section"),
        Some(ctx.i18n.tr("overview-backend-description")),
        backend_status(ctx.i18n, ctx.backend),
    );

    let shortcuts = shell::page_section(
        ctx.i18n.tr("overview-shortcuts-section"),
        None,
        shortcut_links(ctx.i18n),
    );

    Column::new()
        .spacing(spacing::LG)
        .push(stat_row)
        .push(backend_section)
        .push(shortcuts)
        .into()
}

fn backend_status<'a>(i18n: &'a I18n, backend: &'a BackendEnvSummary) -> Element<'a, Message> {
    let line = |label_key: &str, present: bool| {
        let status = if present {
            Text::new(i18n.tr("backend-configured"))
                .size(typography::BODY_SM)
                .color(palette::SUCCESS_500)
        } else {
            Text::new(i18n.tr("backend-missing"))
                .size(typography::BODY_SM)
                .color(palette::WARNING_500)
        };
        Row::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr(label_key)).size(typography::BODY_SM).width(Length::Fill))
            .push(status)
    };

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(line("backend-url-label", backend.has_url))
        .push(line("backend-anon-label", backend.has_anon_key))
        .push(line("backend-service-label", backend.has_service_role_key));

    if !backend.is_complete() {
        let missing = backend.missing_keys.join(", ");
        column = column.push(
            Text::new(format!("{} ({missing})", i18n.tr("backend-hint")))
                .size(typography::CAPTION),
        );
    }

    container(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn shortcut_links(i18n: &I18n) -> Element<'_, Message> {
    let targets = [
        ("nav-home", Route::Home),
        ("nav-review", Route::Review),
        ("nav-garden", Route::Garden),
        ("nav-circles", Route::Circles),
    ];

    let mut row = Row::new().spacing(spacing::SM);
    for (label_key, route) in targets {
        row = row.push(
            button(Text::new(i18n.tr(label_key)).size(typography::BODY_SM))
                .style(styles::button::secondary)
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Navigate(route)),
        );
    }
    row.into()
}
