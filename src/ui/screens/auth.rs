// SPDX-License-Identifier: MPL-2.0
//! Auth screens: sign in, sign up, and the callback placeholder.
//!
//! Authentication is not wired to anything; providers render as inert
//! buttons and the callback screen shows the pending exchange record.

use crate::domain::{AuthCallbackState, AuthProvider, AuthStatus};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{button, container, Column, Text};
use iced::{Element, Length};

pub fn providers<'a, M: Clone + 'a>(
    providers: Option<&'a [AuthProvider]>,
    i18n: &'a I18n,
) -> Element<'a, M> {
    let Some(providers) = providers else {
        return shell::loading(i18n);
    };

    let mut list = Column::new().spacing(spacing::SM);
    for provider in providers {
        list = list.push(
            container(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        button(
                            Text::new(format!(
                                "{} {}",
                                i18n.tr("auth-continue-with"),
                                provider.name
                            ))
                            .size(typography::BODY),
                        )
                        .style(styles::button::primary)
                        .padding([spacing::XS, spacing::MD]),
                    )
                    .push(Text::new(provider.description.as_str()).size(typography::CAPTION)),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(shell::page_section(
            i18n.tr("auth-providers-section"),
            Some(i18n.tr("auth-providers-description")),
            list.into(),
        ))
        .push(Text::new(i18n.tr("auth-placeholder-note")).size(typography::CAPTION))
        .into()
}

pub fn callback<'a, M: 'a>(
    state: Option<&'a AuthCallbackState>,
    i18n: &'a I18n,
) -> Element<'a, M> {
    let Some(state) = state else {
        return shell::loading(i18n);
    };

    let tint = match state.status {
        AuthStatus::Pending => palette::WARNING_500,
        AuthStatus::Success => palette::SUCCESS_500,
        AuthStatus::Error => palette::ERROR_500,
    };

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(state.message.as_str()).size(typography::BODY))
            .push(
                Text::new(format!(
                    "{} {}",
                    i18n.tr("callback-next-label"),
                    state.next_route
                ))
                .size(typography::CAPTION),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::toast(tint))
    .into()
}
