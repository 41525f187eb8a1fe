// SPDX-License-Identifier: MPL-2.0
//! Public user profile screen.

use crate::domain::UserProfile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(profile: Option<&'a UserProfile>, i18n: &'a I18n) -> Element<'a, M> {
    let Some(profile) = profile else {
        return shell::loading(i18n);
    };

    let stat = |label: String, value: u32| {
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(value.to_string()).size(typography::TITLE))
            .push(Text::new(label).size(typography::CAPTION))
            .width(Length::Fill)
    };

    let header = container(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(profile.display_name.as_str()).size(typography::TITLE_LG))
            .push(Text::new(format!("@{}", profile.username)).size(typography::BODY_SM))
            .push(
                Row::new()
                    .spacing(spacing::LG)
                    .push(stat(i18n.tr("profile-stats-circles"), profile.stats.circles))
                    .push(stat(i18n.tr("profile-stats-paths"), profile.stats.paths))
                    .push(stat(
                        i18n.tr("profile-stats-contributions"),
                        profile.stats.contributions,
                    )),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card);

    Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(shell::page_section(
            i18n.tr("profile-about-section"),
            Some(format!(
                "{} {}",
                i18n.tr("profile-joined-label"),
                profile.joined_at
            )),
            container(Text::new(profile.bio.as_str()).size(typography::BODY))
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::card)
                .into(),
        ))
        .into()
}
