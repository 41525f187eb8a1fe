// SPDX-License-Identifier: MPL-2.0
//! Circle detail screen.

use crate::domain::CircleDetail;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(circle: Option<&'a CircleDetail>, i18n: &'a I18n) -> Element<'a, M> {
    let Some(circle) = circle else {
        return shell::loading(i18n);
    };

    let visibility_key = if circle.is_public {
        "circle-public-badge"
    } else {
        "circle-private-badge"
    };

    let header = container(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(circle.name.as_str())
                            .size(typography::TITLE_LG)
                            .width(Length::Fill),
                    )
                    .push(
                        container(Text::new(i18n.tr(visibility_key)).size(typography::CAPTION))
                            .padding([spacing::XXS, spacing::SM])
                            .style(styles::container::badge(if circle.is_public {
                                palette::SUCCESS_500
                            } else {
                                palette::SLATE_400
                            })),
                    ),
            )
            .push(Text::new(circle.description.as_str()).size(typography::BODY))
            .push(
                Text::new(format!(
                    "{} {} \u{2022} {}: {}",
                    circle.member_count,
                    i18n.tr("circle-members-suffix"),
                    i18n.tr("circle-cadence-label"),
                    circle.meeting_cadence
                ))
                .size(typography::BODY_SM),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card);

    let mut topics = Row::new().spacing(spacing::XS);
    for topic in &circle.focus_topics {
        topics = topics.push(
            container(Text::new(topic.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::badge(palette::PRIMARY_500)),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(shell::page_section(
            i18n.tr("circle-focus-section"),
            None,
            topics.into(),
        ))
        .into()
}
