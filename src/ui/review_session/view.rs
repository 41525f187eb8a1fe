// SPDX-License-Identifier: MPL-2.0
//! Review session rendering.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text_input, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the session.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the review session.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(item) = ctx.state.current_item() else {
        return container(
            Text::new(ctx.i18n.tr("review-empty"))
                .size(typography::TITLE_SM)
                .width(Length::Fill)
                .center(),
        )
        .padding(spacing::XL)
        .width(Length::Fill)
        .style(styles::container::card)
        .into();
    };

    let progress = Text::new(format!(
        "{} {} / {}",
        ctx.i18n.tr("review-progress-label"),
        ctx.state.current_index() + 1,
        ctx.state.len(),
    ))
    .size(typography::BODY_SM);

    let mut previous_button = button(
        Text::new(ctx.i18n.tr("review-previous-button")).size(typography::BODY_SM),
    )
    .style(styles::button::secondary);
    if ctx.state.has_previous() {
        previous_button = previous_button.on_press(Message::Previous);
    }

    let mut next_button =
        button(Text::new(ctx.i18n.tr("review-next-button")).size(typography::BODY_SM))
            .style(styles::button::secondary);
    if ctx.state.has_next() {
        next_button = next_button.on_press(Message::Next);
    }

    let header = container(
        Row::new()
            .spacing(spacing::XS)
            .push(progress)
            .push(iced::widget::Space::new().width(Length::Fill))
            .push(previous_button)
            .push(next_button),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::inset);

    let kind_badge = container(Text::new(item.kind.label()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(cards::kind_tint(item.kind)));

    let byline = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(format!("{} {}", ctx.i18n.tr("review-authored-by"), item.author))
                .size(typography::BODY_SM),
        )
        .push(Text::new("\u{2022}").size(typography::BODY_SM))
        .push(Text::new(item.submitted_at.as_str()).size(typography::BODY_SM));

    let item_card = container(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(kind_badge)
                    .push(Text::new(item.title.as_str()).size(typography::TITLE)),
            )
            .push(Text::new(item.content.as_str()).size(typography::BODY))
            .push(byline),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card);

    let feedback = container(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("review-feedback-label")).size(typography::BODY_SM))
            .push(
                text_input(
                    &ctx.i18n.tr("review-feedback-placeholder"),
                    ctx.state.feedback(),
                )
                .on_input(Message::FeedbackChanged)
                .padding(spacing::XS),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(ctx.i18n.tr("review-approve-button")).size(typography::BODY))
                .style(styles::button::success)
                .width(Length::Fill)
                .padding(spacing::SM)
                .on_press(Message::Approve),
        )
        .push(
            button(Text::new(ctx.i18n.tr("review-defer-button")).size(typography::BODY))
                .style(styles::button::warning)
                .width(Length::Fill)
                .padding(spacing::SM)
                .on_press(Message::Defer),
        )
        .push(
            button(Text::new(ctx.i18n.tr("review-reject-button")).size(typography::BODY))
                .style(styles::button::danger)
                .width(Length::Fill)
                .padding(spacing::SM)
                .on_press(Message::Reject),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(item_card)
        .push(feedback)
        .push(actions)
        .into()
}
