// SPDX-License-Identifier: MPL-2.0
//! Review screen: the interactive session plus the raw queue listing.

use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::review_session::{self, ViewContext as SessionContext};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: Option<&'a review_session::State>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, review_session::Message> {
    let Some(session) = ctx.session else {
        return shell::loading(ctx.i18n);
    };

    let session_view = review_session::view(SessionContext {
        i18n: ctx.i18n,
        state: session,
    });

    let mut queue = Column::new().spacing(spacing::XS);
    for item in session.items() {
        queue = queue.push(
            container(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        container(Text::new(item.kind.label()).size(typography::CAPTION))
                            .padding([spacing::XXS, spacing::SM])
                            .style(styles::container::badge(cards::kind_tint(item.kind))),
                    )
                    .push(Text::new(item.title.as_str()).size(typography::BODY).width(Length::Fill))
                    .push(Text::new(item.submitted_at.as_str()).size(typography::CAPTION)),
            )
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::inset),
        );
    }

    let queue_section = shell::page_section(
        ctx.i18n.tr("review-queue-section"),
        Some(format!(
            "{} {}",
            session.len(),
            ctx.i18n.tr("review-queue-count-suffix")
        )),
        queue.into(),
    );

    Column::new()
        .spacing(spacing::LG)
        .push(session_view)
        .push(queue_section)
        .into()
}
