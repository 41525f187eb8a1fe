// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

/// Renders the visible toasts as a stacked column.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut stack = Column::new().spacing(spacing::XS);

    for toast in manager.visible() {
        let message = match toast.detail() {
            Some(detail) => format!("{} \u{201c}{}\u{201d}", i18n.tr(toast.message_key()), detail),
            None => i18n.tr(toast.message_key()),
        };

        let row = Row::new()
            .spacing(spacing::SM)
            .push(Text::new(message).size(typography::BODY_SM).width(Length::Fill))
            .push(
                button(Text::new("\u{00d7}").size(typography::BODY_SM))
                    .style(styles::button::link)
                    .on_press(Message::Dismiss(toast.id())),
            );

        stack = stack.push(
            container(row)
                .width(Length::Fixed(sizing::TOAST_WIDTH))
                .padding(spacing::SM)
                .style(styles::container::toast(toast.severity().color())),
        );
    }

    stack.into()
}
