// SPDX-License-Identifier: MPL-2.0
//! Circles screen: every community circle at a glance.

use crate::app::routes::Route;
use crate::domain::CircleSummary;
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::spacing;
use crate::ui::shell::{self, Message};
use crate::ui::styles;
use iced::widget::{button, Column};
use iced::Element;

pub fn view<'a>(circles: Option<&'a [CircleSummary]>, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(circles) = circles else {
        return shell::loading(i18n);
    };

    let mut list = Column::new().spacing(spacing::MD);
    for circle in circles {
        list = list.push(
            button(cards::circle_card(circle, i18n))
                .style(styles::button::link)
                .padding(0)
                .on_press(Message::Navigate(Route::CircleDetail {
                    id: circle.id.clone(),
                })),
        );
    }
    list.into()
}
