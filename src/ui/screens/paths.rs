// SPDX-License-Identifier: MPL-2.0
//! Paths screen: learning paths with their progress.

use crate::app::routes::Route;
use crate::domain::LearningPath;
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::spacing;
use crate::ui::shell::{self, Message};
use crate::ui::styles;
use iced::widget::{button, Column};
use iced::Element;

pub fn view<'a>(paths: Option<&'a [LearningPath]>, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(paths) = paths else {
        return shell::loading(i18n);
    };

    let mut list = Column::new().spacing(spacing::MD);
    for path in paths {
        list = list.push(
            button(cards::path_card(path, i18n))
                .style(styles::button::link)
                .padding(0)
                .on_press(Message::Navigate(Route::PathDetail {
                    id: path.id.clone(),
                })),
        );
    }
    list.into()
}
