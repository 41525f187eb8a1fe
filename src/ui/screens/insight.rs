// SPDX-License-Identifier: MPL-2.0
//! Insight detail screen.

use crate::domain::GardenInsight;
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::spacing;
use crate::ui::shell;
use iced::widget::Column;
use iced::Element;

pub fn view<'a, M: 'a>(insight: Option<&'a GardenInsight>, i18n: &'a I18n) -> Element<'a, M> {
    let Some(insight) = insight else {
        return shell::loading(i18n);
    };

    Column::new()
        .spacing(spacing::LG)
        .push(cards::insight_card(insight, cards::Mood::Neutral, &[], i18n))
        .into()
}
