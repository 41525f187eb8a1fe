// SPDX-License-Identifier: MPL-2.0
//! Summary document screen.

use crate::domain::SummaryDocument;
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(document: Option<&'a SummaryDocument>, i18n: &'a I18n) -> Element<'a, M> {
    let Some(document) = document else {
        return shell::loading(i18n);
    };

    let mut highlights = Column::new().spacing(spacing::XS);
    for highlight in &document.highlights {
        highlights = highlights.push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new("\u{2022}").size(typography::BODY))
                .push(Text::new(highlight.as_str()).size(typography::BODY)),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(cards::summary_header(document, i18n))
        .push(shell::page_section(
            i18n.tr("summary-highlights-section"),
            None,
            container(highlights)
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::card)
                .into(),
        ))
        .into()
}
