// SPDX-License-Identifier: MPL-2.0
//! Learning path detail: description, progress, and milestone checklist.

use crate::domain::LearningPathDetail;
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{container, Column, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(path: Option<&'a LearningPathDetail>, i18n: &'a I18n) -> Element<'a, M> {
    let Some(path) = path else {
        return shell::loading(i18n);
    };

    let header = container(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(path.name.as_str()).size(typography::TITLE_LG))
            .push(Text::new(path.description.as_str()).size(typography::BODY))
            .push(cards::progress_bar(path.progress, path.total_steps))
            .push(
                Text::new(format!(
                    "{} {} / {} {}",
                    i18n.tr("path-progress-label"),
                    path.progress,
                    path.total_steps,
                    i18n.tr("path-steps-suffix")
                ))
                .size(typography::CAPTION),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card);

    let mut milestones = Column::new().spacing(spacing::SM);
    for milestone in &path.milestones {
        milestones = milestones.push(cards::milestone_row(milestone));
    }

    Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(shell::page_section(
            i18n.tr("path-milestones-section"),
            None,
            container(milestones)
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::card)
                .into(),
        ))
        .into()
}
