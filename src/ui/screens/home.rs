// SPDX-License-Identifier: MPL-2.0
//! Home screen: focus snapshot, quick links, reminders, and stats.

use crate::app::routes::Route;
use crate::domain::{HomeOverview, WorkspaceStat};
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::shell::{self, Message};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub overview: Option<&'a HomeOverview>,
    pub stats: Option<&'a [WorkspaceStat]>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (Some(overview), Some(stats)) = (ctx.overview, ctx.stats) else {
        return shell::loading(ctx.i18n);
    };

    let focus = container(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("home-focus-label")).size(typography::CAPTION))
            .push(Text::new(overview.focus_area.as_str()).size(typography::TITLE_SM))
            .push(Text::new(ctx.i18n.tr("home-milestone-label")).size(typography::CAPTION))
            .push(Text::new(overview.next_milestone.as_str()).size(typography::BODY)),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card);

    let mut links = Row::new().spacing(spacing::SM);
    for link in &overview.quick_links {
        let label = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(link.label.as_str()).size(typography::BODY))
            .push(Text::new(link.description.as_str()).size(typography::CAPTION));
        let mut link_button = button(label)
            .style(styles::button::secondary)
            .padding(spacing::SM)
            .width(Length::Fill);
        // Hrefs come from fixture data; anything unparsable stays inert.
        if let Ok(route) = Route::parse(&link.href) {
            link_button = link_button.on_press(Message::Navigate(route));
        }
        links = links.push(link_button);
    }

    let mut reminders = Column::new().spacing(spacing::XS);
    for reminder in &overview.reminders {
        reminders = reminders.push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new("\u{2022}").size(typography::BODY))
                .push(Text::new(reminder.as_str()).size(typography::BODY)),
        );
    }

    let mut stat_row = Row::new().spacing(spacing::MD);
    for stat in stats {
        stat_row = stat_row.push(cards::stat_card(stat));
    }

    Column::new()
        .spacing(spacing::LG)
        .push(focus)
        .push(shell::page_section(
            ctx.i18n.tr("home-links-section"),
            None,
            links.into(),
        ))
        .push(shell::page_section(
            ctx.i18n.tr("home-reminders-section"),
            None,
            container(reminders)
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::card)
                .into(),
        ))
        .push(stat_row)
        .into()
}
