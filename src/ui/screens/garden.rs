// SPDX-License-Identifier: MPL-2.0
//! Garden screen: collection counters and recent insights.

use crate::app::routes::Route;
use crate::domain::{GardenInsight, GardenOverview};
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::shell::{self, Message};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub overview: Option<&'a GardenOverview>,
    pub insights: Option<&'a [GardenInsight]>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (Some(overview), Some(insights)) = (ctx.overview, ctx.insights) else {
        return shell::loading(ctx.i18n);
    };

    let mut collections = Row::new().spacing(spacing::MD);
    for collection in &overview.collections {
        collections = collections.push(
            container(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(collection.name.as_str()).size(typography::BODY))
                    .push(
                        Text::new(format!(
                            "{} {}",
                            collection.insight_count,
                            ctx.i18n.tr("garden-insight-count-suffix")
                        ))
                        .size(typography::CAPTION),
                    ),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card),
        );
    }

    let counters = Row::new()
        .spacing(spacing::LG)
        .push(
            Text::new(format!(
                "{}: {}",
                ctx.i18n.tr("garden-experiments-label"),
                overview.experiments
            ))
            .size(typography::BODY_SM),
        )
        .push(
            Text::new(format!(
                "{}: {}",
                ctx.i18n.tr("garden-open-questions-label"),
                overview.open_questions
            ))
            .size(typography::BODY_SM),
        );

    let mut insight_list = Column::new().spacing(spacing::MD);
    for insight in insights {
        insight_list = insight_list.push(
            button(cards::insight_card(insight, cards::Mood::Neutral, &[], ctx.i18n))
                .style(styles::button::link)
                .padding(0)
                .on_press(Message::Navigate(Route::Insight {
                    id: insight.id.clone(),
                })),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(shell::page_section(
            ctx.i18n.tr("garden-collections-section"),
            None,
            Column::new()
                .spacing(spacing::SM)
                .push(collections)
                .push(counters)
                .into(),
        ))
        .push(shell::page_section(
            ctx.i18n.tr("garden-insights-section"),
            None,
            insight_list.into(),
        ))
        .into()
}
