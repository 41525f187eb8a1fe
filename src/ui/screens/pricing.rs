// SPDX-License-Identifier: MPL-2.0
//! Pricing screen: the three subscription tiers.

use crate::domain::{Cadence, PricingPlan};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(plans: Option<&'a [PricingPlan]>, i18n: &'a I18n) -> Element<'a, M> {
    let Some(plans) = plans else {
        return shell::loading(i18n);
    };

    let mut row = Row::new().spacing(spacing::MD);
    for plan in plans {
        row = row.push(plan_card(plan, i18n));
    }
    row.into()
}

fn plan_card<'a, M: 'a>(plan: &'a PricingPlan, i18n: &'a I18n) -> Element<'a, M> {
    let cadence_key = match plan.cadence {
        Cadence::Monthly => "pricing-per-month",
        Cadence::Annual => "pricing-per-year",
    };

    let mut header = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(plan.name.as_str()).size(typography::TITLE_SM).width(Length::Fill));
    if plan.popular {
        header = header.push(
            container(Text::new(i18n.tr("pricing-popular-badge")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::badge(palette::PRIMARY_500)),
        );
    }

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new(plan.price.as_str()).size(typography::DISPLAY))
                .push(Text::new(i18n.tr(cadence_key)).size(typography::CAPTION)),
        )
        .push(Text::new(plan.description.as_str()).size(typography::BODY_SM));

    for feature in &plan.features {
        column = column.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new("\u{2713}").size(typography::BODY_SM).color(palette::SUCCESS_500))
                .push(Text::new(feature.as_str()).size(typography::BODY_SM)),
        );
    }

    container(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
