// SPDX-License-Identifier: MPL-2.0
//! Account settings screens: profile, billing, and notifications.
//!
//! All three render read-only mock records; nothing here writes back.

use crate::domain::{BillingSettings, NotificationSettings, ProfileSettings};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{Element, Length};

fn field<'a, M: 'a>(label: String, value: String) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(label).size(typography::BODY_SM).width(Length::Fixed(180.0)))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn settings_card<'a, M: 'a>(rows: Vec<Element<'a, M>>) -> Element<'a, M> {
    let mut column = Column::new().spacing(spacing::SM);
    for row in rows {
        column = column.push(row);
    }
    container(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

pub fn profile<'a, M: 'a>(
    settings: Option<&'a ProfileSettings>,
    i18n: &'a I18n,
) -> Element<'a, M> {
    let Some(settings) = settings else {
        return shell::loading(i18n);
    };

    settings_card(vec![
        field(
            i18n.tr("profile-display-name-label"),
            settings.display_name.clone(),
        ),
        field(i18n.tr("profile-role-label"), settings.role.clone()),
        field(i18n.tr("profile-timezone-label"), settings.timezone.clone()),
        field(
            i18n.tr("profile-availability-label"),
            settings.availability.join(", "),
        ),
    ])
}

pub fn billing<'a, M: 'a>(
    settings: Option<&'a BillingSettings>,
    i18n: &'a I18n,
) -> Element<'a, M> {
    let Some(settings) = settings else {
        return shell::loading(i18n);
    };

    settings_card(vec![
        field(i18n.tr("billing-plan-label"), settings.plan.clone()),
        field(i18n.tr("billing-price-label"), settings.price.clone()),
        field(i18n.tr("billing-renews-label"), settings.renews_on.clone()),
        field(i18n.tr("billing-seats-label"), settings.seats.to_string()),
        field(
            i18n.tr("billing-payment-label"),
            settings.payment_method.clone(),
        ),
    ])
}

pub fn notifications<'a, M: 'a>(
    settings: Option<&'a NotificationSettings>,
    i18n: &'a I18n,
) -> Element<'a, M> {
    let Some(settings) = settings else {
        return shell::loading(i18n);
    };

    let toggle_label = |enabled: bool| {
        if enabled {
            i18n.tr("setting-enabled")
        } else {
            i18n.tr("setting-disabled")
        }
    };

    settings_card(vec![
        field(
            i18n.tr("notifications-email-label"),
            toggle_label(settings.email_digests),
        ),
        field(
            i18n.tr("notifications-push-label"),
            toggle_label(settings.push_reminders),
        ),
        field(
            i18n.tr("notifications-weekly-label"),
            settings.weekly_summary_day.clone(),
        ),
    ])
}
