// SPDX-License-Identifier: MPL-2.0
//! Card components shared across screens.
//!
//! All cards are pure functions of their inputs and emit no messages, so
//! they stay generic over the host's message type.

use crate::domain::{
    CircleSummary, GardenInsight, LearningPath, Milestone, ReviewItemKind, SummaryDocument, Trend,
    WorkspaceStat,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{Color, Element, Length};

/// Lifecycle badge shown on idea cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaStatus {
    Draft,
    Active,
    Archived,
    Planted,
}

impl IdeaStatus {
    fn label_key(self) -> &'static str {
        match self {
            IdeaStatus::Draft => "status-draft",
            IdeaStatus::Active => "status-active",
            IdeaStatus::Archived => "status-archived",
            IdeaStatus::Planted => "status-planted",
        }
    }

    fn tint(self) -> Color {
        match self {
            IdeaStatus::Draft => palette::SLATE_400,
            IdeaStatus::Active => palette::SUCCESS_500,
            IdeaStatus::Archived => palette::SLATE_400,
            IdeaStatus::Planted => palette::INFO_500,
        }
    }
}

/// Display properties for an idea card.
#[derive(Debug, Clone)]
pub struct IdeaCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: IdeaStatus,
    pub created_at: String,
    pub author: Option<String>,
}

/// Border mood for an insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Neutral,
    Good,
    Warning,
}

/// A labeled metric rendered inside an insight card.
#[derive(Debug, Clone)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

fn badge<'a, M: 'a>(label: String, tint: Color) -> Element<'a, M> {
    container(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(tint))
        .into()
}

fn tag_row<'a, M: 'a>(tags: &'a [String]) -> Element<'a, M> {
    let mut row = Row::new().spacing(spacing::XS);
    for tag in tags {
        row = row.push(badge(tag.clone(), palette::PRIMARY_500));
    }
    row.into()
}

/// Tint used for a review item kind badge; shared with the review screens.
#[must_use]
pub fn kind_tint(kind: ReviewItemKind) -> Color {
    match kind {
        ReviewItemKind::Seed => palette::SUCCESS_500,
        ReviewItemKind::Insight => palette::INFO_500,
        ReviewItemKind::Summary => palette::ACCENT_500,
    }
}

/// Headline metric card for the overview screen.
pub fn stat_card<'a, M: 'a>(stat: &'a WorkspaceStat) -> Element<'a, M> {
    let trend_glyph = match stat.trend {
        Trend::Up => "\u{2191}",
        Trend::Down => "\u{2193}",
        Trend::Steady => "\u{2192}",
    };
    let trend_tint = match stat.trend {
        Trend::Up => palette::SUCCESS_500,
        Trend::Down => palette::ERROR_500,
        Trend::Steady => palette::SLATE_400,
    };

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(stat.label.as_str()).size(typography::BODY_SM))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(Text::new(stat.value.as_str()).size(typography::DISPLAY))
                    .push(badge(trend_glyph.to_string(), trend_tint)),
            )
            .push(Text::new(stat.helper_text.as_str()).size(typography::CAPTION)),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

/// Card for a seed/idea item.
pub fn idea_card<'a, M: 'a>(card: &'a IdeaCard, i18n: &I18n) -> Element<'a, M> {
    let byline = match &card.author {
        Some(author) => format!("{} \u{2022} {}", author, card.created_at),
        None => format!("{} \u{2022} {}", i18n.tr("card-anonymous"), card.created_at),
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(card.title.as_str()).size(typography::TITLE_SM).width(Length::Fill))
                .push(badge(i18n.tr(card.status.label_key()), card.status.tint())),
        )
        .push(Text::new(card.description.as_str()).size(typography::BODY_SM));

    if !card.tags.is_empty() {
        column = column.push(tag_row(&card.tags));
    }

    container(column.push(Text::new(byline).size(typography::CAPTION)))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Card for a garden insight, with optional mood border and metrics.
pub fn insight_card<'a, M: 'a>(
    insight: &'a GardenInsight,
    mood: Mood,
    metrics: &'a [Metric],
    i18n: &I18n,
) -> Element<'a, M> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(insight.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(insight.excerpt.as_str()).size(typography::BODY_SM));

    if !metrics.is_empty() {
        let mut metric_row = Row::new().spacing(spacing::LG);
        for metric in metrics {
            metric_row = metric_row.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(metric.label.as_str()).size(typography::CAPTION))
                    .push(Text::new(metric.value.as_str()).size(typography::BODY)),
            );
        }
        metric_row = metric_row.push(iced::widget::Space::new().width(Length::Fill));
        column = column.push(metric_row);
    }

    column = column.push(tag_row(&insight.tags)).push(
        Text::new(format!(
            "{} {}",
            i18n.tr("insight-last-edited-label"),
            insight.last_edited
        ))
        .size(typography::CAPTION),
    );

    let mood_tint = match mood {
        Mood::Neutral => None,
        Mood::Good => Some(palette::SUCCESS_500),
        Mood::Warning => Some(palette::WARNING_500),
    };

    let card = container(column).padding(spacing::LG).width(Length::Fill);
    match mood_tint {
        Some(tint) => card.style(styles::container::toast(tint)).into(),
        None => card.style(styles::container::card).into(),
    }
}

/// Card for a circle summary.
pub fn circle_card<'a, M: 'a>(circle: &'a CircleSummary, i18n: &I18n) -> Element<'a, M> {
    let visibility = if circle.is_public {
        badge(i18n.tr("circle-public-badge"), palette::SUCCESS_500)
    } else {
        badge(i18n.tr("circle-private-badge"), palette::SLATE_400)
    };

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(circle.name.as_str())
                            .size(typography::TITLE_SM)
                            .width(Length::Fill),
                    )
                    .push(visibility),
            )
            .push(Text::new(circle.description.as_str()).size(typography::BODY_SM))
            .push(
                Text::new(format!(
                    "{} {}",
                    circle.member_count,
                    i18n.tr("circle-members-suffix")
                ))
                .size(typography::CAPTION),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

/// Progress bar built from two nested containers.
pub fn progress_bar<'a, M: 'a>(progress: u32, total: u32) -> Element<'a, M> {
    let fraction = if total == 0 {
        0.0
    } else {
        f64::from(progress) / f64::from(total)
    };
    let filled = (fraction * 100.0).round() as u16;

    let fill = container(iced::widget::Space::new().height(8.0))
        .width(Length::FillPortion(filled.max(1)))
        .style(styles::container::track_fill);
    let rest = container(iced::widget::Space::new().height(8.0))
        .width(Length::FillPortion((100 - filled.min(100)).max(1)))
        .style(styles::container::track);

    Row::new().push(fill).push(rest).width(Length::Fill).into()
}

/// Card for a learning path with its progress.
pub fn path_card<'a, M: 'a>(path: &'a LearningPath, i18n: &I18n) -> Element<'a, M> {
    container(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(path.name.as_str()).size(typography::TITLE_SM))
            .push(Text::new(path.description.as_str()).size(typography::BODY_SM))
            .push(progress_bar(path.progress, path.total_steps))
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
    .style(styles::container::card)
    .into()
}

/// Checklist row for a path milestone.
pub fn milestone_row<'a, M: 'a>(milestone: &'a Milestone) -> Element<'a, M> {
    let marker = if milestone.completed {
        Text::new("\u{2713}").size(typography::BODY).color(palette::SUCCESS_500)
    } else {
        Text::new("\u{25cb}").size(typography::BODY).color(palette::SLATE_400)
    };

    Row::new()
        .spacing(spacing::SM)
        .push(marker)
        .push(Text::new(milestone.title.as_str()).size(typography::BODY))
        .into()
}

/// Header block for a summary document.
pub fn summary_header<'a, M: 'a>(document: &'a SummaryDocument, i18n: &I18n) -> Element<'a, M> {
    container(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(document.title.as_str())
                            .size(typography::TITLE_LG)
                            .width(Length::Fill),
                    )
                    .push(badge(i18n.tr("summary-published-badge"), palette::INFO_500)),
            )
            .push(Text::new(document.summary.as_str()).size(typography::BODY))
            .push(
                Text::new(format!(
                    "{} {}",
                    i18n.tr("summary-last-updated-label"),
                    document.last_updated
                ))
                .size(typography::CAPTION),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

/// Demo fixtures for the components showcase.
#[must_use]
pub fn demo_idea_cards() -> Vec<IdeaCard> {
    vec![
        IdeaCard {
            id: "idea-1".to_string(),
            title: "Async standup experiment".to_string(),
            description: "Test async standups with Pattern Lab to reduce meeting fatigue."
                .to_string(),
            tags: vec![
                "rituals".to_string(),
                "async".to_string(),
                "experiment".to_string(),
            ],
            status: IdeaStatus::Active,
            created_at: "2 days ago".to_string(),
            author: Some("Jordan Smart".to_string()),
        },
        IdeaCard {
            id: "idea-2".to_string(),
            title: "Garden insights dashboard".to_string(),
            description: "Build a visual dashboard to track insight relationships.".to_string(),
            tags: vec!["design".to_string(), "visualization".to_string()],
            status: IdeaStatus::Draft,
            created_at: "1 week ago".to_string(),
            author: Some("Alex Chen".to_string()),
        },
        IdeaCard {
            id: "idea-3".to_string(),
            title: "Review automation workflow".to_string(),
            description: "Automate review queue prioritization based on urgency.".to_string(),
            tags: vec!["automation".to_string(), "productivity".to_string()],
            status: IdeaStatus::Planted,
            created_at: "3 days ago".to_string(),
            author: None,
        },
        IdeaCard {
            id: "idea-4".to_string(),
            title: "Circle feedback ladder".to_string(),
            description: "Implement a feedback structure for healthier circle dynamics."
                .to_string(),
            tags: vec!["circles".to_string(), "feedback".to_string()],
            status: IdeaStatus::Archived,
            created_at: "2 weeks ago".to_string(),
            author: Some("Sam Rivera".to_string()),
        },
    ]
}

/// Demo insight cards with moods and metrics for the showcase.
#[must_use]
pub fn demo_insight_cards() -> Vec<(GardenInsight, Mood, Vec<Metric>)> {
    vec![
        (
            GardenInsight {
                id: "insight-1".to_string(),
                title: "Async standups cut blocker time".to_string(),
                excerpt: "Teams reported 32% faster unblock rates after adopting async rituals \
                          for status updates."
                    .to_string(),
                tags: vec!["async".to_string(), "rituals".to_string()],
                last_edited: "2 days ago".to_string(),
            },
            Mood::Good,
            vec![
                Metric {
                    label: "Impact".to_string(),
                    value: "+32%".to_string(),
                },
                Metric {
                    label: "Confidence".to_string(),
                    value: "High".to_string(),
                },
            ],
        ),
        (
            GardenInsight {
                id: "insight-2".to_string(),
                title: "Circle feedback fatigue".to_string(),
                excerpt: "Circles without ritual breaks see burnout after 6 weeks of weekly \
                          feedback sessions."
                    .to_string(),
                tags: vec!["circles".to_string(), "feedback".to_string()],
                last_edited: "5 days ago".to_string(),
            },
            Mood::Warning,
            vec![Metric {
                label: "Risk".to_string(),
                value: "Medium".to_string(),
            }],
        ),
    ]
}
