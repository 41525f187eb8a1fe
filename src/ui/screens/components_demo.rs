// SPDX-License-Identifier: MPL-2.0
//! Components demo screen: a selectable showcase of the UI kit.
//!
//! Every component renders over local fixtures held in the screen state.
//! The embedded review session and audio player are live, but their events
//! go nowhere — this screen exists to look at components, not to act on
//! them.

use crate::domain::{GardenInsight, SummaryDocument};
use crate::i18n::fluent::I18n;
use crate::ui::audio_player;
use crate::ui::cards;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::review_session::{self, ViewContext as SessionContext};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// The showcased components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoComponent {
    IdeaCard,
    SummaryHeader,
    AudioPlayer,
    InsightCard,
    ReviewSession,
}

impl DemoComponent {
    const ALL: [DemoComponent; 5] = [
        DemoComponent::IdeaCard,
        DemoComponent::SummaryHeader,
        DemoComponent::AudioPlayer,
        DemoComponent::InsightCard,
        DemoComponent::ReviewSession,
    ];

    fn name(self) -> &'static str {
        match self {
            DemoComponent::IdeaCard => "IdeaCard",
            DemoComponent::SummaryHeader => "SummaryHeader",
            DemoComponent::AudioPlayer => "AudioPlayer",
            DemoComponent::InsightCard => "InsightCard",
            DemoComponent::ReviewSession => "ReviewSession",
        }
    }

    fn blurb_key(self) -> &'static str {
        match self {
            DemoComponent::IdeaCard => "demo-idea-card-blurb",
            DemoComponent::SummaryHeader => "demo-summary-header-blurb",
            DemoComponent::AudioPlayer => "demo-audio-player-blurb",
            DemoComponent::InsightCard => "demo-insight-card-blurb",
            DemoComponent::ReviewSession => "demo-review-session-blurb",
        }
    }
}

/// Demo screen state; rebuilt from fixtures on every visit.
#[derive(Debug)]
pub struct State {
    selected: Option<DemoComponent>,
    audio: audio_player::State,
    review: review_session::State,
    idea_cards: Vec<cards::IdeaCard>,
    insight_cards: Vec<(GardenInsight, cards::Mood, Vec<cards::Metric>)>,
    summary: SummaryDocument,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: None,
            audio: audio_player::State::new("Q4 Strategy Recording", Some("Jordan Smart"), 485),
            review: review_session::State::new(crate::data::fixtures::review_queue()),
            idea_cards: cards::demo_idea_cards(),
            insight_cards: cards::demo_insight_cards(),
            summary: SummaryDocument {
                slug: "q4-product-strategy".to_string(),
                title: "Q4 Product Strategy".to_string(),
                summary: "Consolidating insights from user interviews and market research"
                    .to_string(),
                highlights: vec![
                    "Signal: Async rituals drive focus".to_string(),
                    "Decision: Maintain dual ritual cadence".to_string(),
                ],
                last_updated: "2024-11-18".to_string(),
            },
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages emitted by the demo screen.
#[derive(Debug, Clone)]
pub enum Message {
    Select(DemoComponent),
    Audio(audio_player::Message),
    Review(review_session::Message),
}

/// Process a demo screen message.
///
/// Embedded component events are dropped on purpose: the showcase passes
/// no callbacks, mirroring how the components render with defaults.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Select(component) => state.selected = Some(component),
        Message::Audio(message) => {
            let _ = audio_player::update(&mut state.audio, message);
        }
        Message::Review(message) => {
            let _ = review_session::update(&mut state.review, message);
        }
    }
}

/// Render the demo screen.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut picker = Row::new().spacing(spacing::SM);
    for component in DemoComponent::ALL {
        let style = if state.selected == Some(component) {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        picker = picker.push(
            button(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(component.name()).size(typography::BODY_SM))
                    .push(Text::new(i18n.tr(component.blurb_key())).size(typography::CAPTION)),
            )
            .style(style)
            .padding(spacing::SM)
            .width(Length::Fill)
            .on_press(Message::Select(component)),
        );
    }

    let library = shell::page_section(
        i18n.tr("demo-library-section"),
        Some(i18n.tr("demo-library-description")),
        picker.into(),
    );

    let showcase: Element<'_, Message> = match state.selected {
        None => Text::new(i18n.tr("demo-pick-hint")).size(typography::BODY).into(),
        Some(DemoComponent::IdeaCard) => {
            let mut list = Column::new().spacing(spacing::MD);
            for card in &state.idea_cards {
                list = list.push(cards::idea_card(card, i18n));
            }
            list.into()
        }
        Some(DemoComponent::SummaryHeader) => cards::summary_header(&state.summary, i18n),
        Some(DemoComponent::AudioPlayer) => {
            audio_player::view(&state.audio, i18n).map(Message::Audio)
        }
        Some(DemoComponent::InsightCard) => {
            let mut list = Column::new().spacing(spacing::MD);
            for (insight, mood, metrics) in &state.insight_cards {
                list = list.push(cards::insight_card(insight, *mood, metrics, i18n));
            }
            list.into()
        }
        Some(DemoComponent::ReviewSession) => review_session::view(SessionContext {
            i18n,
            state: &state.review,
        })
        .map(Message::Review),
    };

    Column::new()
        .spacing(spacing::LG)
        .push(library)
        .push(showcase)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_demo_has_nothing_selected() {
        let state = State::new();
        assert_eq!(state.selected, None);
        assert!(!state.audio.is_playing());
        assert_eq!(state.review.len(), 3);
    }

    #[test]
    fn selecting_a_component_sticks() {
        let mut state = State::new();
        update(&mut state, Message::Select(DemoComponent::AudioPlayer));
        assert_eq!(state.selected, Some(DemoComponent::AudioPlayer));
    }

    #[test]
    fn embedded_audio_messages_reach_the_player() {
        let mut state = State::new();
        update(
            &mut state,
            Message::Audio(audio_player::Message::TogglePlayback),
        );
        assert!(state.audio.is_playing());
    }

    #[test]
    fn embedded_review_dispositions_advance_without_side_effects() {
        let mut state = State::new();
        update(&mut state, Message::Review(review_session::Message::Approve));
        assert_eq!(state.review.current_index(), 1);
    }
}
