// SPDX-License-Identifier: MPL-2.0
//! Audio player interaction state.
//!
//! A UI affordance over an unconnected media source: a playing flag and a
//! seek position, with no decoding or buffering behind them. Hosts receive
//! [`Event`]s on play, pause, and seek and may ignore them freely.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, slider, Column, Row, Text};
use iced::{Element, Length};

/// Local playback state; reinitializes to `{ paused, 0 }` on remount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    title: String,
    artist: Option<String>,
    duration_secs: u32,
    is_playing: bool,
    current_secs: u32,
}

impl State {
    /// Creates a paused player positioned at zero.
    #[must_use]
    pub fn new(title: &str, artist: Option<&str>, duration_secs: u32) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.map(str::to_string),
            duration_secs,
            is_playing: false,
            current_secs: 0,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn current_secs(&self) -> u32 {
        self.current_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Flips the playing flag, reporting the resulting direction.
    pub fn toggle(&mut self) -> Event {
        self.is_playing = !self.is_playing;
        if self.is_playing {
            Event::Played
        } else {
            Event::Paused
        }
    }

    /// Moves the position to `secs`, clamped into `[0, duration]`.
    pub fn seek(&mut self, secs: u32) -> Event {
        self.current_secs = secs.min(self.duration_secs);
        Event::Seeked(self.current_secs)
    }
}

/// Messages emitted by the player widgets.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePlayback,
    Seek(u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Played,
    Paused,
    Seeked(u32),
}

/// Process a player message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TogglePlayback => state.toggle(),
        Message::Seek(secs) => state.seek(secs),
    }
}

/// Renders whole seconds as `m:ss`, e.g. 485 -> `8:05`.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Render the player card.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let toggle_label = if state.is_playing {
        i18n.tr("audio-pause-button")
    } else {
        i18n.tr("audio-play-button")
    };

    let toggle_button = button(Text::new(toggle_label).size(typography::BODY_SM))
        .style(styles::button::primary)
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::TogglePlayback);

    let mut track_info = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(state.title.as_str()).size(typography::BODY));
    if let Some(artist) = &state.artist {
        track_info = track_info.push(Text::new(artist.as_str()).size(typography::BODY_SM));
    }

    let time_display = Text::new(format!(
        "{} / {}",
        format_time(state.current_secs),
        format_time(state.duration_secs)
    ))
    .size(typography::BODY_SM);

    let timeline = slider(
        0..=state.duration_secs.max(1),
        state.current_secs,
        Message::Seek,
    )
    .width(Length::Fill);

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .push(toggle_button)
                    .push(track_info.width(Length::Fill))
                    .push(time_display),
            )
            .push(timeline)
            .push(Text::new(i18n.tr("audio-mock-note")).size(typography::CAPTION)),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> State {
        State::new("Q4 Strategy Recording", Some("Jordan Smart"), 485)
    }

    #[test]
    fn new_player_is_paused_at_zero() {
        let state = player();
        assert!(!state.is_playing());
        assert_eq!(state.current_secs(), 0);
    }

    #[test]
    fn toggle_flips_and_reports_direction() {
        let mut state = player();
        assert_eq!(state.toggle(), Event::Played);
        assert!(state.is_playing());
        assert_eq!(state.toggle(), Event::Paused);
        assert!(!state.is_playing());
    }

    #[test]
    fn seek_within_range_lands_exactly() {
        let mut state = player();
        assert_eq!(state.seek(100), Event::Seeked(100));
        assert_eq!(state.current_secs(), 100);
    }

    #[test]
    fn seek_past_duration_clamps_to_duration() {
        let mut state = player();
        assert_eq!(state.seek(9_999), Event::Seeked(485));
        assert_eq!(state.current_secs(), 485);
    }

    #[test]
    fn seek_does_not_change_the_playing_flag() {
        let mut state = player();
        let _ = state.toggle();
        let _ = state.seek(42);
        assert!(state.is_playing());
    }

    #[test]
    fn format_time_zero_pads_seconds_only() {
        assert_eq!(format_time(485), "8:05");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(3_601), "60:01");
    }

    #[test]
    fn update_routes_messages_to_transitions() {
        let mut state = player();
        assert_eq!(update(&mut state, Message::TogglePlayback), Event::Played);
        assert_eq!(update(&mut state, Message::Seek(700)), Event::Seeked(485));
    }
}
