// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Spinner frame interval (~60 FPS).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes keyboard input that widgets did not consume.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| map_event(&event, status))
}

/// Maps a native event to an application message.
///
/// Escape closes the full-size overlay unless a widget already captured it.
pub fn map_event(event: &Event, status: event::Status) -> Option<Message> {
    if matches!(status, event::Status::Captured) {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Gallery(gallery::Message::Dismiss)),
        _ => None,
    }
}

/// Drives the loading spinner; idle once the gallery has settled.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::{Code, Physical};

    fn key_pressed(named: Named, code: Code) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn escape_dismisses_overlay() {
        let message = map_event(&key_pressed(Named::Escape, Code::Escape), event::Status::Ignored);
        assert!(matches!(
            message,
            Some(Message::Gallery(gallery::Message::Dismiss))
        ));
    }

    #[test]
    fn captured_escape_is_ignored() {
        let message = map_event(
            &key_pressed(Named::Escape, Code::Escape),
            event::Status::Captured,
        );
        assert!(message.is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        let message = map_event(&key_pressed(Named::Enter, Code::Enter), event::Status::Ignored);
        assert!(message.is_none());

        let message = map_event(
            &key_pressed(Named::ArrowRight, Code::ArrowRight),
            event::Status::Ignored,
        );
        assert!(message.is_none());
    }
}
