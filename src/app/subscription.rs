// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses and touches are routed to the gallery page, which
//! decides which gallery or overlay receives them.

use super::Message;
use crate::gallery::{page, Key};
use iced::{event, time, touch, Event, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss check.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Maps a native event to a gallery page message.
///
/// Keys already captured by a widget (e.g. typing in a text input) are left
/// alone.
#[must_use]
pub fn route_event(event: &Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard_event) => {
            if status == event::Status::Captured {
                return None;
            }
            Key::from_event(keyboard_event).map(|key| Message::Gallery(page::Message::KeyPressed(key)))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::Gallery(page::Message::TouchStarted { x: position.x }))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::Gallery(page::Message::TouchEnded { x: position.x }))
        }
        _ => None,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| route_event(&event, status))
}

/// Ticks only while toasts are shown.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
