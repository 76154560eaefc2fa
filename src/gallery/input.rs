// SPDX-License-Identifier: MPL-2.0
//! Raw input translation: keys the gallery reacts to and touch swipes.

use crate::domain::gallery::SwipeThreshold;
use iced::keyboard;

/// Keys with a gallery meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Tab { shift: bool },
}

impl Key {
    /// Extracts a gallery key from a keyboard event. Only presses count.
    #[must_use]
    pub fn from_event(event: &keyboard::Event) -> Option<Self> {
        match event {
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                modifiers,
                ..
            } => Self::from_named(*named, modifiers.shift()),
            _ => None,
        }
    }

    /// Maps a named key, with the Shift state, to a gallery key.
    #[must_use]
    pub fn from_named(named: keyboard::key::Named, shift: bool) -> Option<Self> {
        match named {
            keyboard::key::Named::ArrowLeft => Some(Self::ArrowLeft),
            keyboard::key::Named::ArrowRight => Some(Self::ArrowRight),
            keyboard::key::Named::Escape => Some(Self::Escape),
            keyboard::key::Named::Tab => Some(Self::Tab { shift }),
            _ => None,
        }
    }

    /// Step an arrow key asks for.
    #[must_use]
    pub fn step(self) -> Option<Step> {
        match self {
            Self::ArrowLeft => Some(Step::Previous),
            Self::ArrowRight => Some(Step::Next),
            Self::Escape | Self::Tab { .. } => None,
        }
    }
}

/// A one-image move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Tracks one touch from start to end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the touch. A displacement beyond `threshold` is a swipe; moving
    /// the finger left (`dx < 0`) asks for the next image.
    ///
    /// An end without a matching start does nothing.
    pub fn end(&mut self, x: f32, threshold: SwipeThreshold) -> Option<Step> {
        let start_x = self.start_x.take()?;
        let dx = x - start_x;
        if !threshold.is_exceeded_by(dx) {
            return None;
        }
        if dx < 0.0 {
            Some(Step::Next)
        } else {
            Some(Step::Previous)
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
