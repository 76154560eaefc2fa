// SPDX-License-Identifier: MPL-2.0
//! Fullscreen overlay with its own cursor over a snapshot of the images.
//!
//! The overlay never writes its index back to the gallery it came from.
//! Opening registers its keyboard listener and keeps the disposer; closing
//! runs the disposer. Closing twice is a no-op.

use super::fallback::ImageElement;
use super::input::{Key, Step};
use super::listeners::{KeyboardListeners, ListenerDisposer, ListenerTarget};
use crate::domain::gallery::{Cursor, ImageRef};

/// Messages for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Previous,
    Next,
    Close,
    /// A press on the backdrop; absorbed so the page below never sees it.
    BackdropPressed,
    Key(Key),
    ImageLoaded(ImageRef),
    ImageFailed(ImageRef),
}

/// Effects produced by overlay messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Load(ImageRef),
    Closed,
}

#[derive(Debug)]
pub struct FullscreenOverlay {
    images: Vec<ImageRef>,
    cursor: Cursor,
    image: ImageElement,
    placeholder: ImageRef,
    disposer: Option<ListenerDisposer>,
}

impl FullscreenOverlay {
    /// Opens on `images` at `index` and registers the keyboard listener.
    ///
    /// Returns `None` when there is nothing to show. The second element is
    /// the first reference to fetch.
    pub fn open(
        images: Vec<ImageRef>,
        index: usize,
        placeholder: ImageRef,
        listeners: &mut KeyboardListeners,
    ) -> Option<(Self, ImageRef)> {
        let cursor = Cursor::at(images.len(), isize::try_from(index).unwrap_or(0))?;
        let first = images.get(cursor.index())?.clone();
        let disposer = listeners.register(ListenerTarget::Overlay);
        tracing::debug!(index = cursor.index(), count = images.len(), "fullscreen opened");

        let overlay = Self {
            image: ImageElement::with_src(first.clone()),
            images,
            cursor,
            placeholder,
            disposer: Some(disposer),
        };
        Some((overlay, first))
    }

    /// Handles a message. Keys other than Escape and the arrows are ignored.
    pub fn handle(&mut self, msg: Message, listeners: &mut KeyboardListeners) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }
        match msg {
            Message::Previous => self.step(Step::Previous),
            Message::Next => self.step(Step::Next),
            Message::Close | Message::Key(Key::Escape) => {
                self.close(listeners);
                Effect::Closed
            }
            Message::BackdropPressed => Effect::None,
            Message::Key(key) => match key.step() {
                Some(step) => self.step(step),
                None => Effect::None,
            },
            Message::ImageLoaded(reference) => {
                self.image.on_loaded(&reference);
                Effect::None
            }
            Message::ImageFailed(reference) => {
                match self.image.on_failed(&reference, &self.placeholder) {
                    Some(replacement) => Effect::Load(replacement),
                    None => Effect::None,
                }
            }
        }
    }

    /// Removes the overlay's listener. Safe to call repeatedly.
    pub fn close(&mut self, listeners: &mut KeyboardListeners) {
        if let Some(disposer) = self.disposer.take() {
            disposer.dispose(listeners);
            tracing::debug!("fullscreen closed");
        }
    }

    fn step(&mut self, step: Step) -> Effect {
        let index = match step {
            Step::Previous => self.cursor.previous(),
            Step::Next => self.cursor.next(),
        };
        match self.images.get(index) {
            Some(reference) => match self.image.set_src(reference.clone()) {
                Some(load) => Effect::Load(load),
                None => Effect::None,
            },
            None => Effect::None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.disposer.is_some()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    /// Counter text, e.g. `"5 / 5"`.
    #[must_use]
    pub fn counter_text(&self) -> String {
        self.cursor.counter_text()
    }

    #[must_use]
    pub fn image(&self) -> &ImageElement {
        &self.image
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(count: usize) -> Vec<ImageRef> {
        (0..count)
            .map(|i| ImageRef::new(format!("/media/{i}.jpg")))
            .collect()
    }

    fn open(count: usize, index: usize, listeners: &mut KeyboardListeners) -> FullscreenOverlay {
        let (overlay, _) =
            FullscreenOverlay::open(refs(count), index, "/placeholder.jpg".into(), listeners)
                .unwrap();
        overlay
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut listeners = KeyboardListeners::default();
        let mut overlay = open(5, 0, &mut listeners);
        let effect = overlay.handle(Message::Previous, &mut listeners);

        assert_eq!(overlay.current_index(), 4);
        assert_eq!(overlay.counter_text(), "5 / 5");
        assert_eq!(effect, Effect::Load("/media/4.jpg".into()));
    }

    #[test]
    fn backdrop_press_keeps_overlay_open_and_still() {
        let mut listeners = KeyboardListeners::default();
        let mut overlay = open(3, 2, &mut listeners);
        assert_eq!(overlay.handle(Message::BackdropPressed, &mut listeners), Effect::None);
        assert!(overlay.is_open());
        assert_eq!(overlay.current_index(), 2);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn open_counter_reflects_start_index() {
        let mut listeners = KeyboardListeners::default();
        let overlay = open(3, 1, &mut listeners);
        assert_eq!(overlay.counter_text(), "2 / 3");
        assert_eq!(overlay.image().src(), Some(&ImageRef::from("/media/1.jpg")));
    }

    #[test]
    fn empty_images_do_not_open() {
        let mut listeners = KeyboardListeners::default();
        let opened = FullscreenOverlay::open(Vec::new(), 0, "/p.jpg".into(), &mut listeners);
        assert!(opened.is_none());
        assert!(listeners.is_empty());
    }

    #[test]
    fn close_disposes_listener_and_is_idempotent() {
        let mut listeners = KeyboardListeners::default();
        let mut overlay = open(3, 0, &mut listeners);
        assert_eq!(listeners.len(), 1);

        assert_eq!(overlay.handle(Message::Close, &mut listeners), Effect::Closed);
        assert!(listeners.is_empty());
        assert!(!overlay.is_open());

        overlay.close(&mut listeners);
        assert_eq!(overlay.handle(Message::Close, &mut listeners), Effect::None);
        assert!(listeners.is_empty());
    }

    #[test]
    fn keys_navigate_and_escape_closes() {
        let mut listeners = KeyboardListeners::default();
        let mut overlay = open(3, 0, &mut listeners);
        overlay.handle(Message::Key(Key::ArrowRight), &mut listeners);
        overlay.handle(Message::Key(Key::ArrowRight), &mut listeners);
        assert_eq!(overlay.current_index(), 2);
        overlay.handle(Message::Key(Key::ArrowLeft), &mut listeners);
        assert_eq!(overlay.current_index(), 1);
        overlay.handle(Message::Key(Key::Tab { shift: false }), &mut listeners);
        assert_eq!(overlay.current_index(), 1);

        assert_eq!(
            overlay.handle(Message::Key(Key::Escape), &mut listeners),
            Effect::Closed
        );
    }

    #[test]
    fn overlay_fallback_is_independent() {
        let mut listeners = KeyboardListeners::default();
        let mut overlay = open(2, 0, &mut listeners);
        let effect = overlay.handle(Message::ImageFailed("/media/0.jpg".into()), &mut listeners);
        assert_eq!(effect, Effect::Load("/placeholder.jpg".into()));
        assert!(overlay.image().is_placeholder());

        let effect =
            overlay.handle(Message::ImageFailed("/placeholder.jpg".into()), &mut listeners);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn repeated_open_close_cycles_leave_no_listeners() {
        let mut listeners = KeyboardListeners::default();
        for _ in 0..20 {
            let mut overlay = open(4, 2, &mut listeners);
            overlay.handle(Message::Next, &mut listeners);
            overlay.close(&mut listeners);
        }
        assert!(listeners.is_empty());
    }
}
