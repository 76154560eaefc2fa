// SPDX-License-Identifier: MPL-2.0
//! Host page owning several galleries and at most one fullscreen overlay.
//!
//! The page decides who receives raw input:
//! - document-level key listeners (zoom reset, overlay) run first, in
//!   registration order;
//! - arrow keys then go to the focused gallery, unless an overlay was open;
//! - a touch belongs to the gallery under the pointer (or the focused one)
//!   from start to end;
//! - image load outcomes go to every element showing that reference.

use super::capabilities::GalleryLayout;
use super::controller::{self, GalleryController, GalleryOptions};
use super::fullscreen::{self, FullscreenOverlay};
use super::input::Key;
use super::listeners::{KeyboardListeners, ListenerDisposer, ListenerTarget};
use super::source::GallerySource;
use crate::domain::gallery::{GalleryId, ImageRef, TabIndex};

/// Messages handled by the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Gallery(GalleryId, controller::Message),
    Overlay(fullscreen::Message),
    KeyPressed(Key),
    Focus(GalleryId),
    PointerEntered(GalleryId),
    PointerLeft(GalleryId),
    TouchStarted { x: f32 },
    TouchEnded { x: f32 },
    ImageLoaded(ImageRef),
    ImageFailed(ImageRef),
}

/// Effects produced by page messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Load(Vec<ImageRef>),
}

impl Effect {
    fn from_loads(loads: Vec<ImageRef>) -> Self {
        let mut unique: Vec<ImageRef> = Vec::with_capacity(loads.len());
        for reference in loads {
            if !unique.contains(&reference) {
                unique.push(reference);
            }
        }
        let loads = unique;
        if loads.is_empty() {
            Self::None
        } else {
            Self::Load(loads)
        }
    }
}

#[derive(Debug)]
struct GalleryEntry {
    id: GalleryId,
    controller: GalleryController,
    tab_index: TabIndex,
    /// Kept for the page's lifetime; dropped with the page.
    _zoom_listener: Option<ListenerDisposer>,
}

#[derive(Debug, Default)]
pub struct GalleryPage {
    galleries: Vec<GalleryEntry>,
    focused: Option<GalleryId>,
    hovered: Option<GalleryId>,
    touch_owner: Option<GalleryId>,
    listeners: KeyboardListeners,
    overlay: Option<FullscreenOverlay>,
    options: GalleryOptions,
    next_id: u32,
}

impl GalleryPage {
    #[must_use]
    pub fn new(options: GalleryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Adds a gallery and returns its id with the references to fetch.
    pub fn add_gallery(
        &mut self,
        source: GallerySource,
        layout: &GalleryLayout,
    ) -> (GalleryId, Vec<ImageRef>) {
        let id = GalleryId::new(self.next_id);
        self.next_id += 1;

        let controller = GalleryController::new(source, layout, self.options.clone());
        let loads = controller.pending_loads();
        let zoom_listener = controller
            .capabilities()
            .zoom
            .then(|| self.listeners.register(ListenerTarget::GalleryZoom(id)));

        tracing::debug!(
            gallery = id.value(),
            images = controller.images().len(),
            "gallery added"
        );
        self.galleries.push(GalleryEntry {
            id,
            controller,
            tab_index: TabIndex::new(layout.tab_index.unwrap_or(0)),
            _zoom_listener: zoom_listener,
        });
        (id, loads)
    }

    /// Handles a page message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Gallery(id, gallery_msg) => self.handle_gallery(id, gallery_msg),
            Message::Overlay(overlay_msg) => self.handle_overlay(overlay_msg),
            Message::KeyPressed(key) => self.handle_key(key),
            Message::Focus(id) => {
                self.focus(id);
                Effect::None
            }
            Message::PointerEntered(id) => {
                self.hovered = Some(id);
                Effect::None
            }
            Message::PointerLeft(id) => {
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
                Effect::None
            }
            Message::TouchStarted { x } => {
                if self.overlay.is_some() {
                    return Effect::None;
                }
                let Some(target) = self.hovered.or(self.focused) else {
                    return Effect::None;
                };
                self.touch_owner = Some(target);
                self.forward(target, controller::Message::TouchStarted { x })
            }
            Message::TouchEnded { x } => match self.touch_owner.take() {
                Some(owner) => self.forward(owner, controller::Message::TouchEnded { x }),
                None => Effect::None,
            },
            Message::ImageLoaded(reference) => {
                for entry in &mut self.galleries {
                    entry
                        .controller
                        .handle(controller::Message::ImageLoaded(reference.clone()));
                }
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.handle(
                        fullscreen::Message::ImageLoaded(reference),
                        &mut self.listeners,
                    );
                }
                Effect::None
            }
            Message::ImageFailed(reference) => {
                let mut loads = Vec::new();
                for entry in &mut self.galleries {
                    if let controller::Effect::Load(refs) = entry
                        .controller
                        .handle(controller::Message::ImageFailed(reference.clone()))
                    {
                        loads.extend(refs);
                    }
                }
                if let Some(overlay) = self.overlay.as_mut() {
                    if let fullscreen::Effect::Load(replacement) = overlay.handle(
                        fullscreen::Message::ImageFailed(reference),
                        &mut self.listeners,
                    ) {
                        loads.push(replacement);
                    }
                }
                Effect::from_loads(loads)
            }
        }
    }

    fn handle_gallery(&mut self, id: GalleryId, msg: controller::Message) -> Effect {
        // The overlay is modal: galleries underneath take no commands.
        if self.overlay.is_some() {
            return Effect::None;
        }
        // Pointer interaction with a gallery's controls focuses it.
        if matches!(
            msg,
            controller::Message::Previous
                | controller::Message::Next
                | controller::Message::ThumbStripPrevious
                | controller::Message::ThumbStripNext
                | controller::Message::ThumbnailPressed(_)
                | controller::Message::ToggleZoom
                | controller::Message::OpenFullscreen
        ) {
            self.focus(id);
        }
        self.forward(id, msg)
    }

    fn forward(&mut self, id: GalleryId, msg: controller::Message) -> Effect {
        let Some(entry) = self.galleries.iter_mut().find(|entry| entry.id == id) else {
            return Effect::None;
        };
        match entry.controller.handle(msg) {
            controller::Effect::None => Effect::None,
            controller::Effect::Load(loads) => Effect::from_loads(loads),
            controller::Effect::OpenFullscreen { images, index } => {
                self.open_overlay(images, index)
            }
        }
    }

    fn handle_overlay(&mut self, msg: fullscreen::Message) -> Effect {
        let Some(overlay) = self.overlay.as_mut() else {
            return Effect::None;
        };
        match overlay.handle(msg, &mut self.listeners) {
            fullscreen::Effect::None => Effect::None,
            fullscreen::Effect::Load(reference) => Effect::Load(vec![reference]),
            fullscreen::Effect::Closed => {
                self.overlay = None;
                Effect::None
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> Effect {
        let overlay_was_open = self.overlay.is_some();

        if let Key::Tab { shift } = key {
            if !overlay_was_open {
                self.cycle_focus(shift);
            }
            return Effect::None;
        }

        let mut loads = Vec::new();
        for target in self.listeners.targets() {
            match target {
                ListenerTarget::GalleryZoom(id) if key == Key::Escape => {
                    self.forward(id, controller::Message::EscapePressed);
                }
                ListenerTarget::GalleryZoom(_) => {}
                ListenerTarget::Overlay => {
                    if let Effect::Load(refs) = self.handle_overlay(fullscreen::Message::Key(key))
                    {
                        loads.extend(refs);
                    }
                }
            }
        }

        if !overlay_was_open && key.step().is_some() {
            if let Some(id) = self.focused {
                if let Effect::Load(refs) = self.forward(id, controller::Message::Key(key)) {
                    loads.extend(refs);
                }
            }
        }
        Effect::from_loads(loads)
    }

    fn open_overlay(&mut self, images: Vec<ImageRef>, index: usize) -> Effect {
        self.close_overlay();
        match FullscreenOverlay::open(
            images,
            index,
            self.options.placeholder.clone(),
            &mut self.listeners,
        ) {
            Some((overlay, first)) => {
                self.overlay = Some(overlay);
                Effect::Load(vec![first])
            }
            None => Effect::None,
        }
    }

    /// Closes the overlay if one is open.
    pub fn close_overlay(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.close(&mut self.listeners);
        }
    }

    /// Gives keyboard focus to a gallery.
    pub fn focus(&mut self, id: GalleryId) {
        if self.galleries.iter().any(|entry| entry.id == id) {
            self.focused = Some(id);
        }
    }

    fn cycle_focus(&mut self, reverse: bool) {
        let mut order: Vec<(usize, &GalleryEntry)> = self
            .galleries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.tab_index.is_tabbable())
            .collect();
        order.sort_by_key(|(position, entry)| (entry.tab_index.order_key(), *position));
        let ids: Vec<GalleryId> = order.into_iter().map(|(_, entry)| entry.id).collect();
        if ids.is_empty() {
            return;
        }

        let current = self
            .focused
            .and_then(|focused| ids.iter().position(|id| *id == focused));
        let next = match (current, reverse) {
            (None, false) => 0,
            (None, true) => ids.len() - 1,
            (Some(i), false) => (i + 1) % ids.len(),
            (Some(i), true) => (i + ids.len() - 1) % ids.len(),
        };
        self.focused = ids.get(next).copied();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn gallery(&self, id: GalleryId) -> Option<&GalleryController> {
        self.galleries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.controller)
    }

    /// Galleries in page order.
    pub fn galleries(&self) -> impl Iterator<Item = (GalleryId, &GalleryController)> {
        self.galleries
            .iter()
            .map(|entry| (entry.id, &entry.controller))
    }

    /// Whether a gallery or the overlay points an element at `reference`.
    #[must_use]
    pub fn shows(&self, reference: &ImageRef) -> bool {
        self.galleries
            .iter()
            .any(|entry| entry.controller.shows(reference))
            || self
                .overlay
                .as_ref()
                .is_some_and(|overlay| overlay.image().src() == Some(reference))
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&FullscreenOverlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn focused(&self) -> Option<GalleryId> {
        self.focused
    }

    #[must_use]
    pub fn listeners(&self) -> &KeyboardListeners {
        &self.listeners
    }

    #[must_use]
    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }
}
