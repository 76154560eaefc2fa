// SPDX-License-Identifier: MPL-2.0
//! Document-level keyboard listener registry.
//!
//! Listeners receive every key press regardless of focus and run in
//! registration order. Registering returns a [`ListenerDisposer`], the only
//! way to remove the listener again.

use crate::domain::gallery::GalleryId;

/// Who a document-level listener delivers keys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    /// A gallery's zoom reset on Escape.
    GalleryZoom(GalleryId),
    /// The open fullscreen overlay.
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ListenerId(u64);

/// Removes its listener when disposed. Not cloneable, so a listener is
/// removed at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a disposer leaves its listener registered"]
pub struct ListenerDisposer {
    id: ListenerId,
}

impl ListenerDisposer {
    /// Removes the listener.
    pub fn dispose(self, registry: &mut KeyboardListeners) {
        registry.remove(self.id);
    }
}

/// Ordered set of document-level keyboard listeners.
#[derive(Debug, Clone, Default)]
pub struct KeyboardListeners {
    entries: Vec<(ListenerId, ListenerTarget)>,
    next_id: u64,
}

impl KeyboardListeners {
    pub fn register(&mut self, target: ListenerTarget) -> ListenerDisposer {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, target));
        tracing::debug!(?target, count = self.entries.len(), "keyboard listener registered");
        ListenerDisposer { id }
    }

    fn remove(&mut self, id: ListenerId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        tracing::debug!(count = self.entries.len(), "keyboard listener removed");
    }

    /// Targets in registration order.
    #[must_use]
    pub fn targets(&self) -> Vec<ListenerTarget> {
        self.entries.iter().map(|(_, target)| *target).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, target: ListenerTarget) -> bool {
        self.entries.iter().any(|(_, entry)| *entry == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_keep_registration_order() {
        let mut registry = KeyboardListeners::default();
        let _zoom = registry.register(ListenerTarget::GalleryZoom(GalleryId::new(1)));
        let _overlay = registry.register(ListenerTarget::Overlay);
        assert_eq!(
            registry.targets(),
            vec![
                ListenerTarget::GalleryZoom(GalleryId::new(1)),
                ListenerTarget::Overlay
            ]
        );
    }

    #[test]
    fn dispose_removes_only_its_listener() {
        let mut registry = KeyboardListeners::default();
        let first = registry.register(ListenerTarget::Overlay);
        let _second = registry.register(ListenerTarget::Overlay);
        first.dispose(&mut registry);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn repeated_register_dispose_does_not_leak() {
        let mut registry = KeyboardListeners::default();
        for _ in 0..100 {
            registry.register(ListenerTarget::Overlay).dispose(&mut registry);
        }
        assert!(registry.is_empty());
    }
}
