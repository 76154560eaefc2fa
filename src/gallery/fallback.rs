// SPDX-License-Identifier: MPL-2.0
//! Tracked image elements and their one-shot placeholder fallback.
//!
//! Every rendered image (slide, main image, thumbnail, overlay image) is an
//! [`ImageElement`]. Its [`ImageFallback`] substitutes the placeholder the
//! first time a load fails and then stays disarmed for the element's
//! lifetime, so a missing placeholder cannot loop.

use crate::domain::gallery::ImageRef;

/// One-shot failure handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFallback {
    armed: bool,
}

impl Default for ImageFallback {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl ImageFallback {
    /// Handles a load failure. Returns the placeholder once, then `None`.
    pub fn on_error(&mut self, placeholder: &ImageRef) -> Option<ImageRef> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        Some(placeholder.clone())
    }

    #[must_use]
    pub fn is_armed(self) -> bool {
        self.armed
    }
}

/// Load state of an element's current reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No reference assigned yet (deferred slide not shown).
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Failed after the fallback was spent.
    Failed,
}

/// A rendered image whose source may change over time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageElement {
    src: Option<ImageRef>,
    status: LoadStatus,
    fallback: ImageFallback,
    showing_placeholder: bool,
}

impl ImageElement {
    /// An element with nothing to show yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// An element that starts loading `src` immediately.
    #[must_use]
    pub fn with_src(src: ImageRef) -> Self {
        let mut element = Self::default();
        element.set_src(src);
        element
    }

    #[must_use]
    pub fn src(&self) -> Option<&ImageRef> {
        self.src.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Whether the element currently shows the placeholder image.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.showing_placeholder
    }

    #[must_use]
    pub fn fallback(&self) -> ImageFallback {
        self.fallback
    }

    /// Points the element at `src`. Returns the reference to fetch, or `None`
    /// when the element already shows it.
    pub fn set_src(&mut self, src: ImageRef) -> Option<ImageRef> {
        if self.src.as_ref() == Some(&src) {
            return None;
        }
        self.src = Some(src.clone());
        self.status = LoadStatus::Loading;
        self.showing_placeholder = false;
        Some(src)
    }

    /// Records a successful load. Stale outcomes are ignored.
    pub fn on_loaded(&mut self, reference: &ImageRef) -> bool {
        if self.src.as_ref() != Some(reference) || self.status != LoadStatus::Loading {
            return false;
        }
        self.status = LoadStatus::Loaded;
        true
    }

    /// Records a failed load. Returns the placeholder to fetch on the first
    /// failure; stale outcomes and later failures return `None`.
    pub fn on_failed(&mut self, reference: &ImageRef, placeholder: &ImageRef) -> Option<ImageRef> {
        if self.src.as_ref() != Some(reference) || self.status != LoadStatus::Loading {
            return None;
        }
        match self.fallback.on_error(placeholder) {
            Some(replacement) => {
                tracing::warn!(failed = %reference, placeholder = %replacement, "image failed, using placeholder");
                self.src = Some(replacement.clone());
                self.status = LoadStatus::Loading;
                self.showing_placeholder = true;
                Some(replacement)
            }
            None => {
                tracing::debug!(failed = %reference, "image failed with fallback spent");
                self.status = LoadStatus::Failed;
                None
            }
        }
    }

    /// Reference still waiting for its fetch, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&ImageRef> {
        match self.status {
            LoadStatus::Loading => self.src.as_ref(),
            _ => None,
        }
    }
}
