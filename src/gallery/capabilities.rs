// SPDX-License-Identifier: MPL-2.0
//! Optional gallery features, resolved once when a gallery is built.
//!
//! The host describes which controls it renders with a [`GalleryLayout`].
//! [`Capabilities::resolve`] combines that with the gallery's source, and the
//! controller consults the result for every message instead of re-checking.

use super::source::GallerySource;

/// Controls and regions the host renders around a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryLayout {
    pub prev_next: bool,
    /// Thumbnails for the main-image form, indicator dots for slides.
    pub thumbnails: bool,
    pub thumb_strip_nav: bool,
    pub zoom: bool,
    pub fullscreen: bool,
    pub counter: bool,
    /// Explicit tab position; `None` assigns the default (0).
    pub tab_index: Option<i32>,
}

impl GalleryLayout {
    /// Everything a listing detail page shows.
    #[must_use]
    pub fn full() -> Self {
        Self {
            prev_next: true,
            thumbnails: true,
            thumb_strip_nav: true,
            zoom: true,
            fullscreen: true,
            counter: true,
            tab_index: None,
        }
    }

    /// A carousel with arrows and indicator dots.
    #[must_use]
    pub fn carousel() -> Self {
        Self {
            prev_next: true,
            thumbnails: true,
            ..Self::default()
        }
    }
}

/// Features a gallery actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub prev_next: bool,
    pub thumbnails: bool,
    pub thumb_strip_nav: bool,
    pub zoom: bool,
    pub fullscreen: bool,
    pub counter: bool,
}

impl Capabilities {
    /// Resolves capabilities. An empty gallery has none; zoom and the thumb
    /// strip controls exist only around a main image.
    #[must_use]
    pub fn resolve(layout: &GalleryLayout, source: &GallerySource, image_count: usize) -> Self {
        if image_count == 0 {
            return Self::default();
        }
        let main_image = source.is_main_image();
        Self {
            prev_next: layout.prev_next,
            thumbnails: layout.thumbnails,
            thumb_strip_nav: layout.thumb_strip_nav && main_image,
            zoom: layout.zoom && main_image,
            fullscreen: layout.fullscreen,
            counter: layout.counter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::source::SlideSpec;

    fn main_source() -> GallerySource {
        GallerySource::MainWithThumbnails {
            main: "a.jpg".into(),
            thumbnails: vec!["a.jpg".into(), "b.jpg".into()],
        }
    }

    #[test]
    fn empty_gallery_resolves_to_nothing() {
        let caps = Capabilities::resolve(&GalleryLayout::full(), &GallerySource::Slides(vec![]), 0);
        assert_eq!(caps, Capabilities::default());
    }

    #[test]
    fn zoom_requires_main_image() {
        let slides = GallerySource::Slides(vec![SlideSpec::eager("a.jpg")]);
        let caps = Capabilities::resolve(&GalleryLayout::full(), &slides, 1);
        assert!(!caps.zoom);
        assert!(!caps.thumb_strip_nav);
        assert!(caps.prev_next);

        let caps = Capabilities::resolve(&GalleryLayout::full(), &main_source(), 2);
        assert!(caps.zoom);
        assert!(caps.thumb_strip_nav);
    }

    #[test]
    fn absent_controls_stay_absent() {
        let caps = Capabilities::resolve(&GalleryLayout::default(), &main_source(), 2);
        assert_eq!(caps, Capabilities::default());
    }
}
