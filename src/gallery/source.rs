// SPDX-License-Identifier: MPL-2.0
//! Where a gallery's images come from.

use crate::domain::gallery::ImageRef;

/// One slide of a slide-based gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSpec {
    pub reference: ImageRef,
    /// Deferred slides are fetched the first time they become active.
    pub deferred: bool,
}

impl SlideSpec {
    /// A slide whose image loads as soon as the gallery is built.
    #[must_use]
    pub fn eager(reference: impl Into<ImageRef>) -> Self {
        Self {
            reference: reference.into(),
            deferred: false,
        }
    }

    /// A slide whose image loads on first show.
    #[must_use]
    pub fn deferred(reference: impl Into<ImageRef>) -> Self {
        Self {
            reference: reference.into(),
            deferred: true,
        }
    }
}

/// The two gallery shapes a host can provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GallerySource {
    /// A carousel of slides, optionally with one indicator per slide.
    Slides(Vec<SlideSpec>),
    /// A single main image plus a thumbnail strip.
    ///
    /// `thumbnails[0]` mirrors the main image, so the image list is the main
    /// reference followed by `thumbnails[1..]`.
    MainWithThumbnails {
        main: ImageRef,
        thumbnails: Vec<ImageRef>,
    },
}

impl GallerySource {
    /// Collects the ordered image list.
    #[must_use]
    pub fn images(&self) -> Vec<ImageRef> {
        match self {
            Self::Slides(slides) => slides.iter().map(|slide| slide.reference.clone()).collect(),
            Self::MainWithThumbnails { main, thumbnails } => std::iter::once(main.clone())
                .chain(thumbnails.iter().skip(1).cloned())
                .collect(),
        }
    }

    /// Builds a main-image source from a plain list, the first entry being
    /// the main image.
    #[must_use]
    pub fn from_images(images: Vec<ImageRef>) -> Option<Self> {
        let main = images.first()?.clone();
        Some(Self::MainWithThumbnails {
            main,
            thumbnails: images,
        })
    }

    #[must_use]
    pub fn is_main_image(&self) -> bool {
        matches!(self, Self::MainWithThumbnails { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_image_list_skips_mirrored_first_thumbnail() {
        let source = GallerySource::MainWithThumbnails {
            main: "main.jpg".into(),
            thumbnails: vec!["thumb0.jpg".into(), "b.jpg".into(), "c.jpg".into()],
        };
        assert_eq!(
            source.images(),
            vec![
                ImageRef::from("main.jpg"),
                ImageRef::from("b.jpg"),
                ImageRef::from("c.jpg")
            ]
        );
    }

    #[test]
    fn main_image_without_thumbnails_still_has_one_image() {
        let source = GallerySource::MainWithThumbnails {
            main: "main.jpg".into(),
            thumbnails: Vec::new(),
        };
        assert_eq!(source.images().len(), 1);
    }

    #[test]
    fn slides_keep_their_order() {
        let source = GallerySource::Slides(vec![
            SlideSpec::eager("a.jpg"),
            SlideSpec::deferred("b.jpg"),
        ]);
        assert_eq!(
            source.images(),
            vec![ImageRef::from("a.jpg"), ImageRef::from("b.jpg")]
        );
    }

    #[test]
    fn from_images_requires_at_least_one() {
        assert!(GallerySource::from_images(Vec::new()).is_none());
        let source = GallerySource::from_images(vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(source.images().len(), 2);
    }
}
