// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: one gallery's images, cursor, and rendered elements.
//!
//! Every command funnels into [`GalleryController::show`], which applies the
//! wrapped index and updates exactly the elements that depend on it: the
//! active slide (loading a deferred slide on first show), the main image, the
//! selected thumbnail or indicator, and the counter.

use super::capabilities::{Capabilities, GalleryLayout};
use super::fallback::ImageElement;
use super::input::{Key, Step, SwipeTracker};
use super::source::{GallerySource, SlideSpec};
use crate::config::{GalleryConfig, ZoomOnNavigate, DEFAULT_SWIPE_THRESHOLD_PX};
use crate::domain::gallery::{Cursor, ImageRef, SwipeThreshold};

/// Settings shared by all galleries of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryOptions {
    pub placeholder: ImageRef,
    pub swipe_threshold: SwipeThreshold,
    pub zoom_on_navigate: ZoomOnNavigate,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            placeholder: ImageRef::from(crate::config::DEFAULT_PLACEHOLDER),
            swipe_threshold: SwipeThreshold::default(),
            zoom_on_navigate: ZoomOnNavigate::default(),
        }
    }
}

impl GalleryOptions {
    /// Options from the `[gallery]` section.
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            placeholder: ImageRef::new(config.placeholder.clone()),
            swipe_threshold: SwipeThreshold::new(
                config
                    .swipe_threshold_px
                    .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
            ),
            zoom_on_navigate: config.zoom_on_navigate,
        }
    }
}

/// A carousel slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: ImageElement,
    pub active: bool,
    /// Reference still waiting for the slide's first show.
    deferred: Option<ImageRef>,
}

impl Slide {
    fn new(spec: SlideSpec) -> Self {
        if spec.deferred {
            Self {
                image: ImageElement::empty(),
                active: false,
                deferred: Some(spec.reference),
            }
        } else {
            Self {
                image: ImageElement::with_src(spec.reference),
                active: false,
                deferred: None,
            }
        }
    }

    /// Whether the deferred reference was not requested yet.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        self.deferred.is_some()
    }
}

/// A thumbnail (main-image form) or an indicator dot (slides).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// `None` for indicator dots.
    pub image: Option<ImageElement>,
    pub selected: bool,
}

/// What occupies the gallery's stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Slides(Vec<Slide>),
    MainImage { image: ImageElement, zoomed: bool },
}

/// Messages handled by a single gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Previous,
    Next,
    ThumbStripPrevious,
    ThumbStripNext,
    ThumbnailPressed(usize),
    /// Arrow key delivered while this gallery has focus.
    Key(Key),
    TouchStarted { x: f32 },
    TouchEnded { x: f32 },
    ToggleZoom,
    /// Document-level Escape, delivered regardless of focus.
    EscapePressed,
    OpenFullscreen,
    ImageLoaded(ImageRef),
    ImageFailed(ImageRef),
}

/// Effects produced by gallery messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// References to fetch.
    Load(Vec<ImageRef>),
    /// Open the fullscreen viewer on a snapshot of the images.
    OpenFullscreen { images: Vec<ImageRef>, index: usize },
}

impl Effect {
    fn load(references: Vec<ImageRef>) -> Self {
        if references.is_empty() {
            Self::None
        } else {
            Self::Load(references)
        }
    }
}

/// State of one gallery.
#[derive(Debug, Clone)]
pub struct GalleryController {
    images: Vec<ImageRef>,
    cursor: Option<Cursor>,
    capabilities: Capabilities,
    stage: Stage,
    thumbnails: Vec<Thumbnail>,
    swipe: SwipeTracker,
    options: GalleryOptions,
}

impl GalleryController {
    /// Builds a gallery and renders index 0 right away.
    ///
    /// [`pending_loads`](Self::pending_loads) lists what must be fetched next.
    #[must_use]
    pub fn new(source: GallerySource, layout: &GalleryLayout, options: GalleryOptions) -> Self {
        let images = source.images();
        let capabilities = Capabilities::resolve(layout, &source, images.len());
        let cursor = Cursor::new(images.len());

        let (stage, thumbnails) = match source {
            GallerySource::Slides(specs) => {
                let indicators = if capabilities.thumbnails {
                    vec![
                        Thumbnail {
                            image: None,
                            selected: false,
                        };
                        specs.len()
                    ]
                } else {
                    Vec::new()
                };
                (
                    Stage::Slides(specs.into_iter().map(Slide::new).collect()),
                    indicators,
                )
            }
            GallerySource::MainWithThumbnails { main, thumbnails } => {
                let strip = if capabilities.thumbnails {
                    thumbnails
                        .into_iter()
                        .map(|reference| Thumbnail {
                            image: Some(ImageElement::with_src(reference)),
                            selected: false,
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                (
                    Stage::MainImage {
                        image: ImageElement::with_src(main),
                        zoomed: false,
                    },
                    strip,
                )
            }
        };

        let mut controller = Self {
            images,
            cursor,
            capabilities,
            stage,
            thumbnails,
            swipe: SwipeTracker::default(),
            options,
        };
        controller.show(0);
        controller
    }

    /// Handles a message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Previous if self.capabilities.prev_next => self.step(Step::Previous),
            Message::Next if self.capabilities.prev_next => self.step(Step::Next),
            Message::ThumbStripPrevious if self.capabilities.thumb_strip_nav => {
                self.step(Step::Previous)
            }
            Message::ThumbStripNext if self.capabilities.thumb_strip_nav => self.step(Step::Next),
            Message::ThumbnailPressed(index) if index < self.thumbnails.len() => {
                self.show(isize::try_from(index).unwrap_or(0))
            }
            Message::Key(key) => match key.step() {
                Some(step) => self.step(step),
                None => Effect::None,
            },
            Message::TouchStarted { x } => {
                self.swipe.start(x);
                Effect::None
            }
            Message::TouchEnded { x } => match self.swipe.end(x, self.options.swipe_threshold) {
                Some(step) => self.step(step),
                None => Effect::None,
            },
            Message::ToggleZoom if self.capabilities.zoom => {
                if let Stage::MainImage { zoomed, .. } = &mut self.stage {
                    *zoomed = !*zoomed;
                }
                Effect::None
            }
            Message::EscapePressed => {
                if let Stage::MainImage { zoomed, .. } = &mut self.stage {
                    *zoomed = false;
                }
                Effect::None
            }
            Message::OpenFullscreen if self.capabilities.fullscreen => match self.cursor {
                Some(cursor) => Effect::OpenFullscreen {
                    images: self.images.clone(),
                    index: cursor.index(),
                },
                None => Effect::None,
            },
            Message::ImageLoaded(reference) => {
                self.for_each_element(|element| {
                    element.on_loaded(&reference);
                });
                Effect::None
            }
            Message::ImageFailed(reference) => {
                let placeholder = self.options.placeholder.clone();
                let mut loads = Vec::new();
                self.for_each_element(|element| {
                    if let Some(replacement) = element.on_failed(&reference, &placeholder) {
                        if !loads.contains(&replacement) {
                            loads.push(replacement);
                        }
                    }
                });
                Effect::load(loads)
            }
            // Absent capability or out-of-range thumbnail.
            _ => Effect::None,
        }
    }

    /// Moves to `target`, wrapping out-of-range values, and renders it.
    ///
    /// Does nothing for an empty gallery.
    pub fn show(&mut self, target: isize) -> Effect {
        let Some(cursor) = self.cursor.as_mut() else {
            return Effect::None;
        };
        let previous = cursor.index();
        let index = cursor.show(target);
        tracing::debug!(from = previous, to = index, count = self.images.len(), "gallery show");

        let mut loads = Vec::new();
        match &mut self.stage {
            Stage::Slides(slides) => {
                for (i, slide) in slides.iter_mut().enumerate() {
                    slide.active = i == index;
                    if i == index {
                        if let Some(reference) = slide.deferred.take() {
                            loads.extend(slide.image.set_src(reference));
                        }
                    }
                }
            }
            Stage::MainImage { image, zoomed } => {
                if let Some(reference) = self.images.get(index) {
                    loads.extend(image.set_src(reference.clone()));
                }
                if index != previous && self.options.zoom_on_navigate == ZoomOnNavigate::Reset {
                    *zoomed = false;
                }
            }
        }
        for (i, thumbnail) in self.thumbnails.iter_mut().enumerate() {
            thumbnail.selected = i == index;
        }
        Effect::load(loads)
    }

    fn step(&mut self, step: Step) -> Effect {
        match self.cursor {
            Some(cursor) => {
                let current = isize::try_from(cursor.index()).unwrap_or(0);
                self.show(current + step.offset())
            }
            None => Effect::None,
        }
    }

    fn for_each_element(&mut self, mut apply: impl FnMut(&mut ImageElement)) {
        match &mut self.stage {
            Stage::Slides(slides) => slides.iter_mut().for_each(|slide| apply(&mut slide.image)),
            Stage::MainImage { image, .. } => apply(image),
        }
        self.thumbnails
            .iter_mut()
            .filter_map(|thumbnail| thumbnail.image.as_mut())
            .for_each(apply);
    }

    /// Whether any element of this gallery points at `reference`.
    #[must_use]
    pub fn shows(&self, reference: &ImageRef) -> bool {
        let on_stage = match &self.stage {
            Stage::Slides(slides) => slides
                .iter()
                .any(|slide| slide.image.src() == Some(reference)),
            Stage::MainImage { image, .. } => image.src() == Some(reference),
        };
        on_stage
            || self
                .thumbnails
                .iter()
                .filter_map(|thumbnail| thumbnail.image.as_ref())
                .any(|image| image.src() == Some(reference))
    }

    /// References of every element still waiting for its fetch.
    #[must_use]
    pub fn pending_loads(&self) -> Vec<ImageRef> {
        let mut pending: Vec<ImageRef> = Vec::new();
        let mut push = |element: &ImageElement| {
            if let Some(reference) = element.pending() {
                if !pending.contains(reference) {
                    pending.push(reference.clone());
                }
            }
        };
        match &self.stage {
            Stage::Slides(slides) => slides.iter().for_each(|slide| push(&slide.image)),
            Stage::MainImage { image, .. } => push(image),
        }
        self.thumbnails
            .iter()
            .filter_map(|thumbnail| thumbnail.image.as_ref())
            .for_each(push);
        pending
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Current index, `None` for an empty gallery.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.map(Cursor::index)
    }

    /// One-based position and count for the counter.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.map(|cursor| (cursor.position(), cursor.len()))
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        matches!(self.stage, Stage::MainImage { zoomed: true, .. })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image element currently shown on the stage.
    #[must_use]
    pub fn active_image(&self) -> Option<&ImageElement> {
        let index = self.current_index()?;
        match &self.stage {
            Stage::Slides(slides) => slides.get(index).map(|slide| &slide.image),
            Stage::MainImage { image, .. } => Some(image),
        }
    }

    /// Index of the single active slide or selected thumbnail, if exactly one.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        let from_stage: Vec<usize> = match &self.stage {
            Stage::Slides(slides) => slides
                .iter()
                .enumerate()
                .filter(|(_, slide)| slide.active)
                .map(|(i, _)| i)
                .collect(),
            Stage::MainImage { .. } => Vec::new(),
        };
        let from_strip = self
            .thumbnails
            .iter()
            .enumerate()
            .filter(|(_, thumbnail)| thumbnail.selected)
            .map(|(i, _)| i);
        let mut all: Vec<usize> = from_stage.into_iter().chain(from_strip).collect();
        all.sort_unstable();
        all.dedup();
        all
    }
}
