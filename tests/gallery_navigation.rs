// SPDX-License-Identifier: MPL-2.0
//! Gallery page behavior driven only through its public messages.

use souq_gallery::config::DEFAULT_PLACEHOLDER;
use souq_gallery::domain::gallery::{GalleryId, ImageRef};
use souq_gallery::gallery::controller::{self, Stage};
use souq_gallery::gallery::fallback::LoadStatus;
use souq_gallery::gallery::listeners::ListenerTarget;
use souq_gallery::gallery::page::{Effect, Message};
use souq_gallery::gallery::{
    fullscreen, GalleryLayout, GalleryOptions, GalleryPage, GallerySource, Key, SlideSpec,
};

fn refs(count: usize) -> Vec<ImageRef> {
    (0..count)
        .map(|i| ImageRef::new(format!("/media/listing_{i}.jpg")))
        .collect()
}

fn page_with_main_gallery(count: usize) -> (GalleryPage, GalleryId) {
    let mut page = GalleryPage::new(GalleryOptions::default());
    let source = GallerySource::from_images(refs(count)).expect("non-empty");
    let (id, _) = page.add_gallery(source, &GalleryLayout::full());
    page.focus(id);
    (page, id)
}

fn send(page: &mut GalleryPage, id: GalleryId, message: controller::Message) -> Effect {
    page.handle(Message::Gallery(id, message))
}

fn index(page: &GalleryPage, id: GalleryId) -> Option<usize> {
    page.gallery(id).and_then(|gallery| gallery.current_index())
}

#[test]
fn next_and_previous_wrap_around_the_ends() {
    let (mut page, id) = page_with_main_gallery(5);

    let _ = send(&mut page, id, controller::Message::Previous);
    assert_eq!(index(&page, id), Some(4));
    assert_eq!(page.gallery(id).and_then(|g| g.position()), Some((5, 5)));

    let _ = send(&mut page, id, controller::Message::Next);
    assert_eq!(index(&page, id), Some(0));
}

#[test]
fn exactly_one_thumbnail_is_selected_after_any_command() {
    let (mut page, id) = page_with_main_gallery(4);

    let _ = send(&mut page, id, controller::Message::ThumbnailPressed(2));
    let _ = send(&mut page, id, controller::Message::ThumbStripNext);
    let _ = page.handle(Message::KeyPressed(Key::ArrowRight));

    let gallery = page.gallery(id).expect("gallery");
    assert_eq!(gallery.selected_indices(), vec![0]);
    assert_eq!(gallery.current_index(), Some(0));
}

#[test]
fn navigating_the_main_image_requests_its_reference() {
    let (mut page, id) = page_with_main_gallery(3);
    let effect = send(&mut page, id, controller::Message::Next);
    assert_eq!(effect, Effect::Load(vec![ImageRef::new("/media/listing_1.jpg")]));
}

#[test]
fn arrow_keys_reach_only_the_focused_gallery() {
    let mut page = GalleryPage::new(GalleryOptions::default());
    let (first, _) = page.add_gallery(
        GallerySource::from_images(refs(3)).expect("non-empty"),
        &GalleryLayout::full(),
    );
    let (second, _) = page.add_gallery(
        GallerySource::Slides(refs(3).into_iter().map(SlideSpec::eager).collect()),
        &GalleryLayout::carousel(),
    );

    let _ = page.handle(Message::KeyPressed(Key::ArrowRight));
    assert_eq!(index(&page, first), Some(0));
    assert_eq!(index(&page, second), Some(0));

    let _ = page.handle(Message::Focus(second));
    let _ = page.handle(Message::KeyPressed(Key::ArrowLeft));
    assert_eq!(index(&page, first), Some(0));
    assert_eq!(index(&page, second), Some(2));
}

#[test]
fn tab_cycles_focus_between_galleries() {
    let mut page = GalleryPage::new(GalleryOptions::default());
    let (first, _) = page.add_gallery(
        GallerySource::from_images(refs(2)).expect("non-empty"),
        &GalleryLayout::full(),
    );
    let (second, _) = page.add_gallery(
        GallerySource::from_images(refs(2)).expect("non-empty"),
        &GalleryLayout::full(),
    );

    let _ = page.handle(Message::KeyPressed(Key::Tab { shift: false }));
    assert_eq!(page.focused(), Some(first));
    let _ = page.handle(Message::KeyPressed(Key::Tab { shift: false }));
    assert_eq!(page.focused(), Some(second));
    let _ = page.handle(Message::KeyPressed(Key::Tab { shift: true }));
    assert_eq!(page.focused(), Some(first));
}

#[test]
fn swipe_left_beyond_threshold_shows_next_image() {
    let (mut page, id) = page_with_main_gallery(3);

    let _ = page.handle(Message::TouchStarted { x: 300.0 });
    let _ = page.handle(Message::TouchEnded { x: 200.0 });
    assert_eq!(index(&page, id), Some(1));

    let _ = page.handle(Message::TouchStarted { x: 100.0 });
    let _ = page.handle(Message::TouchEnded { x: 120.0 });
    assert_eq!(index(&page, id), Some(1));

    let _ = page.handle(Message::TouchStarted { x: 100.0 });
    let _ = page.handle(Message::TouchEnded { x: 250.0 });
    assert_eq!(index(&page, id), Some(0));
}

#[test]
fn fullscreen_is_modal_and_leaves_gallery_index_alone() {
    let (mut page, id) = page_with_main_gallery(4);
    let _ = send(&mut page, id, controller::Message::ThumbnailPressed(1));

    let effect = send(&mut page, id, controller::Message::OpenFullscreen);
    assert_eq!(effect, Effect::Load(vec![ImageRef::new("/media/listing_1.jpg")]));
    assert_eq!(page.overlay().map(|o| o.counter_text()), Some("2 / 4".to_string()));

    let _ = page.handle(Message::KeyPressed(Key::ArrowRight));
    let _ = page.handle(Message::KeyPressed(Key::ArrowRight));
    assert_eq!(page.overlay().map(|o| o.current_index()), Some(3));
    assert_eq!(index(&page, id), Some(1));

    assert_eq!(send(&mut page, id, controller::Message::Next), Effect::None);
    assert_eq!(send(&mut page, id, controller::Message::ThumbnailPressed(3)), Effect::None);
    assert_eq!(index(&page, id), Some(1));

    let _ = page.handle(Message::KeyPressed(Key::Escape));
    assert!(page.overlay().is_none());
    assert!(!page.listeners().targets().contains(&ListenerTarget::Overlay));
    assert_eq!(index(&page, id), Some(1));
}

#[test]
fn overlay_close_button_removes_listener() {
    let (mut page, id) = page_with_main_gallery(2);
    let _ = send(&mut page, id, controller::Message::OpenFullscreen);
    assert!(page.listeners().targets().contains(&ListenerTarget::Overlay));

    let _ = page.handle(Message::Overlay(fullscreen::Message::Close));
    assert!(page.overlay().is_none());
    assert_eq!(page.listeners().targets(), vec![ListenerTarget::GalleryZoom(id)]);
}

#[test]
fn zoom_resets_when_the_image_changes_and_on_escape() {
    let (mut page, id) = page_with_main_gallery(3);

    let _ = send(&mut page, id, controller::Message::ToggleZoom);
    assert!(page.gallery(id).is_some_and(|g| g.is_zoomed()));
    let _ = send(&mut page, id, controller::Message::Next);
    assert!(!page.gallery(id).is_some_and(|g| g.is_zoomed()));

    let _ = send(&mut page, id, controller::Message::ToggleZoom);
    let _ = page.handle(Message::KeyPressed(Key::Escape));
    assert!(!page.gallery(id).is_some_and(|g| g.is_zoomed()));
}

#[test]
fn failed_image_falls_back_to_placeholder_once() {
    let (mut page, id) = page_with_main_gallery(1);
    let broken = ImageRef::new("/media/listing_0.jpg");
    let placeholder = ImageRef::new(DEFAULT_PLACEHOLDER);

    let effect = page.handle(Message::ImageFailed(broken));
    assert_eq!(effect, Effect::Load(vec![placeholder.clone()]));

    let effect = page.handle(Message::ImageFailed(placeholder));
    assert_eq!(effect, Effect::None);
    let image = page.gallery(id).and_then(|g| g.active_image()).expect("image");
    assert_eq!(image.status(), LoadStatus::Failed);
}

#[test]
fn deferred_slides_load_on_first_show() {
    let mut page = GalleryPage::new(GalleryOptions::default());
    let slides = vec![
        SlideSpec::eager("/media/a.jpg"),
        SlideSpec::deferred("/media/b.jpg"),
    ];
    let (id, initial) = page.add_gallery(GallerySource::Slides(slides), &GalleryLayout::carousel());
    assert_eq!(initial, vec![ImageRef::new("/media/a.jpg")]);

    let effect = send(&mut page, id, controller::Message::Next);
    assert_eq!(effect, Effect::Load(vec![ImageRef::new("/media/b.jpg")]));

    let _ = send(&mut page, id, controller::Message::Next);
    let effect = send(&mut page, id, controller::Message::Next);
    assert_eq!(effect, Effect::None);

    match page.gallery(id).map(|g| g.stage()) {
        Some(Stage::Slides(slides)) => assert!(slides.iter().all(|slide| !slide.is_deferred())),
        other => panic!("expected slides, got {other:?}"),
    }
}

#[test]
fn empty_gallery_ignores_every_command() {
    let mut page = GalleryPage::new(GalleryOptions::default());
    let (id, initial) = page.add_gallery(GallerySource::Slides(Vec::new()), &GalleryLayout::full());
    assert!(initial.is_empty());

    for message in [
        controller::Message::Next,
        controller::Message::Previous,
        controller::Message::ToggleZoom,
        controller::Message::OpenFullscreen,
    ] {
        assert_eq!(send(&mut page, id, message), Effect::None);
    }
    assert!(page.overlay().is_none());
    assert_eq!(index(&page, id), None);
}
