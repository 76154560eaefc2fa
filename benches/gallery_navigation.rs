// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation.
//!
//! Measures the performance of:
//! - Cursor wrapping over large image lists
//! - Controller navigation (re-rendering stage and thumbnails)
//! - Page key routing with an open fullscreen overlay

use criterion::{criterion_group, criterion_main, Criterion};
use souq_gallery::domain::gallery::{Cursor, ImageRef};
use souq_gallery::gallery::controller::{self, GalleryController};
use souq_gallery::gallery::page::Message;
use souq_gallery::gallery::{GalleryLayout, GalleryOptions, GalleryPage, GallerySource, Key};
use std::hint::black_box;

fn refs(count: usize) -> Vec<ImageRef> {
    (0..count)
        .map(|i| ImageRef::new(format!("/media/listing_images/{i}.jpg")))
        .collect()
}

fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("cursor_next_wrap_1000", |b| {
        let mut cursor = Cursor::new(1000).unwrap();
        b.iter(|| {
            for _ in 0..1000 {
                black_box(cursor.next());
            }
        });
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let source = GallerySource::from_images(refs(50)).unwrap();
    let mut gallery = GalleryController::new(source, &GalleryLayout::full(), GalleryOptions::default());

    group.bench_function("controller_next_50_thumbnails", |b| {
        b.iter(|| black_box(gallery.handle(controller::Message::Next)));
    });

    group.bench_function("controller_thumbnail_jump", |b| {
        let mut target = 0;
        b.iter(|| {
            target = (target + 17) % 50;
            black_box(gallery.handle(controller::Message::ThumbnailPressed(target)))
        });
    });

    group.finish();
}

fn bench_page_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut page = GalleryPage::new(GalleryOptions::default());
    for _ in 0..5 {
        let source = GallerySource::from_images(refs(20)).unwrap();
        let (id, _) = page.add_gallery(source, &GalleryLayout::full());
        page.focus(id);
    }
    group.bench_function("page_arrow_key_focused", |b| {
        b.iter(|| black_box(page.handle(Message::KeyPressed(Key::ArrowRight))));
    });

    if let Some(id) = page.focused() {
        let _ = page.handle(Message::Gallery(id, controller::Message::OpenFullscreen));
    }
    group.bench_function("page_arrow_key_overlay", |b| {
        b.iter(|| black_box(page.handle(Message::KeyPressed(Key::ArrowRight))));
    });

    group.finish();
}

criterion_group!(benches, bench_cursor, bench_controller, bench_page_routing);
criterion_main!(benches);
