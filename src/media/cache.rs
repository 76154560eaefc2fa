// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by every gallery and listing card.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Shown images stay**: an image some element still shows is never
//!   evicted; the cache grows past its capacity instead and shrinks back once
//!   those elements move on
//! - **Reference-keyed**: one entry per [`ImageRef`], however many elements show it
//! - **Fetch deduplication**: a reference already in flight is not requested again

use super::image::ImageData;
use crate::config::{DEFAULT_IMAGE_CACHE_ENTRIES, MIN_IMAGE_CACHE_ENTRIES};
use crate::domain::gallery::ImageRef;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Cache statistics for debugging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    cache: LruCache<ImageRef, ImageData>,
    /// Configured size; `cache.cap()` exceeds it only while shown images need it.
    capacity: NonZeroUsize,
    in_flight: HashSet<ImageRef>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("cap", &self.cache.cap())
            .field("capacity", &self.capacity)
            .field("in_flight", &self.in_flight.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_ENTRIES)
    }
}

impl ImageCache {
    /// Creates a cache holding up to `capacity` images.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(MIN_IMAGE_CACHE_ENTRIES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            capacity,
            in_flight: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Filters `references` down to those needing a fetch and marks them in
    /// flight. Cached and already-requested references are skipped.
    pub fn begin_fetch(&mut self, references: &[ImageRef]) -> Vec<ImageRef> {
        let mut to_fetch = Vec::new();
        for reference in references {
            if self.cache.contains(reference) {
                self.stats.hits += 1;
                continue;
            }
            if self.in_flight.insert(reference.clone()) {
                self.stats.misses += 1;
                to_fetch.push(reference.clone());
            }
        }
        to_fetch
    }

    /// Stores a fetched image and clears its in-flight mark.
    ///
    /// Entries for which `is_shown` holds are never evicted to make room.
    pub fn insert(
        &mut self,
        reference: ImageRef,
        image: ImageData,
        is_shown: impl Fn(&ImageRef) -> bool,
    ) {
        self.in_flight.remove(&reference);
        if !self.cache.contains(&reference) {
            self.make_room(&is_shown);
        }
        self.cache.put(reference, image);
    }

    /// Evicts idle entries, least recently used first, until one more fits
    /// within the configured capacity, then sizes the cache to what remains.
    fn make_room(&mut self, is_shown: &impl Fn(&ImageRef) -> bool) {
        while self.cache.len() >= self.capacity.get() {
            let victim = self
                .cache
                .iter()
                .rev()
                .map(|(key, _)| key)
                .find(|key| !is_shown(key))
                .cloned();
            let Some(victim) = victim else {
                break;
            };
            self.cache.pop(&victim);
            self.stats.evictions += 1;
        }

        let needed = (self.cache.len() + 1).max(self.capacity.get());
        if needed != self.cache.cap().get() {
            if let Some(cap) = NonZeroUsize::new(needed) {
                if needed > self.capacity.get() {
                    tracing::debug!(
                        cap = needed,
                        capacity = self.capacity.get(),
                        "image cache over capacity for shown images"
                    );
                }
                self.cache.resize(cap);
            }
        }
    }

    /// Clears the in-flight mark of a failed fetch.
    pub fn fail(&mut self, reference: &ImageRef) {
        self.in_flight.remove(reference);
    }

    /// Looks up an image without changing LRU order (for rendering).
    #[must_use]
    pub fn peek(&self, reference: &ImageRef) -> Option<&ImageData> {
        self.cache.peek(reference)
    }

    /// Looks up an image, marking it recently used.
    pub fn get(&mut self, reference: &ImageRef) -> Option<&ImageData> {
        self.cache.get(reference)
    }

    #[must_use]
    pub fn contains(&self, reference: &ImageRef) -> bool {
        self.cache.contains(reference)
    }

    #[must_use]
    pub fn is_in_flight(&self, reference: &ImageRef) -> bool {
        self.in_flight.contains(reference)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn reference(i: usize) -> ImageRef {
        ImageRef::new(format!("/media/{i}.jpg"))
    }

    #[test]
    fn begin_fetch_deduplicates_in_flight_and_cached() {
        let mut cache = ImageCache::new(8);
        let first = cache.begin_fetch(&[reference(0), reference(1), reference(0)]);
        assert_eq!(first, vec![reference(0), reference(1)]);

        assert!(cache.begin_fetch(&[reference(0)]).is_empty());

        cache.insert(reference(0), pixel(), |_| false);
        assert!(!cache.is_in_flight(&reference(0)));
        assert!(cache.begin_fetch(&[reference(0)]).is_empty());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn failed_fetch_can_be_retried() {
        let mut cache = ImageCache::new(8);
        cache.begin_fetch(&[reference(0)]);
        cache.fail(&reference(0));
        assert_eq!(cache.begin_fetch(&[reference(0)]), vec![reference(0)]);
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = ImageCache::new(MIN_IMAGE_CACHE_ENTRIES);
        for i in 0..MIN_IMAGE_CACHE_ENTRIES {
            cache.insert(reference(i), pixel(), |_| false);
        }
        // Touch the oldest so the second oldest goes first.
        assert!(cache.get(&reference(0)).is_some());
        cache.insert(reference(100), pixel(), |_| false);

        assert!(cache.contains(&reference(0)));
        assert!(!cache.contains(&reference(1)));
        assert_eq!(cache.len(), MIN_IMAGE_CACHE_ENTRIES);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn capacity_never_drops_below_minimum() {
        let mut cache = ImageCache::new(0);
        for i in 0..MIN_IMAGE_CACHE_ENTRIES {
            cache.insert(reference(i), pixel(), |_| false);
        }
        assert_eq!(cache.len(), MIN_IMAGE_CACHE_ENTRIES);
    }

    #[test]
    fn shown_images_are_never_evicted() {
        let capacity = MIN_IMAGE_CACHE_ENTRIES;
        let mut cache = ImageCache::new(capacity);
        let shown = |r: &ImageRef| r.as_str().starts_with("/media/");
        for i in 0..capacity + 4 {
            cache.insert(reference(i), pixel(), shown);
        }

        assert_eq!(cache.len(), capacity + 4);
        assert!((0..capacity + 4).all(|i| cache.contains(&reference(i))));
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn grown_cache_settles_back_once_images_are_idle() {
        let capacity = MIN_IMAGE_CACHE_ENTRIES;
        let mut cache = ImageCache::new(capacity);
        for i in 0..capacity + 4 {
            cache.insert(reference(i), pixel(), |_| true);
        }

        cache.insert(ImageRef::new("/other/0.jpg"), pixel(), |_| false);
        assert_eq!(cache.len(), capacity);
        assert!(cache.contains(&ImageRef::new("/other/0.jpg")));
        assert!(!cache.contains(&reference(0)));
    }
}
