// SPDX-License-Identifier: MPL-2.0
//! Lazy loading of images as they scroll into view.
//!
//! Images are observed with a key (a listing id, a card index) and revealed
//! once, the first time their key becomes visible. Revealed keys are
//! unobserved, so later visibility changes never fetch again.

use crate::domain::gallery::ImageRef;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct LazyImages<K> {
    observed: HashMap<K, ImageRef>,
}

impl<K> Default for LazyImages<K> {
    fn default() -> Self {
        Self {
            observed: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> LazyImages<K> {
    pub fn observe(&mut self, key: K, reference: ImageRef) {
        self.observed.insert(key, reference);
    }

    /// Returns the newly visible keys with their references, unobserving them.
    pub fn reveal<I>(&mut self, visible: I) -> Vec<(K, ImageRef)>
    where
        I: IntoIterator<Item = K>,
    {
        visible
            .into_iter()
            .filter_map(|key| self.observed.remove(&key).map(|reference| (key, reference)))
            .collect()
    }

    #[must_use]
    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    pub fn clear(&mut self) {
        self.observed.clear();
    }
}

/// Indices of grid cards intersecting the viewport.
///
/// Cards are laid out in rows of `columns` cards, each row `row_height` tall.
/// `offset_y` is the scroll offset of the viewport's top edge.
#[must_use]
pub fn visible_range(
    offset_y: f32,
    viewport_height: f32,
    row_height: f32,
    columns: usize,
    count: usize,
) -> Range<usize> {
    if count == 0 || columns == 0 || row_height <= 0.0 || viewport_height <= 0.0 {
        return 0..0;
    }
    let offset_y = offset_y.max(0.0);
    let first_row = (offset_y / row_height).floor() as usize;
    let last_row = ((offset_y + viewport_height) / row_height).ceil() as usize;

    let start = first_row.saturating_mul(columns).min(count);
    let end = last_row.saturating_mul(columns).min(count);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_once_per_key() {
        let mut lazy = LazyImages::default();
        lazy.observe(1u64, ImageRef::from("/a.jpg"));
        lazy.observe(2u64, ImageRef::from("/b.jpg"));

        let revealed = lazy.reveal([1, 3]);
        assert_eq!(revealed, vec![(1, ImageRef::from("/a.jpg"))]);
        assert!(lazy.reveal([1]).is_empty());
        assert!(lazy.is_observed(&2));
        assert_eq!(lazy.len(), 1);
    }

    #[test]
    fn first_screen_is_visible_at_top() {
        assert_eq!(visible_range(0.0, 600.0, 280.0, 3, 12), 0..9);
    }

    #[test]
    fn scrolling_moves_the_window() {
        // Rows 2..=4 intersect [600, 1200).
        assert_eq!(visible_range(600.0, 600.0, 280.0, 3, 30), 6..15);
    }

    #[test]
    fn range_is_clamped_to_count() {
        assert_eq!(visible_range(0.0, 10_000.0, 280.0, 3, 5), 0..5);
        assert_eq!(visible_range(50_000.0, 600.0, 280.0, 3, 5), 5..5);
    }

    #[test]
    fn degenerate_inputs_yield_empty_range() {
        assert_eq!(visible_range(0.0, 600.0, 280.0, 3, 0), 0..0);
        assert_eq!(visible_range(0.0, 0.0, 280.0, 3, 10), 0..0);
        assert_eq!(visible_range(0.0, 600.0, 0.0, 3, 10), 0..0);
    }
}
