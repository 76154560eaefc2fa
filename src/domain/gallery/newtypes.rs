// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for gallery values, ensuring they are always
//! within valid ranges.

use std::fmt;

// =============================================================================
// Swipe Bounds
// =============================================================================

/// Swipe threshold bounds in logical pixels.
pub mod swipe_bounds {
    /// Smallest accepted threshold.
    pub const MIN_PX: f32 = 1.0;
    /// Largest accepted threshold.
    pub const MAX_PX: f32 = 400.0;
    /// Default threshold.
    pub const DEFAULT_PX: f32 = 40.0;
}

// =============================================================================
// ImageRef
// =============================================================================

/// Reference to an image: an absolute URL, a server-relative path, or a
/// local filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for `http://` and `https://` references.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// Returns true for references resolved against the server origin.
    #[must_use]
    pub fn is_server_relative(&self) -> bool {
        self.0.starts_with('/') && !self.0.starts_with("//")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal displacement a touch must strictly exceed to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(swipe_bounds::MIN_PX, swipe_bounds::MAX_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether a displacement of `dx` counts as a swipe.
    #[must_use]
    pub fn is_exceeded_by(self, dx: f32) -> bool {
        dx.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// GalleryId
// =============================================================================

/// Identifies a gallery within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GalleryId(u32);

impl GalleryId {
    #[must_use]
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

// =============================================================================
// TabIndex
// =============================================================================

/// Keyboard tab position of a gallery.
///
/// Positive values come first in ascending order, then zero in page order.
/// Negative values are focusable by pointer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabIndex(i32);

impl TabIndex {
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns whether Tab / Shift+Tab can reach this position.
    #[must_use]
    pub fn is_tabbable(self) -> bool {
        self.0 >= 0
    }

    /// Sort key placing positive indices before zero.
    #[must_use]
    pub fn order_key(self) -> (bool, i32) {
        (self.0 == 0, self.0)
    }
}
