// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Value objects shared by every gallery on a page and by the fullscreen
//! overlay. Nothing here knows about rendering or input events.

pub mod cursor;
pub mod newtypes;

// Re-export commonly used types
pub use cursor::Cursor;
pub use newtypes::{GalleryId, ImageRef, SwipeThreshold, TabIndex};
