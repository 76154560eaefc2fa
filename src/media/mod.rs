// SPDX-License-Identifier: MPL-2.0
//! Image fetching, decoding, and caching.
//!
//! ```text
//! ImageRef ──► ImageLoader (HTTP / disk) ──► decode ──► ImageCache
//!                                                     ▲
//!                         LazyImages (reveal on view) ┘
//! ```

pub mod cache;
pub mod image;
pub mod lazy;
pub mod loader;

pub use cache::{CacheStats, ImageCache};
pub use image::ImageData;
pub use lazy::{visible_range, LazyImages};
pub use loader::{ImageLoader, Location};
